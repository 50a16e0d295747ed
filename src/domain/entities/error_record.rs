//! Error record persisted for every unhandled failure.

use uuid::Uuid;

/// Diagnostic record of an unhandled failure.
///
/// Only `id` is ever shown to the end user; `detail` is retrieved
/// out-of-band (see the `admin errors show` command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub id: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    pub detail: String,
}

impl ErrorRecord {
    pub fn new(id: String, timestamp: i64, detail: String) -> Self {
        Self {
            id,
            timestamp,
            detail,
        }
    }

    /// Creates a record with a freshly generated correlation id.
    pub fn capture(detail: String, timestamp: i64) -> Self {
        Self::new(Uuid::new_v4().to_string(), timestamp, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_generates_uuid() {
        let record = ErrorRecord::capture("boom".to_string(), 42);

        assert!(Uuid::parse_str(&record.id).is_ok());
        assert_eq!(record.timestamp, 42);
        assert_eq!(record.detail, "boom");
    }

    #[test]
    fn test_capture_ids_are_distinct() {
        let a = ErrorRecord::capture("a".to_string(), 1);
        let b = ErrorRecord::capture("a".to_string(), 1);

        assert_ne!(a.id, b.id);
    }
}

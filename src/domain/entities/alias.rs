//! Alias record mapping a short alias to its target URL.

/// A persisted alias with its ownership secret.
///
/// Records are immutable once created; the only lifecycle transition is
/// deletion by a caller presenting the matching `secret`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRecord {
    pub alias: String,
    pub target: String,
    pub secret: String,
}

impl AliasRecord {
    /// Creates a new AliasRecord instance.
    pub fn new(alias: String, target: String, secret: String) -> Self {
        Self {
            alias,
            target,
            secret,
        }
    }

    /// Returns true if `candidate` proves ownership of this record.
    pub fn is_owned_by(&self, candidate: &str) -> bool {
        self.secret == candidate
    }
}

/// Result of a successful create: the only time the secret leaves the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAlias {
    pub alias: String,
    pub secret: String,
}

impl From<AliasRecord> for CreatedAlias {
    fn from(record: AliasRecord) -> Self {
        Self {
            alias: record.alias,
            secret: record.secret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_record_creation() {
        let record = AliasRecord::new(
            "abc12".to_string(),
            "https://example.com".to_string(),
            "0f0e".to_string(),
        );

        assert_eq!(record.alias, "abc12");
        assert_eq!(record.target, "https://example.com");
        assert!(record.is_owned_by("0f0e"));
        assert!(!record.is_owned_by("0f0f"));
    }

    #[test]
    fn test_created_alias_drops_target() {
        let record = AliasRecord::new(
            "docs".to_string(),
            "https://docs.rs".to_string(),
            "s3cr3t".to_string(),
        );

        let created = CreatedAlias::from(record);
        assert_eq!(created.alias, "docs");
        assert_eq!(created.secret, "s3cr3t");
    }
}

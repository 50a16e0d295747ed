//! Visit entity recorded each time an alias is resolved.

/// A single resolve of an alias.
///
/// Visits are purely additive history: nothing in the service reads them
/// back, and they outlive the alias they point at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub alias: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

impl Visit {
    pub fn new(alias: String, timestamp: i64) -> Self {
        Self { alias, timestamp }
    }
}

//! Ownership secret generation.

use uuid::Uuid;

/// Mints a fresh ownership secret.
///
/// A random (v4) UUID rendered as 32 lowercase hex digits: 122 bits of
/// entropy, safe to embed in a URL path segment.
pub fn generate_secret() -> String {
    Uuid::new_v4().simple().to_string()
}

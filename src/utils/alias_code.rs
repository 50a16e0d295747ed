//! Alias generation and validation.
//!
//! Checks run in a fixed order and the first failing rule wins; each rule has
//! its own user-facing message.

use crate::error::AppError;
use rand::Rng;

/// Length of generated aliases.
pub const GENERATED_ALIAS_LENGTH: usize = 5;

/// Maximum alias length, in characters.
pub const MAX_ALIAS_LENGTH: usize = 10;

/// Maximum target URL length, in characters.
pub const MAX_TARGET_LENGTH: usize = 1024;

/// Lowercase letters and digits.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Aliases that collide with well-known crawler paths served at the same level.
pub const RESERVED_ALIASES: &[&str] = &["robots.txt", "favicon.ico", "sitemap.xml"];

/// Generates a random alias of [`GENERATED_ALIAS_LENGTH`] characters drawn
/// uniformly from `[a-z0-9]`.
///
/// Generation does not consult the store; a collision surfaces later as
/// "Alias already exists.".
pub fn generate_alias() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_ALIAS_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns the alias to use for a create request.
///
/// An absent or blank request yields a generated alias; anything else is used
/// exactly as given, surrounding whitespace included.
pub fn resolve_requested_alias(requested: Option<&str>) -> String {
    match requested {
        Some(alias) if !alias.trim().is_empty() => alias.to_string(),
        _ => generate_alias(),
    }
}

/// Validates an alias/target pair against the shape rules.
///
/// # Rules (in order)
///
/// 1. Alias at most 10 characters
/// 2. Target at most 1024 characters
/// 3. Alias is ASCII
/// 4. Target is ASCII
/// 5. Alias is not reserved
///
/// Uniqueness is checked separately against the store.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for the first rule violated.
pub fn validate_alias(alias: &str, target: &str) -> Result<(), AppError> {
    if alias.chars().count() > MAX_ALIAS_LENGTH {
        return Err(AppError::validation("Alias too long."));
    }

    if target.chars().count() > MAX_TARGET_LENGTH {
        return Err(AppError::validation("URL too long."));
    }

    if !alias.is_ascii() {
        return Err(AppError::validation("Alias must be ASCII."));
    }

    if !target.is_ascii() {
        return Err(AppError::validation("URL must be ASCII."));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::validation("Alias is blocked."));
    }

    Ok(())
}

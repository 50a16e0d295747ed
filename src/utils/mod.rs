//! Utility functions for alias and secret generation.
//!
//! - [`alias_code`] - Alias generation and shape validation
//! - [`secret`] - Ownership secret generation
//! - [`time`] - Unix timestamps

pub mod alias_code;
pub mod secret;
pub mod time;

//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Validation lives in the alias service
//! (see [`crate::application::services::AliasService`]).
//!
//! # Entity Types
//!
//! - [`AliasRecord`] - An alias mapped to its target URL and ownership secret
//! - [`Visit`] - One resolve of an alias
//! - [`ErrorRecord`] - Diagnostic record of an unhandled failure

pub mod alias;
pub mod error_record;
pub mod visit;

pub use alias::{AliasRecord, CreatedAlias};
pub use error_record::ErrorRecord;
pub use visit::Visit;

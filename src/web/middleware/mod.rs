//! Web-layer middleware.

pub mod error_boundary;

//! HTTP middleware shared by the API and web layers.

pub mod tracing;

//! Business logic services for the application layer.

pub mod alias_service;
pub mod error_sink;
pub mod visit_recorder;

pub use alias_service::AliasService;
pub use error_sink::ErrorSink;
pub use visit_recorder::VisitRecorder;

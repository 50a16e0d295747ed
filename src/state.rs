//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AliasService, ErrorSink, VisitRecorder};
use crate::domain::entities::Visit;
use crate::domain::repositories::{AliasRepository, ErrorRepository};

/// Handles to the services. Cheap to clone; holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub alias_service: Arc<AliasService>,
    pub error_sink: ErrorSink,
    pub visit_recorder: VisitRecorder,
    pub alias_repository: Arc<dyn AliasRepository>,
}

impl AppState {
    /// Wires the services on top of the given store handles.
    ///
    /// `visit_sender` feeds [`crate::domain::visit_worker::run_visit_worker`].
    pub fn new(
        alias_repository: Arc<dyn AliasRepository>,
        error_repository: Arc<dyn ErrorRepository>,
        visit_sender: mpsc::Sender<Visit>,
    ) -> Self {
        let visit_recorder = VisitRecorder::new(visit_sender);
        let alias_service = Arc::new(AliasService::new(
            alias_repository.clone(),
            visit_recorder.clone(),
        ));

        Self {
            alias_service,
            error_sink: ErrorSink::new(error_repository),
            visit_recorder,
            alias_repository,
        }
    }
}

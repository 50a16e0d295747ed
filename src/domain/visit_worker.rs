//! Background worker persisting visits off the redirect path.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Semaphore, mpsc};
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, warn};

use crate::domain::entities::Visit;
use crate::domain::repositories::VisitRepository;

/// Tuning knobs for [`run_visit_worker`].
#[derive(Debug, Clone, Copy)]
pub struct VisitWorkerConfig {
    /// Maximum number of visits written concurrently.
    pub concurrency: usize,
    /// Retries after the first failed write before a visit is dropped.
    pub max_retries: usize,
}

impl Default for VisitWorkerConfig {
    fn default() -> Self {
        Self {
            concurrency: 4,
            max_retries: 3,
        }
    }
}

/// Drains the visit channel until every sender is dropped.
///
/// Each visit is written in its own task, bounded by `config.concurrency`.
/// Failed writes are retried with jittered exponential backoff; a visit that
/// still fails is logged and dropped. Returns once all in-flight writes have
/// finished.
pub async fn run_visit_worker(
    mut rx: mpsc::Receiver<Visit>,
    repository: Arc<dyn VisitRepository>,
    config: VisitWorkerConfig,
) {
    let concurrency = config.concurrency.max(1);
    let permits = Arc::new(Semaphore::new(concurrency));

    while let Some(visit) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let repository = repository.clone();
        tokio::spawn(async move {
            let _permit = permit;
            persist_visit(repository, visit, config.max_retries).await;
        });
    }

    let _ = permits.acquire_many(concurrency as u32).await;
    debug!("Visit worker stopped");
}

async fn persist_visit(repository: Arc<dyn VisitRepository>, visit: Visit, max_retries: usize) {
    let strategy = ExponentialBackoff::from_millis(10)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(max_retries);

    let result = Retry::start(strategy, || {
        let repository = repository.clone();
        let visit = visit.clone();
        async move { repository.record(visit).await }
    })
    .await;

    match result {
        Ok(()) => debug!(alias = %visit.alias, "Visit recorded"),
        Err(e) => warn!(alias = %visit.alias, error = %e, "Dropping visit after retries"),
    }
}

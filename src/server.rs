//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, worker spawning, and Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{AliasRepository, ErrorRepository, VisitRepository};
use crate::domain::visit_worker::{VisitWorkerConfig, run_visit_worker};
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::persistence::{PgAliasRepository, PgErrorRepository, PgVisitRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long shutdown waits for queued visits to be written.
const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Store handles for the three collections.
pub struct Repositories {
    pub aliases: Arc<dyn AliasRepository>,
    pub visits: Arc<dyn VisitRepository>,
    pub errors: Arc<dyn ErrorRepository>,
}

impl Repositories {
    /// All three collections backed by one in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            aliases: store.clone(),
            visits: store.clone(),
            errors: store,
        }
    }

    /// All three collections backed by a PostgreSQL pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            aliases: Arc::new(PgAliasRepository::new(pool.clone())),
            visits: Arc::new(PgVisitRepository::new(pool.clone())),
            errors: Arc::new(PgErrorRepository::new(pool)),
        }
    }
}

/// Connects a PostgreSQL pool using the configured pool settings.
///
/// # Errors
///
/// Returns an error if the database URL is missing or the connection fails.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set for the postgres storage backend")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

async fn open_storage(config: &Config) -> Result<Repositories> {
    match config.storage_backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data is lost on restart");
            Ok(Repositories::in_memory())
        }
        StorageBackend::Postgres => {
            let pool = connect_pool(config).await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            Ok(Repositories::postgres(Arc::new(pool)))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage (PostgreSQL with migrations, or in-memory)
/// - Background visit worker
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repositories = open_storage(&config).await?;

    let (visit_tx, visit_rx) = mpsc::channel(config.visit_queue_capacity);
    let worker = tokio::spawn(run_visit_worker(
        visit_rx,
        repositories.visits.clone(),
        VisitWorkerConfig {
            concurrency: config.visit_worker_concurrency,
            max_retries: config.visit_max_retries,
        },
    ));
    tracing::info!("Visit worker started");

    let state = AppState::new(repositories.aliases, repositories.errors, visit_tx);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and with it the last visit sender) is gone; let the worker
    // flush what is queued.
    match tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("Visit worker failed: {}", e),
        Err(_) => tracing::warn!("Visit worker did not drain in time, pending visits dropped"),
    }
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

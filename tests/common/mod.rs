#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use tokio::sync::mpsc;
use url_alias::domain::entities::{AliasRecord, Visit};
use url_alias::domain::repositories::AliasRepository;
use url_alias::error::AppError;
use url_alias::infrastructure::memory::MemoryStore;
use url_alias::routes::build_router;
use url_alias::state::AppState;

pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryStore>,
    pub visits: mpsc::Receiver<Visit>,
}

pub fn create_test_state(store: Arc<MemoryStore>) -> (AppState, mpsc::Receiver<Visit>) {
    let (tx, rx) = mpsc::channel(100);
    let state = AppState::new(store.clone(), store, tx);
    (state, rx)
}

pub fn spawn_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let (state, visits) = create_test_state(store.clone());
    let server = TestServer::new(build_router(state)).unwrap();

    TestApp {
        server,
        store,
        visits,
    }
}

/// App over a custom alias store; visits and error records go to `store`.
pub fn spawn_app_with_aliases(aliases: Arc<dyn AliasRepository>) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let (tx, visits) = mpsc::channel(100);
    let state = AppState::new(aliases, store.clone(), tx);
    let server = TestServer::new(build_router(state)).unwrap();

    TestApp {
        server,
        store,
        visits,
    }
}

pub async fn create_test_alias(store: &MemoryStore, alias: &str, target: &str, secret: &str) {
    AliasRepository::insert(
        store,
        AliasRecord::new(alias.to_string(), target.to_string(), secret.to_string()),
    )
    .await
    .unwrap();
}

/// Alias store that is unreachable.
pub struct UnavailableStore;

#[async_trait]
impl AliasRepository for UnavailableStore {
    async fn insert(&self, _record: AliasRecord) -> Result<(), AppError> {
        Err(unavailable())
    }

    async fn find_by_alias(&self, _alias: &str) -> Result<Option<AliasRecord>, AppError> {
        Err(unavailable())
    }

    async fn find_by_secret(&self, _secret: &str) -> Result<Option<AliasRecord>, AppError> {
        Err(unavailable())
    }

    async fn delete(&self, _alias: &str, _secret: &str) -> Result<bool, AppError> {
        Err(unavailable())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

fn unavailable() -> AppError {
    AppError::internal("Database error", "connection refused (os error 111)")
}

/// Alias store that panics on lookup.
pub struct PanickingStore;

#[async_trait]
impl AliasRepository for PanickingStore {
    async fn insert(&self, _record: AliasRecord) -> Result<(), AppError> {
        Ok(())
    }

    async fn find_by_alias(&self, _alias: &str) -> Result<Option<AliasRecord>, AppError> {
        panic!("lookup exploded")
    }

    async fn find_by_secret(&self, _secret: &str) -> Result<Option<AliasRecord>, AppError> {
        Ok(None)
    }

    async fn delete(&self, _alias: &str, _secret: &str) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

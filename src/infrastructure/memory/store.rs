use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Mutex;

use crate::domain::entities::{AliasRecord, ErrorRecord, Visit};
use crate::domain::repositories::{AliasRepository, ErrorRepository, VisitRepository};
use crate::error::AppError;

/// In-memory implementation of every repository trait.
///
/// Share one instance (behind an `Arc`) between the services so that they see
/// the same data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    links: DashMap<String, AliasRecord>,
    views: Mutex<Vec<Visit>>,
    errors: DashMap<String, ErrorRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored alias records.
    pub fn alias_count(&self) -> usize {
        self.links.len()
    }

    /// Snapshot of the recorded visits, oldest first.
    pub fn visits(&self) -> Vec<Visit> {
        self.views
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Snapshot of the stored error records, in no particular order.
    pub fn error_records(&self) -> Vec<ErrorRecord> {
        self.errors.iter().map(|e| e.value().clone()).collect()
    }
}

#[async_trait]
impl AliasRepository for MemoryStore {
    async fn insert(&self, record: AliasRecord) -> Result<(), AppError> {
        match self.links.entry(record.alias.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "alias '{}' already exists",
                record.alias
            ))),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn find_by_alias(&self, alias: &str) -> Result<Option<AliasRecord>, AppError> {
        Ok(self.links.get(alias).map(|r| r.value().clone()))
    }

    async fn find_by_secret(&self, secret: &str) -> Result<Option<AliasRecord>, AppError> {
        Ok(self
            .links
            .iter()
            .find(|r| r.value().is_owned_by(secret))
            .map(|r| r.value().clone()))
    }

    async fn delete(&self, alias: &str, secret: &str) -> Result<bool, AppError> {
        Ok(self
            .links
            .remove_if(alias, |_, record| record.is_owned_by(secret))
            .is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[async_trait]
impl VisitRepository for MemoryStore {
    async fn record(&self, visit: Visit) -> Result<(), AppError> {
        self.views
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(visit);
        Ok(())
    }
}

#[async_trait]
impl ErrorRepository for MemoryStore {
    async fn insert(&self, record: ErrorRecord) -> Result<(), AppError> {
        self.errors.insert(record.id.clone(), record);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ErrorRecord>, AppError> {
        Ok(self.errors.get(id).map(|r| r.value().clone()))
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ErrorRecord>, AppError> {
        let mut records = self.error_records();
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then_with(|| a.id.cmp(&b.id)));
        records.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(records)
    }
}

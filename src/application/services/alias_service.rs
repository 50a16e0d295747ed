//! Alias registry: creation, resolution and secret-based deletion.

use std::sync::Arc;

use tracing::{debug, info};

use crate::application::services::VisitRecorder;
use crate::domain::entities::{AliasRecord, CreatedAlias};
use crate::domain::repositories::AliasRepository;
use crate::error::AppError;
use crate::utils::alias_code::{resolve_requested_alias, validate_alias};
use crate::utils::secret::generate_secret;
use crate::utils::time::unix_now;

pub const ALIAS_EXISTS: &str = "Alias already exists.";
pub const ALIAS_NOT_FOUND: &str = "Alias not found!";
pub const SECRET_NOT_FOUND: &str = "Secret not found!";

/// Service owning the alias lifecycle.
///
/// Holds no state of its own beyond the store handle and the visit recorder;
/// all coordination between concurrent requests happens in the store.
pub struct AliasService {
    repository: Arc<dyn AliasRepository>,
    visits: VisitRecorder,
}

impl AliasService {
    /// Creates a new alias service.
    pub fn new(repository: Arc<dyn AliasRepository>, visits: VisitRecorder) -> Self {
        Self { repository, visits }
    }

    /// Registers `target` under a requested or generated alias.
    ///
    /// A blank or absent `requested_alias` yields a generated 5-character
    /// alias. Generation is not retried on collision.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - alias is longer than 10 characters
    /// - target is longer than 1024 characters
    /// - alias or target is not ASCII
    /// - alias is reserved
    /// - alias already exists
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(
        &self,
        target: &str,
        requested_alias: Option<&str>,
    ) -> Result<CreatedAlias, AppError> {
        let alias = resolve_requested_alias(requested_alias);
        validate_alias(&alias, target)?;

        if self.repository.find_by_alias(&alias).await?.is_some() {
            return Err(AppError::validation(ALIAS_EXISTS));
        }

        let record = AliasRecord::new(alias, target.to_string(), generate_secret());

        // The insert is conditional, so a concurrent create that slipped past
        // the check above still loses here.
        match self.repository.insert(record.clone()).await {
            Ok(()) => {
                info!(alias = %record.alias, "Alias created");
                Ok(record.into())
            }
            Err(AppError::Conflict(_)) => Err(AppError::validation(ALIAS_EXISTS)),
            Err(e) => Err(e),
        }
    }

    /// Returns the target URL for `alias` and records a visit.
    ///
    /// The visit is submitted without waiting; its outcome never affects the
    /// result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the alias does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        let record = self
            .repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(|| AppError::not_found(ALIAS_NOT_FOUND))?;

        self.visits.record(&record.alias, unix_now());
        debug!(alias = %record.alias, "Alias resolved");

        Ok(record.target)
    }

    /// Deletes the alias owned by `secret`.
    ///
    /// The removal itself is conditional on the secret, so an alias deleted
    /// and registered again after the lookup stays with its new owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no alias is owned by this secret,
    /// including when it has already been deleted.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete(&self, secret: &str) -> Result<(), AppError> {
        let record = self
            .repository
            .find_by_secret(secret)
            .await?
            .ok_or_else(|| AppError::not_found(SECRET_NOT_FOUND))?;

        if !self.repository.delete(&record.alias, secret).await? {
            return Err(AppError::not_found(SECRET_NOT_FOUND));
        }

        info!(alias = %record.alias, "Alias deleted");
        Ok(())
    }
}

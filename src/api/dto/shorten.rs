//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::CreatedAlias;

/// Query string of `GET /api/shorten`.
#[derive(Debug, Deserialize)]
pub struct ShortenQuery {
    /// Target URL. Required; kept optional here so a missing value is
    /// reported as a JSON error instead of an extractor rejection.
    pub link: Option<String>,

    /// Requested alias; blank or absent means "generate one".
    pub alias: Option<String>,
}

/// Successful shorten result. The secret is shown exactly once.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub alias: String,
    pub secret: String,
}

impl From<CreatedAlias> for ShortenResponse {
    fn from(created: CreatedAlias) -> Self {
        Self {
            alias: created.alias,
            secret: created.secret,
        }
    }
}

//! Home page and form-based shortening.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;

use crate::api::handlers::shorten::MISSING_LINK;
use crate::domain::entities::CreatedAlias;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PageError;

/// Template for the home page, optionally showing a freshly created alias.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub created: Option<CreatedAlias>,
}

/// Body of the create form.
#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub link: Option<String>,
    pub alias: Option<String>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> IndexTemplate {
    IndexTemplate { created: None }
}

/// Creates an alias from the home page form.
///
/// # Endpoint
///
/// `POST /` (form fields `link`, `alias`)
///
/// On success the page shows the alias and its delete link. The secret is
/// never shown again.
pub async fn web_shorten_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<IndexTemplate, PageError> {
    let link = form.link.ok_or_else(|| AppError::validation(MISSING_LINK))?;

    let created = state
        .alias_service
        .create(&link, form.alias.as_deref())
        .await?;

    Ok(IndexTemplate {
        created: Some(created),
    })
}

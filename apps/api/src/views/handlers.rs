use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::views::{assemble, Page, PageView};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub category: Option<String>,
}

/// GET /api/v1/sessions/:id/pages/:page?category=
///
/// Renders one page for the session. The session state is cloned out of the store
/// and the view is built after the store lock is released.
pub async fn handle_get_page(
    State(state): State<AppState>,
    Path((id, page)): Path<(Uuid, String)>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageView>, AppError> {
    let page: Page = page.parse()?;
    let session = state.sessions.read(id, |s| s.clone()).await?;

    debug!(session_id = %id, %page, category = ?query.category, "Assembling page view");

    let view = assemble(page, &session, &state.catalog, query.category.as_deref())?;
    Ok(Json(view))
}

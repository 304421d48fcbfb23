use axum::{extract::State, Json};

use crate::catalog::models::ContentCatalog;
use crate::state::AppState;

/// GET /api/v1/catalog
pub async fn handle_get_catalog(State(state): State<AppState>) -> Json<ContentCatalog> {
    Json(state.catalog.as_ref().clone())
}

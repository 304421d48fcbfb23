pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::{catalog, contact, session, theme, views};

/// Headroom over the photo limit for multipart framing.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.avatar_max_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health::health_handler))
        // Themes
        .route(
            "/api/v1/themes/:theme/palette",
            get(theme::handlers::handle_get_palette),
        )
        // Sessions
        .route(
            "/api/v1/sessions",
            post(session::handlers::handle_create_session),
        )
        .route(
            "/api/v1/sessions/:id",
            get(session::handlers::handle_get_session)
                .delete(session::handlers::handle_end_session),
        )
        .route(
            "/api/v1/sessions/:id/theme/toggle",
            post(session::handlers::handle_toggle_theme),
        )
        .route(
            "/api/v1/sessions/:id/avatar",
            put(session::handlers::handle_set_avatar)
                .delete(session::handlers::handle_clear_avatar),
        )
        // Pages
        .route(
            "/api/v1/sessions/:id/pages/:page",
            get(views::handlers::handle_get_page),
        )
        // Content
        .route("/api/v1/catalog", get(catalog::handlers::handle_get_catalog))
        .route("/api/v1/contact", post(contact::handlers::handle_submit_contact))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

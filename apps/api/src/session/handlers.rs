//! Axum route handlers for session lifecycle, theme toggling and avatar upload.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::avatar::{AvatarDescriptor, AvatarSlot, AvatarState};
use crate::session::state::SessionState;
use crate::state::AppState;
use crate::theme::{resolve, Palette, Theme};

/// Multipart field carrying the uploaded photo.
const PHOTO_FIELD: &str = "photo";

#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub theme: Theme,
    pub toggle_label: &'static str,
    pub palette: Palette,
    pub avatar: AvatarDescriptor,
}

impl SessionSnapshot {
    fn new(session_id: Uuid, created_at: DateTime<Utc>, state: &SessionState) -> Self {
        let theme = state.theme();
        Self {
            session_id,
            created_at,
            theme,
            toggle_label: theme.toggle_label(),
            palette: resolve(theme),
            avatar: AvatarSlot::Sidebar.resolve(state.avatar()),
        }
    }
}

async fn snapshot(state: &AppState, id: Uuid) -> Result<SessionSnapshot, AppError> {
    let created_at = state.sessions.created_at(id).await?;
    state
        .sessions
        .read(id, |session| SessionSnapshot::new(id, created_at, session))
        .await
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let (id, _) = state.sessions.create().await;
    Ok((StatusCode::CREATED, Json(snapshot(&state, id).await?)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    Ok(Json(snapshot(&state, id).await?))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    let theme = state.sessions.update(id, |s| s.toggle_theme()).await?;
    info!("Session {id} switched to {theme} theme");
    Ok(Json(snapshot(&state, id).await?))
}

/// PUT /api/v1/sessions/:id/avatar
///
/// Confirms an uploaded photo (multipart field `photo`). The file is validated
/// before the session is touched, so a rejected upload leaves the old photo in place.
pub async fn handle_set_avatar(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<SessionSnapshot>, AppError> {
    let (filename, data) = read_photo_field(multipart).await?;
    let avatar = AvatarState::from_upload(&filename, data, state.config.avatar_max_bytes)?;
    let (size, mime) = (avatar.bytes.len(), avatar.mime.clone());

    state
        .sessions
        .update(id, |s| s.set_avatar(avatar.bytes, avatar.mime))
        .await?;
    info!("Session {id} profile photo set ({size} bytes, {mime})");

    Ok(Json(snapshot(&state, id).await?))
}

/// DELETE /api/v1/sessions/:id/avatar
pub async fn handle_clear_avatar(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, AppError> {
    if state.sessions.update(id, |s| s.clear_avatar()).await? {
        info!("Session {id} profile photo removed");
    }
    Ok(Json(snapshot(&state, id).await?))
}

async fn read_photo_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("The photo field has no filename".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded photo: {e}")))?;
        return Ok((filename, data));
    }
    Err(AppError::Validation(format!(
        "Missing multipart field '{PHOTO_FIELD}'"
    )))
}

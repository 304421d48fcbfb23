use axum::{extract::State, Json};
use serde::Serialize;

use crate::contact::delivery::DeliveryReceipt;
use crate::contact::validation::{validate_submission, ContactFormDraft};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: String,
    pub receipt: DeliveryReceipt,
}

/// POST /api/v1/contact
///
/// Validates the draft, then hands it to the configured sink once. Blank required
/// fields come back as 422 `MISSING_FIELDS` so the client can re-prompt.
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    Json(draft): Json<ContactFormDraft>,
) -> Result<Json<ContactResponse>, AppError> {
    let accepted = validate_submission(draft)?;
    let receipt = state.message_sink.deliver(&accepted).await?;

    Ok(Json(ContactResponse {
        status: "sent",
        message: format!(
            "🎉 Thanks, {}! {} will get back to you soon.",
            accepted.name,
            state.catalog.profile.first_name()
        ),
        receipt,
    }))
}

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::theme::palette::{resolve, Palette, Theme};

#[derive(Debug, Serialize)]
pub struct PaletteResponse {
    pub theme: Theme,
    pub palette: Palette,
    pub css: String,
}

/// GET /api/v1/themes/:theme/palette
pub async fn handle_get_palette(
    Path(theme): Path<String>,
) -> Result<Json<PaletteResponse>, AppError> {
    let theme: Theme = theme.parse().map_err(AppError::NotFound)?;
    let palette = resolve(theme);
    Ok(Json(PaletteResponse {
        theme,
        palette,
        css: palette.css_variables(),
    }))
}

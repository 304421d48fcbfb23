use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use crate::catalog::models::ContentCatalog;
use crate::catalog::seed::default_catalog;

/// Number of axes the skill radar chart is drawn with.
pub const RADAR_AXES: usize = 7;

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("'{label}' has percentage {value}; expected 0-100")]
    PercentOutOfRange { label: String, value: u8 },

    #[error("Skill radar needs exactly 7 axes, found {found}")]
    RadarAxes { found: usize },

    #[error("Profile name must not be empty")]
    MissingName,
}

/// Loads the catalog from a JSON file, or falls back to the built-in content.
pub fn load_catalog(path: Option<&Path>) -> Result<ContentCatalog> {
    let catalog = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
            let catalog: ContentCatalog = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse catalog file {}", path.display()))?;
            info!("Loaded catalog from {}", path.display());
            catalog
        }
        None => {
            info!("Using built-in catalog");
            default_catalog()
        }
    };

    validate_catalog(&catalog)?;
    info!(
        "Catalog ready: {} projects, {} skills, {} timeline entries",
        catalog.projects.len(),
        catalog.skills.len(),
        catalog.timeline.len()
    );
    Ok(catalog)
}

/// Checks the invariants the views rely on.
pub fn validate_catalog(catalog: &ContentCatalog) -> Result<(), CatalogError> {
    if catalog.profile.name.trim().is_empty() {
        return Err(CatalogError::MissingName);
    }

    if catalog.radar.len() != RADAR_AXES {
        return Err(CatalogError::RadarAxes {
            found: catalog.radar.len(),
        });
    }

    let percentages = catalog
        .skills
        .iter()
        .map(|s| (&s.label, s.proficiency))
        .chain(catalog.radar.iter().map(|a| (&a.label, a.score)))
        .chain(
            catalog
                .personality
                .iter()
                .chain(&catalog.currently_learning)
                .chain(&catalog.contact.open_to)
                .map(|p| (&p.label, p.percent)),
        );

    for (label, value) in percentages {
        if value > 100 {
            return Err(CatalogError::PercentOutOfRange {
                label: label.clone(),
                value,
            });
        }
    }

    Ok(())
}

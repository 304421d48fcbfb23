// Page view models: combines the session's palette and avatar with catalog slices.
// Everything here is a pure function of (SessionState, ContentCatalog, page, filter).

pub mod assembler;
pub mod charts;
pub mod filter;
pub mod handlers;

use thiserror::Error;

pub use assembler::{assemble, Page, PageView};

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("Unrecognized project category '{0}' (expected All, Web Dev, Academic Project or Personal)")]
    InvalidFilter(String),

    #[error("Unknown page '{0}'")]
    UnknownPage(String),
}

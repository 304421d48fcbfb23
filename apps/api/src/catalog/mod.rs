// Static portfolio content: projects, skills, timeline, certificates, contact details.
// Consumed read-only by the views; sessions never modify it.

pub mod handlers;
pub mod loader;
pub mod models;
pub mod seed;

pub use models::ContentCatalog;

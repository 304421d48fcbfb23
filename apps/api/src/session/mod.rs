// Visitor session state: theme flag, optional uploaded photo, and the in-memory
// registry that hands sessions out. Nothing here is persisted.

pub mod avatar;
pub mod handlers;
pub mod state;
pub mod store;

pub use store::SessionStore;

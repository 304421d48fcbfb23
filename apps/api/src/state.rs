use std::sync::Arc;

use crate::catalog::ContentCatalog;
use crate::config::Config;
use crate::contact::delivery::MessageSink;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after startup.
    pub catalog: Arc<ContentCatalog>,
    pub sessions: SessionStore,
    /// Pluggable contact delivery. Default: SimulatedSink.
    pub message_sink: Arc<dyn MessageSink>,
}

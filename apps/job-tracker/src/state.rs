use crate::config::Config;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Opened once in `main` and closed after the server shuts down.
    pub store: Store,
    pub config: Config,
}

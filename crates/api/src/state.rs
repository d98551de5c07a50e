use std::sync::Arc;

use bistro_core::content::SiteContent;
use bistro_db::ReservationStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once in `main` and cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Where reservations are written.
    pub store: Arc<dyn ReservationStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Static site content served read-only.
    pub content: Arc<SiteContent>,
}

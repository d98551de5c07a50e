use axum::routing::get;
use axum::Router;

use crate::handlers::{self, content};
use crate::state::AppState;

/// Site content routes mounted at `/content`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(content::get_content).fallback(handlers::method_not_allowed),
    )
}

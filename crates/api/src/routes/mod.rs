pub mod content;
pub mod health;
pub mod reservation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /reservation/send                                submit a reservation (POST)
/// /content                                         static site content (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/reservation", reservation::router())
        .nest("/content", content::router())
}

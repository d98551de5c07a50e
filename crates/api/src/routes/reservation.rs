use axum::routing::post;
use axum::Router;

use crate::handlers::{self, reservation};
use crate::state::AppState;

/// Reservation routes mounted at `/reservation`.
///
/// ```text
/// POST /send  -> send_reservation
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/send",
        post(reservation::send_reservation).fallback(handlers::method_not_allowed),
    )
}

//! Handler for the public reservation form.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use bistro_core::error::CoreError;
use bistro_core::reservation::{ReservationSubmission, RESERVATION_SENT_MESSAGE};
use bistro_db::models::reservation::NewReservation;

use crate::error::AppResult;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /reservation/send
// ---------------------------------------------------------------------------

/// Accept a reservation: presence check, then validate-and-insert through
/// the store.
///
/// A body that is not a JSON object of strings is answered exactly like a
/// form with missing fields.
pub async fn send_reservation(
    State(state): State<AppState>,
    payload: Result<Json<ReservationSubmission>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(submission) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable reservation body");
        CoreError::IncompleteSubmission
    })?;

    let missing = submission.missing_fields();
    if !missing.is_empty() {
        tracing::debug!(?missing, "Incomplete reservation submission");
    }
    let fields = submission.into_fields()?;

    let reservation = state.store.insert(&NewReservation::from(fields)).await?;

    tracing::info!(
        reservation_id = reservation.id,
        date = %reservation.date,
        time = %reservation.time,
        "Reservation stored",
    );

    Ok(Json(MessageResponse::ok(RESERVATION_SENT_MESSAGE)))
}

//! The write seam between the HTTP layer and storage.
//!
//! [`ReservationStore`] re-validates every reservation before it is written,
//! so a caller that skipped the API's presence check still cannot persist a
//! malformed row. Two implementations exist: [`PgReservationStore`] for
//! production and [`MemoryReservationStore`] for tests and local demos.

mod memory;
mod pg;

use async_trait::async_trait;
use bistro_core::reservation::{ReservationField, INCOMPLETE_SUBMISSION_MESSAGE};
use validator::{Validate, ValidationErrors};

use crate::models::reservation::{validation_message, NewReservation, Reservation};

pub use memory::MemoryReservationStore;
pub use pg::PgReservationStore;

/// PostgreSQL `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Prefix shared by the `reservations` CHECK constraints.
const CHECK_PREFIX: &str = "ck_reservations_";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The reservation breaks a field rule. The message is safe to show.
    #[error("{0}")]
    Rejected(String),

    /// The database could not be reached or refused the write.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Rejected(validation_message(&errors))
    }
}

impl StoreError {
    /// Classify a write error, turning CHECK constraint violations into
    /// [`StoreError::Rejected`].
    pub fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(CHECK_VIOLATION) {
                let constraint = db_err.constraint();
                tracing::debug!(?constraint, "Reservation rejected by CHECK constraint");
                let message = constraint
                    .and_then(|c| c.strip_prefix(CHECK_PREFIX))
                    .and_then(ReservationField::from_column)
                    .and_then(ReservationField::rule_message)
                    .unwrap_or(INCOMPLETE_SUBMISSION_MESSAGE);
                return Self::Rejected(message.to_string());
            }
        }
        Self::Database(err)
    }
}

/// Insert-only reservation storage.
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Validate and persist one reservation.
    async fn insert(&self, input: &NewReservation) -> Result<Reservation, StoreError>;

    /// Check that the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Schema validation shared by every store.
fn check(input: &NewReservation) -> Result<(), StoreError> {
    input.validate()?;
    Ok(())
}

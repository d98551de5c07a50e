//! Repository for the `reservations` table.

use sqlx::PgPool;

use crate::models::reservation::{NewReservation, Reservation};

/// Column list for `reservations` queries.
const COLUMNS: &str = "id, first_name, last_name, email, phone, date, time, created_at";

/// Insert-only access to reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewReservation) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations \
                (first_name, last_name, email, phone, date, time) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.date)
            .bind(&input.time)
            .fetch_one(pool)
            .await
    }
}

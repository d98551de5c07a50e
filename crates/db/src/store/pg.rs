use async_trait::async_trait;

use super::{check, ReservationStore, StoreError};
use crate::models::reservation::{NewReservation, Reservation};
use crate::repositories::ReservationRepo;
use crate::DbPool;

/// Postgres-backed store holding the process-wide pool.
#[derive(Clone)]
pub struct PgReservationStore {
    pool: DbPool,
}

impl PgReservationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for PgReservationStore {
    async fn insert(&self, input: &NewReservation) -> Result<Reservation, StoreError> {
        check(input)?;
        ReservationRepo::create(&self.pool, input)
            .await
            .map_err(StoreError::from_write)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}

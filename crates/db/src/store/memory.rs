use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{check, ReservationStore, StoreError};
use crate::models::reservation::{NewReservation, Reservation};

/// In-process store that keeps reservations in a `Vec`.
///
/// Applies the same validation as the Postgres store. After [`close`] every
/// call fails the way a closed pool does.
///
/// [`close`]: MemoryReservationStore::close
#[derive(Debug, Default)]
pub struct MemoryReservationStore {
    rows: Mutex<Vec<Reservation>>,
    closed: AtomicBool,
}

impl MemoryReservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn rows(&self) -> MutexGuard<'_, Vec<Reservation>> {
        self.rows.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything stored so far, oldest first.
    pub fn all(&self) -> Vec<Reservation> {
        self.rows().clone()
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Simulate losing the storage backend.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn insert(&self, input: &NewReservation) -> Result<Reservation, StoreError> {
        self.ensure_open()?;
        check(input)?;

        let mut rows = self.rows();
        let id = rows.last().map_or(1, |r| r.id + 1);
        let row = Reservation {
            id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            date: input.date.clone(),
            time: input.time.clone(),
            created_at: chrono::Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }
}

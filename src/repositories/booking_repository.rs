use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus, Review};
use crate::state::Store;
use crate::utils::errors::{not_found_error, AppError};

pub struct BookingRepository {
    store: Store,
}

impl BookingRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn insert(&self, booking: Booking) -> Booking {
        let mut bookings = self.store.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        booking
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Booking> {
        let bookings = self.store.bookings.read().await;
        bookings.get(&id).cloned()
    }

    pub async fn list_by_renter(&self, renter_id: Uuid) -> Vec<Booking> {
        let bookings = self.store.bookings.read().await;
        let mut result: Vec<Booking> = bookings
            .values()
            .filter(|b| b.renter_id == renter_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }

    /// Escritura cruda del estado. Las reglas de transición viven en el
    /// controlador; aquí solo se materializa el cambio ya decidido.
    pub async fn set_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError> {
        let mut bookings = self.store.bookings.write().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;
        booking.status = status;
        Ok(booking.clone())
    }

    pub async fn attach_review(&self, id: Uuid, review: Review) -> Result<Booking, AppError> {
        let mut bookings = self.store.bookings.write().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Booking", &id.to_string()))?;
        booking.review = Some(review);
        Ok(booking.clone())
    }
}

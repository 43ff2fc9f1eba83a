use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::{Booking, BookingStatus, Review};
use crate::models::vehicle::VehicleSnapshot;

// Request para crear una reserva
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Aplicar los créditos disponibles al pago
    #[serde(default)]
    pub apply_credits: bool,
}

// Request para adjuntar una reseña a una reserva finalizada
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,

    #[validate(length(max = 1000))]
    pub comment: Option<String>,
}

// Response de reserva
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub renter_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_price: i64,
    pub credit_deduction: i64,
    pub card_charge: i64,
    pub status: BookingStatus,
    pub vehicle_snapshot: VehicleSnapshot,
    pub review: Option<Review>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            vehicle_id: booking.vehicle_id,
            renter_id: booking.renter_id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            total_price: booking.total_price,
            credit_deduction: booking.credit_deduction,
            card_charge: booking.card_charge,
            status: booking.status,
            vehicle_snapshot: booking.vehicle_snapshot,
            review: booking.review,
            created_at: booking.created_at,
        }
    }
}

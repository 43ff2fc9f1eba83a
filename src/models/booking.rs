//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking y su máquina de estados.
//! La progresión es lineal: Pending → Confirmed → InProgress → Finished,
//! con Cancelled alcanzable solo desde Pending o Confirmed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::vehicle::VehicleSnapshot;

/// Estado de la reserva
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Finished,
    Cancelled,
}

impl BookingStatus {
    /// Cancelable solo desde Pending o Confirmed
    pub fn can_cancel(self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }

    /// El retiro del vehículo solo procede desde Confirmed
    pub fn can_start(self) -> bool {
        matches!(self, BookingStatus::Confirmed)
    }

    /// Finalizable solo desde Confirmed o InProgress.
    /// Una reserva Pending nunca confirmada no puede finalizarse.
    pub fn can_finish(self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::InProgress)
    }

    /// Cancelled y Finished son terminales
    pub fn is_terminal(self) -> bool {
        matches!(self, BookingStatus::Finished | BookingStatus::Cancelled)
    }
}

/// Reseña adjunta a una reserva finalizada - como máximo una por reserva
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Calificación de 1 a 5
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub renter_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Total en unidades enteras de moneda
    pub total_price: i64,
    /// Porción del total cubierta con créditos
    pub credit_deduction: i64,
    /// Porción del total cobrada a la tarjeta
    pub card_charge: i64,
    pub status: BookingStatus,
    pub vehicle_snapshot: VehicleSnapshot,
    pub review: Option<Review>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Una reseña se acepta una sola vez y solo con la reserva finalizada
    pub fn can_attach_review(&self) -> bool {
        self.status == BookingStatus::Finished && self.review.is_none()
    }
}

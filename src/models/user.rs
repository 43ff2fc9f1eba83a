//! Modelo de User
//!
//! El usuario tiene dos saldos separados: `wallet_balance` (ganancias
//! como propietario) y `credits` (moneda promocional y de reembolsos).
//! Invariante: `credits` nunca es negativo.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    /// Ganancias del propietario, en unidades enteras de moneda
    pub wallet_balance: i64,
    /// Créditos promocionales/de reembolso, nunca negativos
    pub credits: i64,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Tipo de movimiento en el historial de billetera
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    /// Créditos aplicados al pagar una reserva (monto negativo)
    BookingPayment,
    /// Reembolso del 90% al cancelar (monto positivo)
    CancellationRefund,
    /// Ganancia del propietario al finalizar el alquiler
    OwnerEarning,
}

/// Movimiento de créditos o de billetera - se registra en cada mutación
/// del libro mayor y alimenta la vista de historial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditMovement {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Monto con signo, en unidades enteras de moneda
    pub amount: i64,
    pub kind: MovementKind,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl CreditMovement {
    pub fn new(user_id: Uuid, amount: i64, kind: MovementKind, booking_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            amount,
            kind,
            booking_id,
            created_at: Utc::now(),
        }
    }
}

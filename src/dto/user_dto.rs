use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::user::{CreditMovement, MovementKind, User};

// Response de usuario para la API
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub wallet_balance: i64,
    pub credits: i64,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            wallet_balance: user.wallet_balance,
            credits: user.credits,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}

// Un movimiento del historial de billetera
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    pub id: Uuid,
    pub amount: i64,
    pub kind: MovementKind,
    pub booking_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<CreditMovement> for MovementResponse {
    fn from(movement: CreditMovement) -> Self {
        Self {
            id: movement.id,
            amount: movement.amount,
            kind: movement.kind,
            booking_id: movement.booking_id,
            created_at: movement.created_at,
        }
    }
}

// Response del historial de billetera
#[derive(Debug, Serialize)]
pub struct WalletHistoryResponse {
    pub movements: Vec<MovementResponse>,
    pub total: usize,
}

use uuid::Uuid;

use crate::models::user::{CreditMovement, User};
use crate::state::Store;
use crate::utils::errors::{not_found_error, AppError};

pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        let users = self.store.users.read().await;
        users.get(&id).cloned()
    }

    /// Descontar créditos con tope en el saldo disponible.
    /// Devuelve el monto efectivamente aplicado; el saldo nunca baja de cero.
    pub async fn deduct_credits(&self, id: Uuid, amount: i64) -> Result<i64, AppError> {
        let mut users = self.store.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;
        let applied = amount.min(user.credits).max(0);
        user.credits -= applied;
        Ok(applied)
    }

    pub async fn add_credits(&self, id: Uuid, amount: i64) -> Result<i64, AppError> {
        let mut users = self.store.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;
        user.credits += amount;
        Ok(user.credits)
    }

    /// Acreditar ganancias del propietario en la billetera
    pub async fn add_earnings(&self, id: Uuid, amount: i64) -> Result<i64, AppError> {
        let mut users = self.store.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;
        user.wallet_balance += amount;
        Ok(user.wallet_balance)
    }

    pub async fn mark_verified(&self, id: Uuid) -> Result<User, AppError> {
        let mut users = self.store.users.write().await;
        let user = users
            .get_mut(&id)
            .ok_or_else(|| not_found_error("User", &id.to_string()))?;
        user.is_verified = true;
        Ok(user.clone())
    }

    /// Registrar un movimiento en el historial de billetera
    pub async fn record_movement(&self, movement: CreditMovement) {
        let mut movements = self.store.movements.write().await;
        movements.push(movement);
    }

    pub async fn wallet_history(&self, user_id: Uuid) -> Vec<CreditMovement> {
        let movements = self.store.movements.read().await;
        let mut result: Vec<CreditMovement> = movements
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        result
    }
}

use uuid::Uuid;

use crate::dto::user_dto::{MovementResponse, UserResponse, WalletHistoryResponse};
use crate::repositories::user_repository::UserRepository;
use crate::state::Store;
use crate::utils::errors::{not_found_error, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(store: Store) -> Self {
        Self {
            repository: UserRepository::new(store),
        }
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await
            .ok_or_else(|| not_found_error("User", &user_id.to_string()))?;
        Ok(user.into())
    }

    pub async fn wallet_history(&self, user_id: Uuid) -> Result<WalletHistoryResponse, AppError> {
        let movements = self.repository.wallet_history(user_id).await;
        let movements: Vec<MovementResponse> =
            movements.into_iter().map(MovementResponse::from).collect();
        Ok(WalletHistoryResponse {
            total: movements.len(),
            movements,
        })
    }
}

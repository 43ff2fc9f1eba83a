use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{UserResponse, WalletHistoryResponse};
use crate::routes::current_user_id;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/me/wallet-history", get(get_wallet_history))
}

async fn get_me(State(state): State<AppState>) -> Result<Json<UserResponse>, AppError> {
    let user_id = current_user_id(&state);
    let controller = UserController::new(state.store.clone());
    let response = controller.me(user_id).await?;
    Ok(Json(response))
}

async fn get_wallet_history(
    State(state): State<AppState>,
) -> Result<Json<WalletHistoryResponse>, AppError> {
    let user_id = current_user_id(&state);
    let controller = UserController::new(state.store.clone());
    let response = controller.wallet_history(user_id).await?;
    Ok(Json(response))
}

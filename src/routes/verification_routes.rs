use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::verification_controller::VerificationController;
use crate::dto::verification_dto::{
    BiometricMatchRequest, BiometricMatchResponse, MediaUploadRequest, MediaUploadResponse,
};
use crate::routes::current_user_id;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_verification_router() -> Router<AppState> {
    Router::new()
        .route("/image", post(upload_image))
        .route("/image/:id", get(get_image))
        .route("/biometric", post(biometric_match))
}

fn controller(state: &AppState) -> VerificationController {
    VerificationController::new(&state.config, state.store.clone())
}

async fn upload_image(
    State(state): State<AppState>,
    Json(request): Json<MediaUploadRequest>,
) -> Result<Json<MediaUploadResponse>, AppError> {
    let response = controller(&state).upload(request).await?;
    Ok(Json(response))
}

async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let record = controller(&state).get_media(id).await?;
    Ok(([(header::CONTENT_TYPE, record.mime_type)], record.data))
}

async fn biometric_match(
    State(state): State<AppState>,
    Json(request): Json<BiometricMatchRequest>,
) -> Result<Json<BiometricMatchResponse>, AppError> {
    let user_id = current_user_id(&state);
    let response = controller(&state).biometric_match(user_id, request).await?;
    Ok(Json(response))
}

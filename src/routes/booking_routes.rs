use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{BookingResponse, CreateBookingRequest, ReviewRequest};
use crate::dto::ApiResponse;
use crate::routes::current_user_id;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/cancel", post(cancel_booking))
        .route("/:id/start", post(start_booking))
        .route("/:id/finish", post(finish_booking))
        .route("/:id/review", post(review_booking))
}

fn controller(state: &AppState) -> BookingController {
    BookingController::new(state.store.clone(), state.config.payment_delay_ms)
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let renter_id = current_user_id(&state);
    let response = controller(&state).create(renter_id, request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let renter_id = current_user_id(&state);
    let response = controller(&state).list_by_renter(renter_id).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = controller(&state).cancel(id).await?;
    Ok(Json(response))
}

async fn start_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = controller(&state).start(id).await?;
    Ok(Json(response))
}

async fn finish_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = controller(&state).finish(id).await?;
    Ok(Json(response))
}

async fn review_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ApiResponse<BookingResponse>>, AppError> {
    let response = controller(&state).attach_review(id, request).await?;
    Ok(Json(response))
}

//! Backend de alquiler de vehículos peer-to-peer
//!
//! Toda la información vive en memoria: no hay base de datos ni
//! persistencia. El estado se reinicia con cada arranque del proceso.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;

/// Construir el router completo de la API
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest("/api/booking", routes::booking_routes::create_booking_router())
        .nest("/api/user", routes::user_routes::create_user_router())
        .nest(
            "/api/verification",
            routes::verification_routes::create_verification_router(),
        )
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API de alquiler de vehículos funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": "in_memory"
    }))
}

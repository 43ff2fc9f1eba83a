use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{
    DiscountTiers, Vehicle, VehicleCategory, VehicleFeatures, VerificationStatus,
};

// Request para publicar un vehículo (paso final del asistente)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1950, max = 2030))]
    pub year: i32,

    pub category: VehicleCategory,

    /// Precio diario en unidades enteras de moneda, con techo para que
    /// ninguna cotización se acerque al límite de i64
    #[validate(range(min = 1, max = 1_000_000_000))]
    pub price_per_day: i64,

    #[serde(default)]
    pub features: VehicleFeatures,

    pub discounts: Option<DiscountTiers>,

    /// Fotos ya aceptadas por el flujo de verificación
    #[serde(default)]
    pub photo_ids: Vec<Uuid>,
}

// Request para cambiar la disponibilidad
#[derive(Debug, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub is_available: bool,
}

// Filtros para búsqueda de vehículos
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilters {
    pub category: Option<VehicleCategory>,
    pub available_only: Option<bool>,
    pub max_price: Option<i64>,
    pub search: Option<String>,
    pub limit: Option<i64>,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: VehicleCategory,
    pub price_per_day: i64,
    pub is_available: bool,
    pub verification_status: VerificationStatus,
    pub features: VehicleFeatures,
    pub discounts: Option<DiscountTiers>,
    pub photo_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            owner_id: vehicle.owner_id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
            category: vehicle.category,
            price_per_day: vehicle.price_per_day,
            is_available: vehicle.is_available,
            verification_status: vehicle.verification_status,
            features: vehicle.features,
            discounts: vehicle.discounts,
            photo_ids: vehicle.photo_ids,
            created_at: vehicle.created_at,
        }
    }
}

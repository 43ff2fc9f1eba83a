//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle publicado por un propietario
//! a través del asistente de publicación, junto con sus enums asociados.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categoría del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Sedan,
    Suv,
    Pickup,
    Van,
    Sport,
    Compact,
}

/// Estado de verificación del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

/// Equipamiento del vehículo - conjunto fijo de características
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VehicleFeatures {
    #[serde(default)]
    pub air_conditioning: bool,
    #[serde(default)]
    pub bluetooth: bool,
    #[serde(default)]
    pub gps: bool,
    #[serde(default)]
    pub backup_camera: bool,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
}

/// Descuentos escalonados por duración del alquiler (porcentajes)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DiscountTiers {
    /// Alquileres de 7 días o más
    pub weekly: Option<u32>,
    /// Alquileres de 15 días o más
    pub biweekly: Option<u32>,
    /// Alquileres de 30 días o más
    pub monthly: Option<u32>,
}

/// Vehicle principal - publicado por un propietario, nunca se elimina
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: VehicleCategory,
    /// Precio por día en unidades enteras de moneda (COP)
    pub price_per_day: i64,
    pub is_available: bool,
    pub verification_status: VerificationStatus,
    pub features: VehicleFeatures,
    pub discounts: Option<DiscountTiers>,
    /// Referencias a las fotos aceptadas por el flujo de verificación
    pub photo_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Copia desnormalizada del vehículo tomada al crear la reserva.
/// Inmutable: es el registro autoritativo de lo que se alquiló,
/// independiente de ediciones posteriores del vehículo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub vehicle_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: VehicleCategory,
    pub price_per_day: i64,
}

impl Vehicle {
    /// Tomar la copia inmutable que acompaña a cada reserva
    pub fn snapshot(&self) -> VehicleSnapshot {
        VehicleSnapshot {
            vehicle_id: self.id,
            brand: self.brand.clone(),
            model: self.model.clone(),
            year: self.year,
            category: self.category,
            price_per_day: self.price_per_day,
        }
    }
}

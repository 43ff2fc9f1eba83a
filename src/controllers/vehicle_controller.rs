use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateAvailabilityRequest, VehicleFilters, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::vehicle::{Vehicle, VerificationStatus};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::state::Store;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(store: Store) -> Self {
        Self {
            repository: VehicleRepository::new(store),
        }
    }

    /// Publicar un vehículo (paso final del asistente del propietario)
    pub async fn create(
        &self,
        owner_id: Uuid,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            owner_id,
            brand: request.brand,
            model: request.model,
            year: request.year,
            category: request.category,
            price_per_day: request.price_per_day,
            is_available: true,
            verification_status: VerificationStatus::Pending,
            features: request.features,
            discounts: request.discounts,
            photo_ids: request.photo_ids,
            created_at: Utc::now(),
        };

        let vehicle = self.repository.insert(vehicle).await;
        log::info!("🚗 Vehículo publicado: {} {} ({})", vehicle.brand, vehicle.model, vehicle.id);

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Vehículo publicado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;
        Ok(vehicle.into())
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.list(&filters).await;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    /// Alternar la disponibilidad - única mutación permitida tras publicar
    pub async fn set_availability(
        &self,
        id: Uuid,
        request: UpdateAvailabilityRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        let vehicle = self
            .repository
            .set_availability(id, request.is_available)
            .await?;

        Ok(ApiResponse::success_with_message(
            vehicle.into(),
            "Disponibilidad actualizada exitosamente".to_string(),
        ))
    }
}

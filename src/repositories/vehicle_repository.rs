use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::{Vehicle, VerificationStatus};
use crate::state::Store;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleRepository {
    store: Store,
}

impl VehicleRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn insert(&self, vehicle: Vehicle) -> Vehicle {
        let mut vehicles = self.store.vehicles.write().await;
        vehicles.insert(vehicle.id, vehicle.clone());
        vehicle
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Vehicle> {
        let vehicles = self.store.vehicles.read().await;
        vehicles.get(&id).cloned()
    }

    /// Listar vehículos aplicando los filtros de búsqueda
    pub async fn list(&self, filters: &VehicleFilters) -> Vec<Vehicle> {
        let vehicles = self.store.vehicles.read().await;
        let mut result: Vec<Vehicle> = vehicles
            .values()
            .filter(|v| {
                if let Some(category) = filters.category {
                    if v.category != category {
                        return false;
                    }
                }
                if filters.available_only.unwrap_or(false) && !v.is_available {
                    return false;
                }
                if let Some(max_price) = filters.max_price {
                    if v.price_per_day > max_price {
                        return false;
                    }
                }
                if let Some(search) = &filters.search {
                    let needle = search.to_lowercase();
                    let haystack = format!("{} {}", v.brand, v.model).to_lowercase();
                    if !haystack.contains(&needle) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        // Orden estable: los más recientes primero
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(limit) = filters.limit {
            result.truncate(limit as usize);
        }
        result
    }

    /// El único campo editable tras la publicación
    pub async fn set_availability(&self, id: Uuid, is_available: bool) -> Result<Vehicle, AppError> {
        let mut vehicles = self.store.vehicles.write().await;
        let vehicle = vehicles
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;
        vehicle.is_available = is_available;
        Ok(vehicle.clone())
    }

    /// Actualizar el estado de verificación según el veredicto del clasificador
    pub async fn set_verification_status(
        &self,
        id: Uuid,
        status: VerificationStatus,
    ) -> Result<Vehicle, AppError> {
        let mut vehicles = self.store.vehicles.write().await;
        let vehicle = vehicles
            .get_mut(&id)
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;
        vehicle.verification_status = status;
        Ok(vehicle.clone())
    }
}

pub mod booking_routes;
pub mod user_routes;
pub mod vehicle_routes;
pub mod verification_routes;

use uuid::Uuid;

use crate::state::AppState;

// TODO: Extraer el usuario de la sesión cuando implementemos autenticación.
// Por ahora todas las vistas operan sobre el usuario demo sembrado.
pub(crate) fn current_user_id(state: &AppState) -> Uuid {
    state.store.demo_user_id
}

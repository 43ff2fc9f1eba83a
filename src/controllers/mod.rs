//! Controladores de la API
//!
//! Las reglas de dominio (precondiciones de transición, libro mayor)
//! se aplican aquí; los repositorios solo materializan los cambios.

pub mod booking_controller;
pub mod user_controller;
pub mod vehicle_controller;
pub mod verification_controller;

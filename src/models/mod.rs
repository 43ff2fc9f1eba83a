//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del dominio:
//! vehículos, reservas, usuarios y verificación de medios.

pub mod booking;
pub mod user;
pub mod vehicle;
pub mod verification;

//! Services module
//!
//! Este módulo contiene la lógica de negocio y servicios de la aplicación:
//! la aritmética del libro mayor de reservas/créditos, el cliente del
//! clasificador de imágenes externo y el flujo de verificación de medios.

pub mod ledger;
pub mod verification_service;
pub mod vision_service;

pub use ledger::*;
pub use verification_service::*;
pub use vision_service::*;

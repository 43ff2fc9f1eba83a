//! Repositorios sobre el almacén en memoria
//!
//! Cada repositorio recibe un clon del `Store` compartido y expone las
//! operaciones de lectura/escritura de su recurso. No hay persistencia:
//! los mapas viven dentro de `Arc<RwLock<..>>`.

pub mod booking_repository;
pub mod media_repository;
pub mod user_repository;
pub mod vehicle_repository;

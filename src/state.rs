//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. Todo el almacenamiento es en memoria:
//! el estado se pierde al reiniciar el proceso.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::booking::Booking;
use crate::models::user::{CreditMovement, User};
use crate::models::vehicle::Vehicle;
use crate::models::verification::MediaRecord;

/// Almacén en memoria de la aplicación.
///
/// Las mutaciones pasan únicamente por los repositorios y las
/// operaciones nombradas de los controladores, nunca por escrituras
/// sueltas de campos.
#[derive(Clone)]
pub struct Store {
    pub users: Arc<RwLock<HashMap<Uuid, User>>>,
    pub vehicles: Arc<RwLock<HashMap<Uuid, Vehicle>>>,
    pub bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
    pub movements: Arc<RwLock<Vec<CreditMovement>>>,
    pub media: Arc<RwLock<HashMap<Uuid, MediaRecord>>>,
    /// Usuario único de la sesión demo (no hay autenticación)
    pub demo_user_id: Uuid,
}

impl Store {
    /// Crear el almacén y sembrar el usuario demo
    pub fn seeded(demo_credits: i64) -> Self {
        let demo_user = User {
            id: Uuid::new_v4(),
            full_name: "Usuario Demo".to_string(),
            email: Some("demo@rentacarros.co".to_string()),
            wallet_balance: 0,
            credits: demo_credits,
            is_verified: false,
            created_at: Utc::now(),
        };
        let demo_user_id = demo_user.id;

        let mut users = HashMap::new();
        users.insert(demo_user_id, demo_user);

        Self {
            users: Arc::new(RwLock::new(users)),
            vehicles: Arc::new(RwLock::new(HashMap::new())),
            bookings: Arc::new(RwLock::new(HashMap::new())),
            movements: Arc::new(RwLock::new(Vec::new())),
            media: Arc::new(RwLock::new(HashMap::new())),
            demo_user_id,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub store: Store,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let store = Store::seeded(config.demo_credits);
        Self { config, store }
    }
}

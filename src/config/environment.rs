//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// URL del clasificador de imágenes externo
    pub vision_api_url: String,
    /// Credencial del clasificador. Su ausencia corta el análisis en
    /// modo fail-open: la subida se acepta sin clasificar.
    pub vision_api_key: Option<String>,
    pub vision_timeout_secs: u64,
    /// Retardo fijo que simula la ida y vuelta del cobro con tarjeta
    pub payment_delay_ms: u64,
    /// Retardo fijo del chequeo biométrico simulado
    pub biometric_delay_ms: u64,
    /// Créditos iniciales del usuario demo sembrado al arrancar
    pub demo_credits: i64,
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno, con valores por defecto de desarrollo
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            vision_api_url: env::var("VISION_API_URL")
                .unwrap_or_else(|_| "https://api.vision.example.com/v1/classify".to_string()),
            vision_api_key: env::var("VISION_API_KEY").ok(),
            vision_timeout_secs: env::var("VISION_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            payment_delay_ms: env::var("PAYMENT_DELAY_MS")
                .unwrap_or_else(|_| "800".to_string())
                .parse()
                .unwrap_or(800),
            biometric_delay_ms: env::var("BIOMETRIC_DELAY_MS")
                .unwrap_or_else(|_| "1200".to_string())
                .parse()
                .unwrap_or(1200),
            demo_credits: env::var("DEMO_CREDITS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap_or(0),
        }
    }

    /// Configuración sin retardos simulados, para tests
    pub fn for_tests() -> Self {
        Self {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            cors_origins: Vec::new(),
            vision_api_url: "http://127.0.0.1:9/classify".to_string(),
            vision_api_key: None,
            vision_timeout_secs: 2,
            payment_delay_ms: 0,
            biometric_delay_ms: 0,
            demo_credits: 0,
        }
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

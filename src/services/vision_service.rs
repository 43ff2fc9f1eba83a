//! Cliente del clasificador de imágenes externo
//!
//! Envía la imagen como data URI junto con una instrucción fija según el
//! tipo (`vehicle`/`document`/`face`) y espera un veredicto estructurado
//! `{ isValid, reason }`.
//!
//! Este cliente NUNCA decide el fail-open: toda falla de infraestructura
//! (sin credencial, transporte, status no exitoso, cuerpo no parseable)
//! se devuelve como `VisionError` y es el flujo de verificación quien
//! elige tratarla como aprobación.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::environment::EnvironmentConfig;
use crate::models::verification::MediaKind;

lazy_static! {
    /// Instrucción en lenguaje natural por tipo de imagen
    static ref INSTRUCTIONS: HashMap<MediaKind, &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            MediaKind::Vehicle,
            "Analiza la imagen y responde en JSON {\"isValid\": bool, \"reason\": string} \
             si corresponde a la foto real de un vehículo completo, sin capturas de \
             pantalla ni imágenes de catálogo.",
        );
        m.insert(
            MediaKind::Document,
            "Analiza la imagen y responde en JSON {\"isValid\": bool, \"reason\": string} \
             si corresponde a un documento de identidad legible y sin recortes.",
        );
        m.insert(
            MediaKind::Face,
            "Analiza la imagen y responde en JSON {\"isValid\": bool, \"reason\": string} \
             si corresponde a una selfie con un único rostro visible y enfocado.",
        );
        m
    };
}

/// Veredicto estructurado del clasificador
#[derive(Debug, Clone, Deserialize)]
pub struct VisionVerdict {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub reason: Option<String>,
}

/// Fallas de infraestructura alrededor del clasificador
#[derive(Error, Debug)]
pub enum VisionError {
    #[error("clasificador sin credencial configurada")]
    NotConfigured,

    #[error("error de transporte: {0}")]
    Http(#[from] reqwest::Error),

    #[error("status inesperado del clasificador: {0}")]
    BadStatus(http::StatusCode),

    #[error("respuesta no parseable: {0}")]
    Parse(String),
}

pub struct VisionService {
    api_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl VisionService {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.vision_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_url: config.vision_api_url.clone(),
            api_key: config.vision_api_key.clone(),
            client,
        }
    }

    /// Clasificar una imagen ya codificada como data URI
    pub async fn classify(
        &self,
        data_uri: &str,
        mime_type: &str,
        kind: MediaKind,
    ) -> Result<VisionVerdict, VisionError> {
        let api_key = self.api_key.as_ref().ok_or(VisionError::NotConfigured)?;

        let instruction = INSTRUCTIONS.get(&kind).copied().unwrap_or_default();
        log::info!("🔎 Clasificando imagen ({:?}, {})", kind, mime_type);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&json!({
                "image": data_uri,
                "mime_type": mime_type,
                "instruction": instruction,
            }))
            .send()
            .await?;

        let status = response.status();
        log::info!("📡 Respuesta del clasificador: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Clasificador respondió {}: {}", status, error_text);
            return Err(VisionError::BadStatus(status));
        }

        let response_text = response.text().await?;
        let verdict: VisionVerdict = serde_json::from_str(&response_text)
            .map_err(|e| VisionError::Parse(format!("{}: {}", e, response_text)))?;

        log::info!(
            "✅ Veredicto del clasificador: is_valid={} reason={:?}",
            verdict.is_valid,
            verdict.reason
        );
        Ok(verdict)
    }
}

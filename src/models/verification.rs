//! Modelos de verificación de medios
//!
//! Este módulo contiene la máquina de estados explícita del flujo de
//! subida de imágenes: idle → uploading → analyzing → success | error.
//! Los estados terminales solo se abandonan con una nueva selección.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tipo de imagen a clasificar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Vehicle,
    Document,
    Face,
}

/// Estado del flujo de subida de una imagen.
///
/// Variantes etiquetadas en lugar de flags sueltos: un estado `Success`
/// no puede arrastrar un mensaje de error obsoleto.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum UploadState {
    Idle,
    Uploading,
    Analyzing,
    Success { media_id: Uuid, url: String },
    Error { message: String },
}

impl UploadState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadState::Success { .. } | UploadState::Error { .. })
    }
}

/// Imagen aceptada por el flujo de verificación, almacenada en memoria
#[derive(Debug, Clone)]
pub struct MediaRecord {
    pub id: Uuid,
    pub kind: MediaKind,
    pub file_name: String,
    pub mime_type: String,
    pub size: usize,
    pub data: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl MediaRecord {
    /// URL bajo la que el backend sirve la imagen aceptada
    pub fn url(&self) -> String {
        format!("/api/verification/image/{}", self.id)
    }
}

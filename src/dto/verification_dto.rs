use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::verification::{MediaKind, UploadState};

// Request para subir y verificar una imagen
#[derive(Debug, Deserialize)]
pub struct MediaUploadRequest {
    pub file_name: String,
    pub mime_type: String,
    /// Contenido del archivo codificado en base64
    pub data_base64: String,
    pub kind: MediaKind,
    /// Si la imagen es de tipo `vehicle`, el vehículo cuyo estado de
    /// verificación debe actualizarse con el veredicto
    pub vehicle_id: Option<Uuid>,
}

// Resultado terminal del flujo de subida
#[derive(Debug, Serialize)]
pub struct MediaUploadResponse {
    /// "success" o "error"
    pub state: String,
    pub media_id: Option<Uuid>,
    pub url: Option<String>,
    pub message: Option<String>,
}

impl From<UploadState> for MediaUploadResponse {
    fn from(state: UploadState) -> Self {
        match state {
            UploadState::Success { media_id, url } => Self {
                state: "success".to_string(),
                media_id: Some(media_id),
                url: Some(url),
                message: None,
            },
            UploadState::Error { message } => Self {
                state: "error".to_string(),
                media_id: None,
                url: None,
                message: Some(message),
            },
            // El flujo siempre termina en Success o Error; los estados
            // intermedios nunca se serializan hacia el cliente.
            other => Self {
                state: "error".to_string(),
                media_id: None,
                url: None,
                message: Some(format!("Estado no terminal inesperado: {:?}", other)),
            },
        }
    }
}

// Request del chequeo biométrico: documento de identidad + selfie
#[derive(Debug, Deserialize)]
pub struct BiometricMatchRequest {
    pub document_media_id: Uuid,
    pub selfie_media_id: Uuid,
}

// Response del chequeo biométrico
#[derive(Debug, Serialize)]
pub struct BiometricMatchResponse {
    pub matched: bool,
    pub is_verified: bool,
}

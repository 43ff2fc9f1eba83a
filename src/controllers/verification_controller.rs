use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::dto::verification_dto::{
    BiometricMatchRequest, BiometricMatchResponse, MediaUploadRequest, MediaUploadResponse,
};
use crate::models::verification::MediaRecord;
use crate::repositories::media_repository::MediaRepository;
use crate::services::verification_service::VerificationService;
use crate::state::Store;
use crate::utils::errors::{not_found_error, AppError};

pub struct VerificationController {
    service: VerificationService,
    media_repository: MediaRepository,
}

impl VerificationController {
    pub fn new(config: &EnvironmentConfig, store: Store) -> Self {
        Self {
            service: VerificationService::new(config, store.clone()),
            media_repository: MediaRepository::new(store),
        }
    }

    /// Subir y verificar una imagen. El resultado siempre es un estado
    /// terminal: un rechazo del clasificador no es un error HTTP.
    pub async fn upload(
        &self,
        request: MediaUploadRequest,
    ) -> Result<MediaUploadResponse, AppError> {
        let state = self.service.process_upload(request).await?;
        Ok(state.into())
    }

    /// Servir una imagen aceptada
    pub async fn get_media(&self, id: Uuid) -> Result<MediaRecord, AppError> {
        self.media_repository
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found_error("Media", &id.to_string()))
    }

    /// Chequeo biométrico documento/selfie del usuario actual
    pub async fn biometric_match(
        &self,
        user_id: Uuid,
        request: BiometricMatchRequest,
    ) -> Result<BiometricMatchResponse, AppError> {
        self.service
            .biometric_match(user_id, request.document_media_id, request.selfie_media_id)
            .await?;
        Ok(BiometricMatchResponse {
            matched: true,
            is_verified: true,
        })
    }
}

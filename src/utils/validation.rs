//! Utilidades de validación
//!
//! Este módulo contiene la compuerta de entrada del flujo de subida
//! (tamaño y tipo MIME) y helpers de validación de fechas.

use chrono::NaiveDate;

/// Tamaño máximo aceptado para una imagen: 5 MiB
pub const MAX_MEDIA_BYTES: usize = 5 * 1024 * 1024;

/// Tipos MIME aceptados por el flujo de verificación
pub const ALLOWED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// Validar una imagen antes de cualquier llamada de red.
///
/// Un rechazo aquí es un error de entrada recuperable: el usuario
/// simplemente selecciona otro archivo.
pub fn validate_media_file(mime_type: &str, size: usize) -> Result<(), String> {
    if size > MAX_MEDIA_BYTES {
        return Err(format!(
            "La imagen supera el tamaño máximo de 5 MB ({} bytes)",
            size
        ));
    }

    if !ALLOWED_MIME_TYPES.contains(&mime_type) {
        return Err(format!(
            "Tipo de archivo no soportado: '{}'. Se aceptan JPEG, PNG y WebP",
            mime_type
        ));
    }

    Ok(())
}

/// Validar el rango de fechas de una reserva
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), String> {
    if end < start {
        return Err("La fecha de fin no puede ser anterior a la de inicio".to_string());
    }
    Ok(())
}

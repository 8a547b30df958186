//! Image upload endpoint of the rule-based build.
//!
//! Uploads are validated, but no image model is wired in, so every accepted
//! upload is answered with a not-implemented error.

use axum::extract::multipart::{Multipart, MultipartRejection};
use tracing::{info, warn};

use crate::error::AppError;

const FILE_FIELD: &str = "file";

/// POST /predict-skin - Validate an uploaded image.
pub async fn predict_skin(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(), AppError> {
    let mut multipart = multipart.map_err(|e| {
        warn!("Rejected predict-skin body: {}", e.body_text());
        AppError::BadRequest(format!("Invalid multipart body: {}", e.body_text()))
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart body: {}", e.body_text())))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default();
        if file_name.is_empty() {
            return Err(AppError::bad_request("No selected file"));
        }

        info!("Received image upload: {}", file_name);
        return Err(AppError::bad_request(
            "Image-based prediction is not implemented in rule-based version.",
        ));
    }

    Err(AppError::bad_request("No file part"))
}

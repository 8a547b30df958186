//! Rule-based symptom prediction handler.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use medisense_core::ResolveError;
use tracing::{error, info, warn};

use crate::dto::{PredictDiseaseRequest, PredictDiseaseResponse};
use crate::error::AppError;
use crate::ServerState;

/// POST /predict-disease - Resolve a symptom list to a disease record.
pub async fn predict_disease(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<PredictDiseaseRequest>, JsonRejection>,
) -> Result<Json<PredictDiseaseResponse>, AppError> {
    let Json(req) = payload.map_err(|e| {
        warn!("Rejected predict-disease body: {}", e.body_text());
        AppError::BadRequest(format!("Invalid request body: {}", e.body_text()))
    })?;

    let query = req.symptoms;
    info!("Symptoms received: {:?}", query.symptoms());

    let record = state.catalog.resolve(query.symptoms()).map_err(|e| {
        match &e {
            ResolveError::NotRecognized => info!("No disease indexed for '{}'", query.key()),
            ResolveError::NoMatchingRecord(name) => {
                error!("Symptom index points at unknown disease '{}'", name)
            }
        }
        AppError::from(e)
    })?;

    info!("Resolved {:?} to {}", query.symptoms(), record.name);
    Ok(Json(PredictDiseaseResponse::from(record)))
}

use medisense_core::{DiseaseRecord, SymptomQuery};
use serde::{Deserialize, Serialize};

// === HTTP DTOs ===

#[derive(Debug, Deserialize)]
pub struct PredictDiseaseRequest {
    pub symptoms: SymptomQuery,
}

#[derive(Debug, Serialize)]
pub struct PredictDiseaseResponse {
    pub disease_name: String,
    pub disease_description: String,
    pub disease_treatment: String,
}

impl From<&DiseaseRecord> for PredictDiseaseResponse {
    fn from(record: &DiseaseRecord) -> Self {
        Self {
            disease_name: record.name.clone(),
            disease_description: record.description.clone(),
            disease_treatment: record.treatment.clone(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::constants::MODEL_VERSION;
use crate::domain::LightCurveSummary;
use crate::models::DetectionResult;

/// A stored prediction: the detector output plus where it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub id: Uuid,
    pub dataset: String,
    pub model_version: String,
    pub created_at: DateTime<Utc>,
    pub summary: LightCurveSummary,
    pub result: DetectionResult,
}

impl DetectionRecord {
    pub fn new(dataset: impl Into<String>, summary: LightCurveSummary, result: DetectionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            dataset: dataset.into(),
            model_version: MODEL_VERSION.to_string(),
            created_at: Utc::now(),
            summary,
            result,
        }
    }
}

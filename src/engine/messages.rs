use std::sync::Arc;

use uuid::Uuid;

use crate::domain::LightCurve;
use crate::models::DetectionResult;

/// One named light curve to run through the detector.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: String,
    pub curve: Arc<LightCurve>,
}

/// A request for the worker: one or more datasets detected together
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub job_id: Uuid,
    pub datasets: Vec<Dataset>,
}

/// The result returned by the worker
#[derive(Debug, Clone)]
pub struct JobResult {
    pub job_id: Uuid,
    /// Wall time for the whole job, pacing included.
    pub duration_ms: u64,
    /// Same order as `JobRequest::datasets`.
    pub outcomes: Vec<(String, DetectionResult)>,
}

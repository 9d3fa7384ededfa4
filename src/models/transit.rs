use serde::{Deserialize, Serialize};

use crate::config::Probability;

/// One detected dip. Built once during a detection pass and never mutated after
/// the result is handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    /// Recurrence interval shared by every event of one call; `0` with fewer than two events.
    pub period: f64,
    /// Estimated fractional brightness loss.
    pub depth: f64,
    /// `end - start`
    pub duration: f64,
    /// Time of the first sample below the fine threshold (inclusive).
    pub start: f64,
    /// Time of the last sample below the fine threshold (inclusive).
    pub end: f64,
    /// In `[0, confidence_cap]`, increasing with dip magnitude.
    pub confidence: f64,
}

/// Output of one detection call. Plain numbers, booleans and records only, so it
/// serializes straight to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub has_transit: bool,
    pub probability_score: Probability,
    pub detected_transits: Vec<TransitEvent>,
    pub inference_time_ms: u64,
}

impl DetectionResult {
    pub fn transit_count(&self) -> usize {
        self.detected_transits.len()
    }

    /// Period shared by the events, if at least two were found.
    pub fn period(&self) -> Option<f64> {
        if self.detected_transits.len() > 1 {
            self.detected_transits.first().map(|t| t.period)
        } else {
            None
        }
    }

    pub fn mean_confidence(&self) -> Option<f64> {
        if self.detected_transits.is_empty() {
            return None;
        }
        let sum: f64 = self.detected_transits.iter().map(|t| t.confidence).sum();
        Some(sum / self.detected_transits.len() as f64)
    }
}

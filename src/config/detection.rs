//! Detection thresholds and algorithm switches

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::constants;

/// How the minimum-duration filter measures a candidate dip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default)]
pub enum SpanMode {
    /// `end - start`: first to last sample below the fine threshold.
    #[strum(to_string = "In-Dip")]
    InDip,
    /// `time[recovery] - start`: up to the first sample back above the threshold.
    #[default]
    #[strum(to_string = "To-Recovery")]
    ToRecovery,
}

/// How a single period is derived from the event start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default)]
pub enum PeriodMethod {
    /// `(last.start - first.start) / (n - 1)`
    #[default]
    #[strum(to_string = "Mean Spacing")]
    MeanSpacing,
    /// Median of consecutive start spacings. A single missed or spurious event
    /// does not drag the estimate.
    #[strum(to_string = "Median Spacing")]
    MedianSpacing,
}

/// The Master Detection Configuration.
/// Every threshold the detector uses is read from here, never hardcoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Coarse gate: samples below this z-score count as significant dips.
    pub coarse_z_threshold: f64,
    /// Coarse gate: fraction of the series that must be significant dips.
    pub coarse_fraction: f64,

    /// Event extraction: samples below this z-score belong to a transit.
    pub fine_z_threshold: f64,
    /// Candidates spanning no more than this (time units) are dropped as noise.
    pub min_duration: f64,
    pub span_mode: SpanMode,

    /// Converts the deepest z-score magnitude into a fractional depth.
    pub depth_scale: f64,

    // confidence = min(cap, base + |z_min| * slope)
    pub confidence_base: f64,
    pub confidence_slope: f64,
    pub confidence_cap: f64,

    /// Only extract events when the coarse classifier fires.
    pub require_coarse_gate: bool,

    pub period_method: PeriodMethod,
}

impl DetectionConfig {
    /// Confidence for a dip whose deepest sample has magnitude `depth_zscore`.
    #[inline]
    pub fn confidence_for(&self, depth_zscore: f64) -> f64 {
        (self.confidence_base + depth_zscore * self.confidence_slope).min(self.confidence_cap)
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        DETECTION
    }
}

pub const DETECTION: DetectionConfig = DetectionConfig {
    coarse_z_threshold: constants::COARSE_Z_THRESHOLD,
    coarse_fraction: constants::COARSE_FRACTION,

    fine_z_threshold: constants::FINE_Z_THRESHOLD,
    min_duration: constants::MIN_TRANSIT_DURATION,
    span_mode: SpanMode::ToRecovery,

    depth_scale: constants::DEPTH_SCALE,

    confidence_base: constants::confidence::BASE,
    confidence_slope: constants::confidence::SLOPE,
    confidence_cap: constants::confidence::CAP,

    require_coarse_gate: true,
    period_method: PeriodMethod::MeanSpacing,
};

use rayon::prelude::*;

use crate::analysis::{
    CoarseVerdict, ScoringInput, ScoringPolicy, SignificancePolicy, assign_period, classify,
    extract_events, normalize,
};
use crate::config::{DEBUG_FLAGS, DetectionConfig};
use crate::domain::{InvalidInputError, LightCurve};
use crate::models::{DetectionResult, TransitEvent};
use crate::trace_time;
use crate::utils::{AppInstant, elapsed_ms};

/// Finds transit-like dips in a light curve.
///
/// Pure and synchronous: no I/O and no shared mutable state, so one detector can
/// serve many threads at once (see [`TransitDetector::detect_batch`]).
pub struct TransitDetector {
    config: DetectionConfig,
    scoring: Box<dyn ScoringPolicy>,
}

impl std::fmt::Debug for TransitDetector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitDetector")
            .field("config", &self.config)
            .field("scoring", &self.scoring.name())
            .finish()
    }
}

impl Default for TransitDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

impl TransitDetector {
    pub fn new(config: DetectionConfig) -> Self {
        Self::with_scoring(config, Box::new(SignificancePolicy))
    }

    pub fn with_scoring(config: DetectionConfig, scoring: Box<dyn ScoringPolicy>) -> Self {
        Self { config, scoring }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    pub fn scoring_name(&self) -> &'static str {
        self.scoring.name()
    }

    /// Runs the full pipeline on a validated curve.
    pub fn detect(&self, curve: &LightCurve) -> DetectionResult {
        let start = AppInstant::now();

        let (verdict, detected_transits) =
            trace_time!("detect", 5_000, { self.analyze(curve.time(), curve.flux()) });

        let probability_score = self.scoring.score(&ScoringInput {
            sample_count: verdict.sample_count,
            dip_count: verdict.dip_count,
            has_transit: verdict.has_transit,
            coarse_z_threshold: self.config.coarse_z_threshold,
            events: &detected_transits,
        });

        let result = DetectionResult {
            has_transit: verdict.has_transit,
            probability_score,
            detected_transits,
            inference_time_ms: elapsed_ms(start),
        };

        if DEBUG_FLAGS.log_detector {
            log::info!(
                "Detection: {} samples, {} significant dips, transit={}, {} events, score {} ({})",
                verdict.sample_count,
                verdict.dip_count,
                result.has_transit,
                result.transit_count(),
                result.probability_score,
                self.scoring.name()
            );
        }

        result
    }

    /// Validates raw aligned arrays, then detects. Fails before any numeric work
    /// on empty, mismatched, or non-finite input.
    pub fn detect_series(&self, time: &[f64], flux: &[f64]) -> Result<DetectionResult, InvalidInputError> {
        let curve = LightCurve::new(time.to_vec(), flux.to_vec())?;
        Ok(self.detect(&curve))
    }

    /// The deterministic part of detection: coarse verdict plus period-stamped events.
    /// No scoring, no timing.
    pub fn find_transits(&self, curve: &LightCurve) -> (CoarseVerdict, Vec<TransitEvent>) {
        self.analyze(curve.time(), curve.flux())
    }

    /// Detects many curves in parallel. Output order matches input order.
    pub fn detect_batch<C>(&self, curves: &[C]) -> Vec<DetectionResult>
    where
        C: AsRef<LightCurve> + Sync,
    {
        curves.par_iter().map(|curve| self.detect(curve.as_ref())).collect()
    }

    fn analyze(&self, time: &[f64], flux: &[f64]) -> (CoarseVerdict, Vec<TransitEvent>) {
        // Validated by LightCurve, so the only error (empty input) cannot occur
        let Ok(series) = normalize(flux) else {
            return (
                CoarseVerdict { dip_count: 0, sample_count: 0, has_transit: false },
                Vec::new(),
            );
        };

        let verdict = classify(&series, &self.config);

        let mut events = if verdict.has_transit || !self.config.require_coarse_gate {
            extract_events(time, &series, &self.config)
        } else {
            Vec::new()
        };
        assign_period(&mut events, self.config.period_method);

        (verdict, events)
    }
}

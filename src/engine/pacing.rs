use std::time::Duration;

use crate::analysis::TransitDetector;
use crate::domain::LightCurve;
use crate::models::DetectionResult;

/// Holds results back for a fixed delay so an interactive front end can show a
/// progress state. Wraps the detector; the detector itself never sleeps.
///
/// `inference_time_ms` in the returned results still measures detection only.
#[derive(Debug)]
pub struct PacedDetector {
    inner: TransitDetector,
    delay: Duration,
}

impl PacedDetector {
    pub fn new(inner: TransitDetector, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// No delay at all.
    pub fn unpaced(inner: TransitDetector) -> Self {
        Self::new(inner, Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn detector(&self) -> &TransitDetector {
        &self.inner
    }

    pub fn detect(&self, curve: &LightCurve) -> DetectionResult {
        let result = self.inner.detect(curve);
        self.pause();
        result
    }

    /// One pause for the whole batch, not one per curve.
    pub fn detect_batch<C>(&self, curves: &[C]) -> Vec<DetectionResult>
    where
        C: AsRef<LightCurve> + Sync,
    {
        let results = self.inner.detect_batch(curves);
        self.pause();
        results
    }

    fn pause(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}

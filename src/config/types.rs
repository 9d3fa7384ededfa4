//! Value newtypes shared by the detector and its outputs

use serde::{Deserialize, Serialize};

/// A standardized sample: how many population standard deviations a flux value
/// sits from the series mean.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ZScore(f64);

impl ZScore {
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Magnitude of the deviation, ignoring direction.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.0.abs()
    }

    #[inline]
    pub fn is_below(self, threshold: f64) -> bool {
        self.0 < threshold
    }
}

impl std::fmt::Display for ZScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.2}σ", self.0)
    }
}

/// A probability clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(val: f64) -> Self {
        // NaN falls through both comparisons, so map it explicitly
        let v = if val.is_nan() {
            0.0
        } else if val < 0.0 {
            0.0
        } else if val > 1.0 {
            1.0
        } else {
            val
        };
        Self(v)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_is_clamped() {
        assert_eq!(Probability::new(-0.3).value(), 0.0);
        assert_eq!(Probability::new(1.7).value(), 1.0);
        assert_eq!(Probability::new(f64::NAN).value(), 0.0);
        assert_eq!(Probability::new(0.42).value(), 0.42);
    }

    #[test]
    fn zscore_threshold_is_strict() {
        assert!(ZScore::new(-1.51).is_below(-1.5));
        assert!(!ZScore::new(-1.5).is_below(-1.5));
        assert_eq!(ZScore::new(-2.5).magnitude(), 2.5);
    }

    #[test]
    fn newtypes_serialize_as_plain_numbers() {
        let json = serde_json::to_string(&Probability::new(0.25)).unwrap();
        assert_eq!(json, "0.25");
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::mean_and_stddev;

/// Which of the two aligned arrays a fault was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Series {
    #[strum(to_string = "time")]
    Time,
    #[strum(to_string = "flux")]
    Flux,
}

/// Input faults that make a detection call impossible.
/// Terminal for the call: no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("light curve is empty")]
    EmptySeries,
    #[error("time has {time_len} samples but flux has {flux_len}")]
    LengthMismatch { time_len: usize, flux_len: usize },
    #[error("non-finite {series} value at index {index}")]
    NonFinite { series: Series, index: usize },
}

/// An ordered sequence of `(time, flux)` samples.
///
/// Construction guarantees `time.len() == flux.len() >= 1` and that every value
/// is finite. Time ordering is *not* enforced; see [`LightCurve::is_time_ordered`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightCurve {
    time: Vec<f64>,
    flux: Vec<f64>,
}

impl LightCurve {
    pub fn new(time: Vec<f64>, flux: Vec<f64>) -> Result<Self, InvalidInputError> {
        validate(&time, &flux)?;
        Ok(Self { time, flux })
    }

    /// Builds from `(time, flux)` pairs.
    pub fn from_samples<I>(samples: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (time, flux): (Vec<f64>, Vec<f64>) = samples.into_iter().unzip();
        Self::new(time, flux)
    }

    #[inline]
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    #[inline]
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Always false for a constructed curve; kept for the `len` convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Whether time values are strictly increasing.
    pub fn is_time_ordered(&self) -> bool {
        self.time.windows(2).all(|w| w[0] < w[1])
    }

    pub fn summary(&self) -> LightCurveSummary {
        LightCurveSummary::from(self)
    }
}

impl AsRef<LightCurve> for LightCurve {
    fn as_ref(&self) -> &LightCurve {
        self
    }
}

impl<'de> Deserialize<'de> for LightCurve {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            time: Vec<f64>,
            flux: Vec<f64>,
        }

        let raw = Raw::deserialize(deserializer)?;
        LightCurve::new(raw.time, raw.flux).map_err(serde::de::Error::custom)
    }
}

/// Checks the aligned-array contract without taking ownership.
pub fn validate(time: &[f64], flux: &[f64]) -> Result<(), InvalidInputError> {
    if time.len() != flux.len() {
        return Err(InvalidInputError::LengthMismatch {
            time_len: time.len(),
            flux_len: flux.len(),
        });
    }
    if time.is_empty() {
        return Err(InvalidInputError::EmptySeries);
    }
    if let Some(index) = time.iter().position(|t| !t.is_finite()) {
        return Err(InvalidInputError::NonFinite { series: Series::Time, index });
    }
    if let Some(index) = flux.iter().position(|f| !f.is_finite()) {
        return Err(InvalidInputError::NonFinite { series: Series::Flux, index });
    }
    Ok(())
}

/// Dataset-level statistics shown alongside a detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightCurveSummary {
    pub row_count: usize,
    pub time_range_start: f64,
    pub time_range_end: f64,
    pub flux_mean: f64,
    pub flux_std: f64,
}

impl From<&LightCurve> for LightCurveSummary {
    fn from(curve: &LightCurve) -> Self {
        let (flux_mean, flux_std) = mean_and_stddev(curve.flux());
        let time_range_start = curve.time.iter().copied().fold(f64::INFINITY, f64::min);
        let time_range_end = curve.time.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            row_count: curve.len(),
            time_range_start,
            time_range_end,
            flux_mean,
            flux_std,
        }
    }
}

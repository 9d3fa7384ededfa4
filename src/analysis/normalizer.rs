use crate::config::ZScore;
use crate::domain::InvalidInputError;
use crate::utils::mean_and_stddev;

/// Z-scores of one flux array, `(flux[i] - mean) / stddev` with the population
/// standard deviation. Computed fresh per detection call and never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    values: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl NormalizedSeries {
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn zscores(&self) -> impl Iterator<Item = ZScore> + '_ {
        self.values.iter().copied().map(ZScore::new)
    }

    #[inline]
    pub fn get(&self, idx: usize) -> ZScore {
        ZScore::new(self.values[idx])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// True when the input had no measurable variance and every score is zero.
    pub fn is_flat(&self) -> bool {
        self.values.iter().all(|&z| z == 0.0)
    }
}

/// Standardizes `flux`.
///
/// A constant series (zero variance, or variance at round-off level relative to
/// the mean) yields an all-zero series so the output is always finite.
pub fn normalize(flux: &[f64]) -> Result<NormalizedSeries, InvalidInputError> {
    if flux.is_empty() {
        return Err(InvalidInputError::EmptySeries);
    }

    let (mean, stddev) = mean_and_stddev(flux);

    // Summing N copies of one value can leave the mean an ulp off, which would
    // otherwise turn a constant series into a wall of +/-1.
    let flat = stddev == 0.0 || stddev <= f64::EPSILON * mean.abs() * flux.len() as f64;

    let values = if flat {
        vec![0.0; flux.len()]
    } else {
        flux.iter().map(|&f| (f - mean) / stddev).collect()
    };

    Ok(NormalizedSeries { values, mean, stddev })
}

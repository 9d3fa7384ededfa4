use crate::analysis::NormalizedSeries;
use crate::config::DetectionConfig;

/// Outcome of the cheap global gate run before event extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoarseVerdict {
    /// Samples strictly below the coarse z threshold.
    pub dip_count: usize,
    pub sample_count: usize,
    pub has_transit: bool,
}

/// Counts significant dips and fires when they exceed `coarse_fraction` of the series.
pub fn classify(series: &NormalizedSeries, config: &DetectionConfig) -> CoarseVerdict {
    let dip_count = series
        .zscores()
        .filter(|z| z.is_below(config.coarse_z_threshold))
        .count();
    let sample_count = series.len();

    CoarseVerdict {
        dip_count,
        sample_count,
        has_transit: dip_count as f64 > config.coarse_fraction * sample_count as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize;
    use crate::config::DETECTION;

    #[test]
    fn flat_series_never_fires() {
        let series = normalize(&[1.0; 50]).unwrap();
        let verdict = classify(&series, &DETECTION);
        assert_eq!(verdict.dip_count, 0);
        assert!(!verdict.has_transit);
    }

    #[test]
    fn one_deep_sample_in_a_short_series_fires() {
        // 1 dip > 0.02 * 10
        let mut flux = vec![1.0; 10];
        flux[4] = 0.0;
        let verdict = classify(&normalize(&flux).unwrap(), &DETECTION);
        assert_eq!(verdict.dip_count, 1);
        assert!(verdict.has_transit);
    }

    #[test]
    fn fraction_gate_is_strict() {
        // 2 dips in 100 samples is exactly 2%, which is not enough
        let mut flux = vec![1.0; 100];
        flux[10] = 0.0;
        flux[60] = 0.0;
        let verdict = classify(&normalize(&flux).unwrap(), &DETECTION);
        assert_eq!(verdict.dip_count, 2);
        assert!(!verdict.has_transit);
    }

    #[test]
    fn thresholds_come_from_config() {
        let mut flux = vec![1.0; 10];
        flux[4] = 0.0;
        let config = DetectionConfig {
            coarse_z_threshold: -5.0,
            ..DETECTION
        };
        assert!(!classify(&normalize(&flux).unwrap(), &config).has_transit);
    }
}

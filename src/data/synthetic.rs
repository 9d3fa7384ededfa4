//! Synthetic box-transit light curves for demos and smoke tests.

use anyhow::{Context, Result};
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::SampleCurveConfig;
use crate::domain::LightCurve;

/// Whether sample `i` falls inside the box transit described by `config`.
pub fn in_sample_transit(config: &SampleCurveConfig, i: usize) -> bool {
    if config.period_samples == 0 {
        return false;
    }
    let phase = i % config.period_samples;
    let centre = config.period_samples / 2;
    let half_width = config.width_samples / 2;
    phase >= centre.saturating_sub(half_width) && phase <= centre + half_width
}

/// Generates a periodic box transit on a flat baseline with Gaussian noise.
pub fn generate_sample<R: Rng + ?Sized>(config: &SampleCurveConfig, rng: &mut R) -> Result<LightCurve> {
    let noise = Normal::new(0.0, config.noise_sigma)
        .with_context(|| format!("Invalid noise sigma: {}", config.noise_sigma))?;

    let (time, flux) = (0..config.num_points)
        .map(|i| {
            let mut level = config.baseline;
            if in_sample_transit(config, i) {
                level *= 1.0 - config.depth;
            }
            (i as f64 * config.dt, level + noise.sample(rng))
        })
        .unzip();

    Ok(LightCurve::new(time, flux)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SAMPLE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn transit_window_is_centred_in_each_period() {
        assert!(!in_sample_transit(&SAMPLE, 89));
        assert!(in_sample_transit(&SAMPLE, 90));
        assert!(in_sample_transit(&SAMPLE, 110));
        assert!(!in_sample_transit(&SAMPLE, 111));
        assert!(in_sample_transit(&SAMPLE, 300));
    }

    #[test]
    fn noiseless_curve_is_an_exact_box() {
        let config = SampleCurveConfig { noise_sigma: 0.0, ..SAMPLE };
        let curve = generate_sample(&config, &mut StdRng::seed_from_u64(1)).unwrap();

        assert_eq!(curve.len(), 1000);
        assert_eq!(curve.time()[10], 1.0);
        assert_eq!(curve.flux()[0], 1.0);
        approx::assert_relative_eq!(curve.flux()[100], 0.985);
        let dipped = curve.flux().iter().filter(|&&f| f < 1.0).count();
        assert_eq!(dipped, 5 * 21);
    }

    #[test]
    fn same_seed_same_curve() {
        let a = generate_sample(&SAMPLE, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_sample(&SAMPLE, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn negative_sigma_is_an_error() {
        let config = SampleCurveConfig { noise_sigma: -1.0, ..SAMPLE };
        assert!(generate_sample(&config, &mut StdRng::seed_from_u64(0)).is_err());
    }
}

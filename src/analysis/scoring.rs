//! Probability scoring policies.
//!
//! The detector turns its internals into one `probability_score` through a
//! [`ScoringPolicy`]. Three are provided:
//!
//! - [`SignificancePolicy`] (default): deterministic, derived from how unlikely
//!   the observed number of significant dips would be under pure Gaussian noise.
//! - [`MeanConfidencePolicy`]: the mean confidence of the extracted events.
//! - [`LegacyRandomPolicy`]: draws from a fixed range chosen only by whether the
//!   coarse gate fired. The score carries no information about the signal.

use std::sync::Mutex;

use rand::{Rng, SeedableRng, rngs::StdRng};
use statrs::distribution::{Binomial, ContinuousCDF, DiscreteCDF, Normal};
use strum_macros::{Display, EnumIter};

use crate::config::constants::legacy_scoring;
use crate::config::{DEBUG_FLAGS, Probability};
use crate::models::TransitEvent;

/// Everything a policy may look at. Borrowed for the duration of one call.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub sample_count: usize,
    pub dip_count: usize,
    pub has_transit: bool,
    pub coarse_z_threshold: f64,
    pub events: &'a [TransitEvent],
}

pub trait ScoringPolicy: Send + Sync {
    fn name(&self) -> &'static str;
    fn score(&self, input: &ScoringInput<'_>) -> Probability;
}

/// `P(X < dip_count)` for `X ~ Binomial(N, Φ(coarse_z_threshold))`.
///
/// Zero for a dip-free series, approaches one as the dip count climbs past what
/// noise alone would produce, and never decreases as `dip_count` grows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignificancePolicy;

impl SignificancePolicy {
    fn noise_dip_rate(threshold: f64) -> Option<f64> {
        let standard = Normal::new(0.0, 1.0).ok()?;
        Some(standard.cdf(threshold))
    }
}

impl ScoringPolicy for SignificancePolicy {
    fn name(&self) -> &'static str {
        "significance"
    }

    fn score(&self, input: &ScoringInput<'_>) -> Probability {
        if input.dip_count == 0 || input.sample_count == 0 {
            return Probability::ZERO;
        }

        let Some(p) = Self::noise_dip_rate(input.coarse_z_threshold) else {
            log::warn!("Invalid coarse threshold {} for scoring", input.coarse_z_threshold);
            return Probability::ZERO;
        };

        let score = match Binomial::new(p, input.sample_count as u64) {
            Ok(binomial) => binomial.cdf(input.dip_count as u64 - 1),
            Err(e) => {
                log::warn!("Binomial scoring failed (p={}, n={}): {}", p, input.sample_count, e);
                return Probability::ZERO;
            }
        };

        if DEBUG_FLAGS.log_scoring {
            log::debug!(
                "Significance: {} dips of {} samples (noise rate {:.4}) -> {:.4}",
                input.dip_count,
                input.sample_count,
                p,
                score
            );
        }

        Probability::new(score)
    }
}

/// Mean `confidence` of the extracted events, zero when there are none.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanConfidencePolicy;

impl ScoringPolicy for MeanConfidencePolicy {
    fn name(&self) -> &'static str {
        "mean-confidence"
    }

    fn score(&self, input: &ScoringInput<'_>) -> Probability {
        if input.events.is_empty() {
            return Probability::ZERO;
        }
        let total: f64 = input.events.iter().map(|e| e.confidence).sum();
        Probability::new(total / input.events.len() as f64)
    }
}

/// Uniform draw in `[0.85, 0.97]` when the coarse gate fired, else `[0.15, 0.40]`.
#[derive(Debug, Default)]
pub struct LegacyRandomPolicy {
    // None draws from the thread-local generator.
    seeded: Option<Mutex<StdRng>>,
}

impl LegacyRandomPolicy {
    pub fn new() -> Self {
        Self { seeded: None }
    }

    /// Reproducible draws, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    fn draw(&self, (lo, hi): (f64, f64)) -> f64 {
        match &self.seeded {
            Some(rng) => {
                // A poisoned lock still holds a usable generator
                let mut rng = rng.lock().unwrap_or_else(|e| e.into_inner());
                rng.random_range(lo..=hi)
            }
            None => rand::rng().random_range(lo..=hi),
        }
    }
}

impl ScoringPolicy for LegacyRandomPolicy {
    fn name(&self) -> &'static str {
        "legacy-random"
    }

    fn score(&self, input: &ScoringInput<'_>) -> Probability {
        let range = if input.has_transit {
            legacy_scoring::TRANSIT_RANGE
        } else {
            legacy_scoring::NO_TRANSIT_RANGE
        };
        Probability::new(self.draw(range))
    }
}

/// Selectable policy, for configs and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Default, clap::ValueEnum)]
pub enum ScoringKind {
    #[default]
    #[strum(to_string = "significance")]
    Significance,
    #[strum(to_string = "mean-confidence")]
    MeanConfidence,
    #[strum(to_string = "legacy-random")]
    LegacyRandom,
}

impl ScoringKind {
    pub fn build(self, seed: Option<u64>) -> Box<dyn ScoringPolicy> {
        match (self, seed) {
            (Self::Significance, _) => Box::new(SignificancePolicy),
            (Self::MeanConfidence, _) => Box::new(MeanConfidencePolicy),
            (Self::LegacyRandom, Some(seed)) => Box::new(LegacyRandomPolicy::seeded(seed)),
            (Self::LegacyRandom, None) => Box::new(LegacyRandomPolicy::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn input(sample_count: usize, dip_count: usize, has_transit: bool) -> ScoringInput<'static> {
        ScoringInput {
            sample_count,
            dip_count,
            has_transit,
            coarse_z_threshold: -2.0,
            events: &[],
        }
    }

    #[test]
    fn significance_is_zero_without_dips() {
        assert_eq!(SignificancePolicy.score(&input(100, 0, false)), Probability::ZERO);
    }

    #[test]
    fn significance_is_monotone_in_dip_count() {
        let mut last = 0.0;
        for dips in 0..=40 {
            let score = SignificancePolicy.score(&input(400, dips, dips > 8)).value();
            assert!(score >= last, "dips {dips}: {score} < {last}");
            last = score;
        }
        assert!(last > 0.99);
    }

    #[test]
    fn significance_is_deterministic() {
        let a = SignificancePolicy.score(&input(250, 12, true));
        let b = SignificancePolicy.score(&input(250, 12, true));
        assert_eq!(a, b);
    }

    #[test]
    fn noise_level_dips_score_low() {
        // 2.3% of samples below -2σ is what Gaussian noise produces on its own
        let score = SignificancePolicy.score(&input(1000, 15, false)).value();
        assert!(score < 0.1, "{score}");
    }

    fn event(confidence: f64) -> TransitEvent {
        TransitEvent {
            period: 0.0,
            depth: 0.03,
            duration: 2.0,
            start: 0.0,
            end: 2.0,
            confidence,
        }
    }

    #[test]
    fn mean_confidence_averages_events() {
        let events = [event(0.8), event(0.9), event(0.95)];
        let scored = MeanConfidencePolicy.score(&ScoringInput { events: &events, ..input(100, 6, true) });
        assert!((scored.value() - 0.883_333_333_333).abs() < 1e-9);

        assert_eq!(MeanConfidencePolicy.score(&input(100, 6, true)), Probability::ZERO);
    }

    #[test]
    fn legacy_ranges_depend_only_on_gate() {
        let policy = LegacyRandomPolicy::seeded(7);
        for _ in 0..200 {
            let hit = policy.score(&input(100, 50, true)).value();
            assert!((0.85..=0.97).contains(&hit));
            let miss = policy.score(&input(100, 50, false)).value();
            assert!((0.15..=0.40).contains(&miss));
        }
    }

    #[test]
    fn legacy_seed_is_reproducible() {
        let a = LegacyRandomPolicy::seeded(42);
        let b = LegacyRandomPolicy::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.score(&input(10, 1, true)), b.score(&input(10, 1, true)));
        }
    }

    #[test]
    fn every_kind_scores_inside_unit_interval() {
        for kind in ScoringKind::iter() {
            let policy = kind.build(Some(1));
            for dips in [0, 1, 5, 50] {
                let score = policy.score(&input(100, dips, dips > 2)).value();
                assert!((0.0..=1.0).contains(&score), "{kind}: {score}");
            }
        }
    }
}

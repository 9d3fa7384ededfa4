// Transit detection pipeline: normalize -> coarse gate -> event scan -> period -> score
mod classifier;
mod detector;
mod event_extractor;
mod normalizer;
mod period;
mod scoring;

pub use {
    classifier::{CoarseVerdict, classify},
    detector::TransitDetector,
    event_extractor::extract_events,
    normalizer::{NormalizedSeries, normalize},
    period::{assign_period, estimate_period},
    scoring::{
        LegacyRandomPolicy, MeanConfidencePolicy, ScoringInput, ScoringKind, ScoringPolicy,
        SignificancePolicy,
    },
};

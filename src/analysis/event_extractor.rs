//! Run-length scan that groups consecutive below-threshold samples into transits.

use crate::analysis::NormalizedSeries;
use crate::config::{DEBUG_FLAGS, DetectionConfig, SpanMode};
use crate::models::TransitEvent;
use crate::utils::get_min;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    OutsideTransit,
    InsideTransit { start_idx: usize },
}

/// Scans `series` (aligned with `time` by index) and returns accepted events in
/// time order. `period` is left at `0`; see [`super::assign_period`].
///
/// A dip still open when the series ends is dropped, never emitted.
pub fn extract_events(
    time: &[f64],
    series: &NormalizedSeries,
    config: &DetectionConfig,
) -> Vec<TransitEvent> {
    debug_assert_eq!(time.len(), series.len());

    let mut events = Vec::new();
    let mut state = ScanState::OutsideTransit;

    for (i, &z) in series.values().iter().enumerate() {
        let in_dip = z < config.fine_z_threshold;

        state = match (state, in_dip) {
            (ScanState::OutsideTransit, true) => ScanState::InsideTransit { start_idx: i },
            (ScanState::InsideTransit { start_idx }, false) => {
                if let Some(event) = close_candidate(time, series, start_idx, i, config) {
                    events.push(event);
                }
                ScanState::OutsideTransit
            }
            (state, _) => state,
        };
    }

    if let ScanState::InsideTransit { start_idx } = state {
        if DEBUG_FLAGS.log_candidates {
            log::debug!(
                "Dropping unterminated dip starting at t={} ({} samples)",
                time[start_idx],
                series.len() - start_idx
            );
        }
    }

    events
}

/// Closes the candidate covering `start_idx..recovery_idx` (exclusive end).
fn close_candidate(
    time: &[f64],
    series: &NormalizedSeries,
    start_idx: usize,
    recovery_idx: usize,
    config: &DetectionConfig,
) -> Option<TransitEvent> {
    let end_idx = recovery_idx - 1;
    let start = time[start_idx];
    let end = time[end_idx];

    let span = match config.span_mode {
        SpanMode::InDip => end - start,
        SpanMode::ToRecovery => time[recovery_idx] - start,
    };

    if span <= config.min_duration {
        if DEBUG_FLAGS.log_candidates {
            log::debug!(
                "Rejecting dip t=[{}, {}]: span {:.3} <= {}",
                start, end, span, config.min_duration
            );
        }
        return None;
    }

    let (_, deepest) = get_min(&series.values()[start_idx..recovery_idx])?;
    let depth_zscore = deepest.abs();

    Some(TransitEvent {
        period: 0.0,
        depth: depth_zscore * config.depth_scale,
        duration: end - start,
        start,
        end,
        confidence: config.confidence_for(depth_zscore),
    })
}

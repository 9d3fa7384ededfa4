use itertools::Itertools;

use crate::config::PeriodMethod;
use crate::models::TransitEvent;
use crate::utils::median;

/// Estimates one recurrence interval from ordered events.
///
/// Assumes every event belongs to the same periodic source; nothing checks that
/// the spacings agree. Returns `0.0` with fewer than two events.
pub fn estimate_period(events: &[TransitEvent], method: PeriodMethod) -> f64 {
    if events.len() < 2 {
        return 0.0;
    }

    match method {
        PeriodMethod::MeanSpacing => {
            let first = events[0].start;
            let last = events[events.len() - 1].start;
            (last - first) / (events.len() - 1) as f64
        }
        PeriodMethod::MedianSpacing => {
            let spacings: Vec<f64> = events
                .iter()
                .tuple_windows()
                .map(|(a, b)| b.start - a.start)
                .collect();
            median(&spacings).unwrap_or(0.0)
        }
    }
}

/// Writes the estimate into every event. Leaves zero or one event untouched.
pub fn assign_period(events: &mut [TransitEvent], method: PeriodMethod) {
    if events.len() < 2 {
        return;
    }
    let period = estimate_period(events, method);
    for event in events.iter_mut() {
        event.period = period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_at(start: f64) -> TransitEvent {
        TransitEvent {
            period: 0.0,
            depth: 0.03,
            duration: 2.0,
            start,
            end: start + 2.0,
            confidence: 0.9,
        }
    }

    #[test]
    fn single_event_keeps_zero_period() {
        let mut events = vec![event_at(12.0)];
        assign_period(&mut events, PeriodMethod::MeanSpacing);
        assert_eq!(events[0].period, 0.0);
    }

    #[test]
    fn mean_spacing_is_uniform_across_events() {
        let mut events = vec![event_at(10.0), event_at(30.0), event_at(50.0)];
        assign_period(&mut events, PeriodMethod::MeanSpacing);
        assert!(events.iter().all(|e| e.period == 20.0));
    }

    #[test]
    fn mean_spacing_uses_only_the_ends() {
        // (70 - 10) / 3, the inner positions do not matter
        let events = vec![event_at(10.0), event_at(12.0), event_at(65.0), event_at(70.0)];
        assert_eq!(estimate_period(&events, PeriodMethod::MeanSpacing), 20.0);
    }

    #[test]
    fn median_spacing_ignores_a_missed_transit() {
        // The event at 50 was never detected, leaving one double-length gap
        let events = vec![
            event_at(10.0),
            event_at(30.0),
            event_at(70.0),
            event_at(90.0),
        ];
        assert_eq!(estimate_period(&events, PeriodMethod::MedianSpacing), 20.0);
        assert!((estimate_period(&events, PeriodMethod::MeanSpacing) - 26.666).abs() < 1e-2);
    }

    #[test]
    fn empty_list_is_fine() {
        let mut events: Vec<TransitEvent> = vec![];
        assign_period(&mut events, PeriodMethod::MedianSpacing);
        assert_eq!(estimate_period(&events, PeriodMethod::MeanSpacing), 0.0);
    }
}

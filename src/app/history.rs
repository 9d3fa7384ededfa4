use anyhow::Result;
use strum_macros::Display;

use crate::HistoryArgs;
use crate::data::{load_records, render_summary_table};
use crate::models::DetectionRecord;

/// Which saved detections `history` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, clap::ValueEnum)]
pub enum HistoryFilter {
    #[default]
    #[strum(to_string = "all")]
    All,
    #[strum(to_string = "transit")]
    Transit,
    #[strum(to_string = "no-transit")]
    NoTransit,
}

impl HistoryFilter {
    pub fn matches(self, record: &DetectionRecord) -> bool {
        match self {
            Self::All => true,
            Self::Transit => record.result.has_transit,
            Self::NoTransit => !record.result.has_transit,
        }
    }
}

/// Newest first, filtered by outcome, capped at `limit`, then narrowed by a
/// case-insensitive dataset name match.
pub fn select_history(
    mut records: Vec<DetectionRecord>,
    filter: HistoryFilter,
    search: Option<&str>,
    limit: usize,
) -> Vec<DetectionRecord> {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let needle = search.map(str::to_lowercase).unwrap_or_default();
    records
        .into_iter()
        .filter(|r| filter.matches(r))
        .take(limit)
        .filter(|r| r.dataset.to_lowercase().contains(&needle))
        .collect()
}

/// Loads every report, prints the selected records and returns them.
pub fn run_history(args: &HistoryArgs) -> Result<Vec<DetectionRecord>> {
    let mut records = Vec::new();
    for path in &args.reports {
        records.extend(load_records(path)?);
    }
    let loaded = records.len();

    let selected = select_history(records, args.filter, args.search.as_deref(), args.limit);
    log::info!(
        "History: {} of {} record(s) match filter={}",
        selected.len(),
        loaded,
        args.filter
    );

    if selected.is_empty() {
        println!("No saved detections match.");
    } else {
        println!("{}", render_summary_table(&selected));
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TransitDetector;
    use crate::data::save_records;
    use crate::domain::LightCurve;
    use chrono::{Duration, TimeZone, Utc};

    fn record(name: &str, dipped: bool, minutes: i64) -> DetectionRecord {
        let mut flux = vec![1.0; 40];
        if dipped {
            for f in &mut flux[10..14] {
                *f = 0.9;
            }
        }
        let curve = LightCurve::new((0..40).map(|i| i as f64).collect(), flux).unwrap();
        let result = TransitDetector::default().detect(&curve);
        let mut record = DetectionRecord::new(name, curve.summary(), result);
        record.created_at =
            Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap() + Duration::minutes(minutes);
        record
    }

    fn names(records: &[DetectionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.dataset.as_str()).collect()
    }

    #[test]
    fn newest_first() {
        let records = vec![record("old", true, 0), record("new", false, 10), record("mid", true, 5)];
        let selected = select_history(records, HistoryFilter::All, None, 50);
        assert_eq!(names(&selected), ["new", "mid", "old"]);
    }

    #[test]
    fn filter_on_outcome() {
        let records = vec![record("a", true, 0), record("b", false, 1), record("c", true, 2)];
        let transits = select_history(records.clone(), HistoryFilter::Transit, None, 50);
        assert_eq!(names(&transits), ["c", "a"]);
        let quiet = select_history(records, HistoryFilter::NoTransit, None, 50);
        assert_eq!(names(&quiet), ["b"]);
    }

    #[test]
    fn search_ignores_case_and_limit_keeps_newest() {
        let records = vec![
            record("Kepler-10.csv", true, 0),
            record("tess.json", true, 1),
            record("kepler-22.csv", false, 2),
        ];
        let found = select_history(records.clone(), HistoryFilter::All, Some("KEPLER"), 50);
        assert_eq!(names(&found), ["kepler-22.csv", "Kepler-10.csv"]);

        let latest = select_history(records, HistoryFilter::All, None, 2);
        assert_eq!(names(&latest), ["kepler-22.csv", "tess.json"]);
    }

    #[test]
    fn history_reads_saved_reports() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.json");
        let second = dir.path().join("second.json");
        save_records(&first, &[record("a.csv", true, 0), record("b.csv", false, 1)]).unwrap();
        save_records(&second, &[record("c.csv", true, 2)]).unwrap();

        let args = HistoryArgs {
            reports: vec![first, second],
            filter: HistoryFilter::Transit,
            search: None,
            limit: 50,
        };
        let shown = run_history(&args).unwrap();
        assert_eq!(names(&shown), ["c.csv", "a.csv"]);
    }

    #[test]
    fn missing_report_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = HistoryArgs {
            reports: vec![dir.path().join("absent.json")],
            filter: HistoryFilter::All,
            search: None,
            limit: 50,
        };
        assert!(run_history(&args).is_err());
    }
}

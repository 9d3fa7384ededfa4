//! Console tables and JSON reports for finished detections.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::{PERSISTENCE, report_filename};
use crate::models::DetectionRecord;

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "Dataset")]
    dataset: String,
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Depth")]
    depth: String,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Dataset")]
    dataset: String,
    #[tabled(rename = "Rows")]
    rows: usize,
    #[tabled(rename = "Transit")]
    has_transit: String,
    #[tabled(rename = "Score")]
    score: String,
    #[tabled(rename = "Events")]
    events: usize,
    #[tabled(rename = "Period")]
    period: String,
    #[tabled(rename = "Mean Conf.")]
    mean_confidence: String,
    #[tabled(rename = "Inference")]
    inference: String,
}

/// One line per dataset.
pub fn render_summary_table(records: &[DetectionRecord]) -> String {
    let rows = records.iter().map(|r| SummaryRow {
        dataset: r.dataset.clone(),
        rows: r.summary.row_count,
        has_transit: if r.result.has_transit { "yes" } else { "no" }.to_string(),
        score: r.result.probability_score.to_string(),
        events: r.result.transit_count(),
        period: r
            .result
            .period()
            .map_or_else(|| "-".to_string(), |p| format!("{p:.3}")),
        mean_confidence: r
            .result
            .mean_confidence()
            .map_or_else(|| "-".to_string(), |c| format!("{:.1}%", c * 100.0)),
        inference: format!("{} ms", r.result.inference_time_ms),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

/// One line per detected event across every record. `None` when nothing was found.
pub fn render_events_table(records: &[DetectionRecord]) -> Option<String> {
    let rows: Vec<EventRow> = records
        .iter()
        .flat_map(|r| {
            r.result
                .detected_transits
                .iter()
                .enumerate()
                .map(|(i, e)| EventRow {
                    dataset: r.dataset.clone(),
                    index: i + 1,
                    start: format!("{:.3}", e.start),
                    end: format!("{:.3}", e.end),
                    duration: format!("{:.3}", e.duration),
                    depth: format!("{:.5}", e.depth),
                    period: format!("{:.3}", e.period),
                    confidence: format!("{:.1}%", e.confidence * 100.0),
                })
        })
        .collect();

    if rows.is_empty() {
        return None;
    }
    Some(Table::new(rows).with(Style::rounded()).to_string())
}

/// Writes `records` as pretty JSON to `path`.
pub fn save_records(path: &Path, records: &[DetectionRecord]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, records)
        .with_context(|| format!("Failed to write report to: {:?}", path))?;
    Ok(())
}

pub fn load_records(path: &Path) -> Result<Vec<DetectionRecord>> {
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse report from: {:?}", path))?;
    Ok(records)
}

/// Default location for a new report, e.g. `detections/transits_20261016_141503_v1.json`.
pub fn default_report_path(records: &[DetectionRecord]) -> PathBuf {
    let created_at = records
        .first()
        .map_or_else(chrono::Utc::now, |r| r.created_at);
    PathBuf::from(PERSISTENCE.report.directory).join(report_filename(created_at))
}

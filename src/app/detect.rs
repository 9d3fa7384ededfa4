use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::analysis::TransitDetector;
use crate::config::constants::engine::{JOB_TIMEOUT, LEGACY_PACING};
use crate::config::{DETECTION, DetectionConfig, PERSISTENCE, SAMPLE};
use crate::data::{
    default_report_path, generate_sample, load_light_curve, render_events_table,
    render_summary_table, save_records,
};
use crate::domain::LightCurve;
use crate::engine::{DetectionEngine, PacedDetector};
use crate::models::DetectionRecord;
use crate::{Cli, Command, DetectArgs};

use super::history::run_history;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Detect(args) => run_detect(&args).map(|_| ()),
        Command::History(args) => run_history(&args).map(|_| ()),
    }
}

/// Loads every requested curve, detects on the background engine, prints the
/// tables and optionally writes the records.
pub fn run_detect(args: &DetectArgs) -> Result<Vec<DetectionRecord>> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => DETECTION,
    };

    let datasets = collect_datasets(args)?;
    let summaries: Vec<_> = datasets.iter().map(|(_, curve)| curve.summary()).collect();

    let detector = TransitDetector::with_scoring(config, args.scoring.build(args.seed));
    let delay = pacing_delay(args);
    log::info!(
        "Detecting {} light curve(s) with {} scoring (pacing {:?})",
        datasets.len(),
        args.scoring,
        delay
    );

    let mut engine = DetectionEngine::new(PacedDetector::new(detector, delay));
    let job_id = engine.submit(datasets)?;
    let job = engine
        .wait_for(job_id, JOB_TIMEOUT + delay)
        .context("Detection job did not complete")?;
    engine.shutdown();

    let records: Vec<DetectionRecord> = job
        .outcomes
        .into_iter()
        .zip(summaries)
        .map(|((name, result), summary)| DetectionRecord::new(name, summary, result))
        .collect();

    println!("{}", render_summary_table(&records));
    match render_events_table(&records) {
        Some(table) => println!("{table}"),
        None => println!("No transits detected."),
    }

    let report_path = match (&args.out, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(default_report_path(&records)),
        (None, false) => None,
    };
    if let Some(path) = report_path {
        save_records(&path, &records)?;
        log::info!("Saved {} record(s) to {:?}", records.len(), path);
    }

    Ok(records)
}

/// Reads a JSON detection config. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<DetectionConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read config: {:?}", path))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config from: {:?}", path))?;
    Ok(config)
}

/// Named curves from the file arguments, plus the synthetic sample if requested.
pub fn collect_datasets(args: &DetectArgs) -> Result<Vec<(String, LightCurve)>> {
    if args.files.is_empty() && !args.sample {
        bail!("No light curves given: pass one or more files or --sample");
    }

    let mut datasets = Vec::with_capacity(args.files.len() + 1);
    for path in &args.files {
        let curve = load_light_curve(path)?;
        datasets.push((dataset_name(path), curve));
    }

    if args.sample {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        let curve = generate_sample(&SAMPLE, &mut rng)?;
        datasets.push((PERSISTENCE.sample.filename.to_string(), curve));
    }

    Ok(datasets)
}

pub fn pacing_delay(args: &DetectArgs) -> Duration {
    if args.legacy_pacing {
        LEGACY_PACING
    } else {
        Duration::from_millis(args.pace_ms)
    }
}

fn dataset_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

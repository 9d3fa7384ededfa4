use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use crate::config::DEBUG_FLAGS;
use crate::config::constants::ingest::MAX_FILE_BYTES;
use crate::domain::LightCurve;

/// Supported upload formats, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFormat {
    Csv,
    Json,
}

impl CurveFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => bail!("Unsupported light curve file {:?}: expected .csv or .json", path),
        }
    }
}

/// Reads a light curve from a CSV or JSON file.
pub fn load_light_curve(path: &Path) -> Result<LightCurve> {
    let format = CurveFormat::from_path(path)?;

    let size = fs::metadata(path)
        .with_context(|| format!("Failed to stat file: {:?}", path))?
        .len();
    if size > MAX_FILE_BYTES {
        bail!(
            "{:?} is {} bytes; uploads are limited to {} bytes",
            path,
            size,
            MAX_FILE_BYTES
        );
    }

    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    let curve = match format {
        CurveFormat::Csv => parse_csv(&text),
        CurveFormat::Json => parse_json(&text),
    }
    .with_context(|| format!("Failed to parse light curve from: {:?}", path))?;

    if !curve.is_time_ordered() {
        log::warn!("{:?}: time values are not strictly increasing", path);
    }
    if DEBUG_FLAGS.log_ingest {
        log::info!("Loaded {} samples from {:?}", curve.len(), path);
    }

    Ok(curve)
}

/// `{"time": [...], "flux": [...]}`
pub fn parse_json(text: &str) -> Result<LightCurve> {
    let curve: LightCurve = serde_json::from_str(text).context("Invalid light curve JSON")?;
    Ok(curve)
}

/// CSV with a header row. The time column is the first header containing `time`
/// (or exactly `t`), the flux column the first containing `flux` or `brightness`
/// (or exactly `f`). Rows that are short or hold unparseable numbers are skipped.
pub fn parse_csv(text: &str) -> Result<LightCurve> {
    let mut lines = text.trim().lines();
    let Some(header) = lines.next() else {
        bail!("CSV is empty");
    };

    let headers: Vec<String> = header
        .to_lowercase()
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let time_idx = headers.iter().position(|h| h.contains("time") || h == "t");
    let flux_idx = headers
        .iter()
        .position(|h| h.contains("flux") || h == "f" || h.contains("brightness"));

    let (Some(time_idx), Some(flux_idx)) = (time_idx, flux_idx) else {
        bail!("CSV must contain \"time\" and \"flux\" columns (found: {})", header);
    };

    let mut time = Vec::new();
    let mut flux = Vec::new();
    let mut skipped = 0usize;

    for line in lines {
        let values: Vec<&str> = line.split(',').collect();
        let parsed = values
            .get(time_idx)
            .zip(values.get(flux_idx))
            .and_then(|(t, f)| Some((t.trim().parse::<f64>().ok()?, f.trim().parse::<f64>().ok()?)));

        match parsed {
            Some((t, f)) if t.is_finite() && f.is_finite() => {
                time.push(t);
                flux.push(f);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 && DEBUG_FLAGS.log_ingest {
        log::info!("Skipped {} unusable CSV rows", skipped);
    }

    Ok(LightCurve::new(time, flux)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_finds_columns_by_name() {
        let csv = "id, Flux , TIME_BJD\n0,1.0,10.0\n1,0.99,10.5\n";
        let curve = parse_csv(csv).unwrap();
        assert_eq!(curve.time(), &[10.0, 10.5]);
        assert_eq!(curve.flux(), &[1.0, 0.99]);
    }

    #[test]
    fn csv_accepts_short_aliases() {
        let curve = parse_csv("t,f\n0,1\n1,2\n").unwrap();
        assert_eq!(curve.len(), 2);
        let curve = parse_csv("time,brightness\n0,1\n").unwrap();
        assert_eq!(curve.flux(), &[1.0]);
    }

    #[test]
    fn csv_skips_bad_rows() {
        let csv = "time,flux\n0,1.0\n1,oops\n2\n3,nan\n4,0.98\n";
        let curve = parse_csv(csv).unwrap();
        assert_eq!(curve.time(), &[0.0, 4.0]);
    }

    #[test]
    fn csv_without_columns_is_an_error() {
        let err = parse_csv("a,b\n1,2\n").unwrap_err();
        assert!(err.to_string().contains("\"time\" and \"flux\""));
    }

    #[test]
    fn csv_with_no_usable_rows_is_an_error() {
        assert!(parse_csv("time,flux\nx,y\n").is_err());
        assert!(parse_csv("").is_err());
    }

    #[test]
    fn json_is_validated() {
        assert!(parse_json(r#"{"time":[0,1],"flux":[1]}"#).is_err());
        assert!(parse_json(r#"{"time":[],"flux":[]}"#).is_err());
        assert_eq!(parse_json(r#"{"time":[0,1],"flux":[1,1]}"#).unwrap().len(), 2);
    }

    #[test]
    fn extension_picks_the_parser() {
        let dir = tempfile::tempdir().unwrap();

        let csv_path = dir.path().join("curve.CSV");
        fs::File::create(&csv_path)
            .unwrap()
            .write_all(b"time,flux\n0,1\n1,1\n")
            .unwrap();
        assert_eq!(load_light_curve(&csv_path).unwrap().len(), 2);

        let txt_path = dir.path().join("curve.txt");
        fs::write(&txt_path, "time,flux\n0,1\n").unwrap();
        assert!(load_light_curve(&txt_path).is_err());
    }
}

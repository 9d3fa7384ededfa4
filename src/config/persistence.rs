//! File persistence and serialization configuration

/// Configuration for detection result reports
pub struct ReportPersistenceConfig {
    /// Directory path for storing report files
    pub directory: &'static str,
    /// Base filename for report files (without extension)
    pub filename_base: &'static str,
    /// Current version of the report serialization format
    pub version: f64,
}

/// Configuration for generated sample curves
pub struct SamplePersistenceConfig {
    pub directory: &'static str,
    pub filename: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub report: ReportPersistenceConfig,
    pub sample: SamplePersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    report: ReportPersistenceConfig {
        directory: "detections",
        filename_base: "transits",
        version: 1.0,
    },
    sample: SamplePersistenceConfig {
        directory: "light_curves",
        filename: "sample_curve.json",
    },
};

/// Generate a timestamped report filename
/// Example: "transits_20261016_141503_v1.json"
pub fn report_filename(created_at: chrono::DateTime<chrono::Utc>) -> String {
    format!(
        "{}_{}_v{}.json",
        PERSISTENCE.report.filename_base,
        created_at.format("%Y%m%d_%H%M%S"),
        PERSISTENCE.report.version
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn report_filename_embeds_timestamp_and_version() {
        let ts = chrono::Utc.with_ymd_and_hms(2026, 10, 16, 14, 15, 3).unwrap();
        assert_eq!(report_filename(ts), "transits_20261016_141503_v1.json");
    }
}

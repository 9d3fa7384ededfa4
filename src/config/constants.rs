// Detection constants. These seed `DETECTION`; the detector itself reads its config.

pub const COARSE_Z_THRESHOLD: f64 = -2.0;
pub const COARSE_FRACTION: f64 = 0.02;

pub const FINE_Z_THRESHOLD: f64 = -1.5;
pub const MIN_TRANSIT_DURATION: f64 = 0.5;
pub const DEPTH_SCALE: f64 = 0.015;

pub mod confidence {
    pub const BASE: f64 = 0.7;
    pub const SLOPE: f64 = 0.1;
    pub const CAP: f64 = 0.95;
}

pub mod legacy_scoring {
    /// Score range when the coarse classifier fires.
    pub const TRANSIT_RANGE: (f64, f64) = (0.85, 0.97);
    /// Score range when it does not.
    pub const NO_TRANSIT_RANGE: (f64, f64) = (0.15, 0.40);
}

pub mod engine {
    use std::time::Duration;
    /// UI pacing delay for interactive front ends.
    pub const LEGACY_PACING: Duration = Duration::from_secs(2);
    /// How long the CLI waits for one job before giving up.
    pub const JOB_TIMEOUT: Duration = Duration::from_secs(600);
}

pub mod history {
    /// Most recent records shown by `history`.
    pub const DEFAULT_LIMIT: usize = 50;
}

pub mod ingest {
    /// Uploads larger than this are refused before parsing.
    pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
}

/// Label stored on every detection record.
pub const MODEL_VERSION: &str = concat!("threshold-scan-v", env!("CARGO_PKG_VERSION"));

//! Debugging feature flags.

pub struct LogFlags {
    /// Per-call summary from the detector (sample count, dips, events).
    pub log_detector: bool,

    /// Every accepted / rejected candidate during event extraction.
    pub log_candidates: bool,

    /// Scoring policy inputs and outputs.
    pub log_scoring: bool,

    /// Worker thread job lifecycle.
    pub log_engine: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// File ingestion (row counts, skipped rows).
    pub log_ingest: bool,
}

pub const DEBUG_FLAGS: LogFlags = LogFlags {
    log_detector: true,
    log_candidates: false,
    log_scoring: false,
    log_engine: true,
    log_performance: false,
    log_ingest: true,
};

/// Monotonic clock used for timing detection calls.
pub type AppInstant = web_time::Instant;

/// Whole milliseconds elapsed since `start`, saturating at `u64::MAX`.
pub fn elapsed_ms(start: AppInstant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Human-friendly duration for log lines: `850ms`, `2.4s`, `3m 05s`.
pub fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        return format!("{}ms", ms);
    }
    let secs = ms as f64 / 1000.0;
    if secs < 60.0 {
        return format!("{:.1}s", secs);
    }
    let whole_secs = ms / 1000;
    format!("{}m {:02}s", whole_secs / 60, whole_secs % 60)
}

//! Configuration module for the transit detector.

// Can all be private now because we have a public re-export.
mod debug;
mod demo;
mod detection;
mod persistence;
mod types;

// Public
pub mod constants;

// Re-export commonly used items
pub use debug::DEBUG_FLAGS;
pub use demo::{SAMPLE, SampleCurveConfig};
pub use detection::{DETECTION, DetectionConfig, PeriodMethod, SpanMode};
pub use persistence::{PERSISTENCE, report_filename};
pub use types::{Probability, ZScore};

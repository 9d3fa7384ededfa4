mod core;
mod messages;
mod pacing;
mod worker;

pub use self::core::DetectionEngine;
pub use messages::{Dataset, JobRequest, JobResult};
pub use pacing::PacedDetector;
pub use worker::{process_request_sync, spawn_worker_thread};

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use super::messages::{JobRequest, JobResult};
use super::pacing::PacedDetector;

use crate::config::DEBUG_FLAGS;
use crate::utils::{AppInstant, elapsed_ms, format_duration_ms};

/// Spawns a background thread that serves jobs until the request channel closes.
pub fn spawn_worker_thread(
    detector: Arc<PacedDetector>,
    rx: Receiver<JobRequest>,
    tx: Sender<JobResult>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(req) = rx.recv() {
            let result = process_request_sync(&detector, req);
            if tx.send(result).is_err() {
                // Nobody is listening any more
                break;
            }
        }
        if DEBUG_FLAGS.log_engine {
            log::info!("Detection worker shutting down");
        }
    })
}

/// Runs one job to completion on the calling thread.
pub fn process_request_sync(detector: &PacedDetector, req: JobRequest) -> JobResult {
    let start = AppInstant::now();

    if DEBUG_FLAGS.log_engine {
        log::info!(
            "Job {}: detecting {} dataset(s) with {} scoring",
            req.job_id,
            req.datasets.len(),
            detector.detector().scoring_name()
        );
    }

    let curves: Vec<_> = req.datasets.iter().map(|d| Arc::clone(&d.curve)).collect();
    let results = detector.detect_batch(&curves);

    let outcomes = req
        .datasets
        .into_iter()
        .map(|d| d.name)
        .zip(results)
        .collect();

    let duration_ms = elapsed_ms(start);
    if DEBUG_FLAGS.log_engine {
        log::info!("Job {} finished in {}", req.job_id, format_duration_ms(duration_ms));
    }

    JobResult {
        job_id: req.job_id,
        duration_ms,
        outcomes,
    }
}

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Result, anyhow};
use uuid::Uuid;

use super::messages::{Dataset, JobRequest, JobResult};
use super::pacing::PacedDetector;
use super::worker;

use crate::domain::LightCurve;

/// Owns a detection worker thread and the channels to it.
///
/// Callers submit jobs and either poll ([`DetectionEngine::poll`]) or block
/// ([`DetectionEngine::wait_for`]) for results.
pub struct DetectionEngine {
    job_tx: Option<Sender<JobRequest>>,
    result_rx: Receiver<JobResult>,
    pending: HashSet<Uuid>,
    worker: Option<JoinHandle<()>>,
}

impl DetectionEngine {
    pub fn new(detector: PacedDetector) -> Self {
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (result_tx, result_rx) = channel::<JobResult>();

        let worker = worker::spawn_worker_thread(Arc::new(detector), job_rx, result_tx);

        Self {
            job_tx: Some(job_tx),
            result_rx,
            pending: HashSet::new(),
            worker: Some(worker),
        }
    }

    /// Queues named curves as one job and returns its id.
    pub fn submit<I>(&mut self, datasets: I) -> Result<Uuid>
    where
        I: IntoIterator<Item = (String, LightCurve)>,
    {
        let datasets = datasets
            .into_iter()
            .map(|(name, curve)| Dataset {
                name,
                curve: Arc::new(curve),
            })
            .collect();

        let job_id = Uuid::new_v4();
        let tx = self
            .job_tx
            .as_ref()
            .ok_or_else(|| anyhow!("detection engine is shut down"))?;
        tx.send(JobRequest { job_id, datasets })
            .map_err(|_| anyhow!("detection worker has stopped"))?;

        self.pending.insert(job_id);
        Ok(job_id)
    }

    pub fn pending_jobs(&self) -> usize {
        self.pending.len()
    }

    /// Drains every finished job without blocking.
    pub fn poll(&mut self) -> Vec<JobResult> {
        let mut finished = Vec::new();
        while let Ok(result) = self.result_rx.try_recv() {
            self.pending.remove(&result.job_id);
            finished.push(result);
        }
        finished
    }

    /// Blocks until `job_id` completes. Results for other jobs that arrive first
    /// are dropped, so use [`DetectionEngine::poll`] when several jobs are in flight.
    pub fn wait_for(&mut self, job_id: Uuid, timeout: Duration) -> Result<JobResult> {
        if !self.pending.contains(&job_id) {
            return Err(anyhow!("job {} is not pending", job_id));
        }

        loop {
            match self.result_rx.recv_timeout(timeout) {
                Ok(result) => {
                    self.pending.remove(&result.job_id);
                    if result.job_id == job_id {
                        return Ok(result);
                    }
                    log::warn!("Discarding result of job {} while waiting for {}", result.job_id, job_id);
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(anyhow!("job {} timed out after {:?}", job_id, timeout));
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(anyhow!("detection worker has stopped"));
                }
            }
        }
    }

    /// Closes the job channel and joins the worker.
    pub fn shutdown(&mut self) {
        self.job_tx.take();
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("Detection worker panicked");
            }
        }
    }
}

impl Drop for DetectionEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

//! Single-slot debounced job runner
//!
//!     schedule(job) ──► abort pending delay ──► sleep(delay) ──► gate.lock() ──► job()
//!
//!     Only the delay is cancellable. Once the delay has elapsed the job is handed to its own
//!     task, so a later `schedule` can no longer stop it. The gate serializes jobs: two jobs
//!     never run at the same time, and they run in the order their delays elapsed.
//!
//!     Must be used from inside a tokio runtime.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
    gate: Arc<Mutex<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            gate: Arc::new(Mutex::new(())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `job` once no other `schedule` call has happened for `delay`.
    ///
    /// Replaces any job still waiting out its delay.
    pub fn schedule<F>(&mut self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        let gate = Arc::clone(&self.gate);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(async move {
                let _guard = gate.lock().await;
                job();
            });
        }));
    }

    /// Drop the job waiting out its delay, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                log::trace!("debounce: superseding pending job");
            }
            handle.abort();
        }
    }

    /// Whether a job is still waiting out its delay.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

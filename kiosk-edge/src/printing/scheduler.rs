//! Delayed task scheduling
//!
//! Every print dispatch is an independent deferred task fired from a single
//! scheduling point. Each task gets a handle that can cancel it while it is
//! still waiting, or await its completion.

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Called outside a tokio runtime
    #[error("No async runtime to run task '{0}'")]
    NoRuntime(&'static str),
}

/// Schedules a future to run once after a delay
pub trait Scheduler: Send + Sync {
    fn schedule(
        &self,
        name: &'static str,
        delay: Duration,
        task: BoxFuture<'static, ()>,
    ) -> Result<ScheduledHandle, ScheduleError>;
}

/// Handle to one scheduled task
#[derive(Debug)]
pub struct ScheduledHandle {
    name: &'static str,
    delay: Duration,
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl ScheduledHandle {
    /// `handle` is `None` for schedulers that do not run on the tokio runtime
    pub fn new(
        name: &'static str,
        delay: Duration,
        token: CancellationToken,
        handle: Option<JoinHandle<()>>,
    ) -> Self {
        Self {
            name,
            delay,
            token,
            handle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel the task if it has not fired yet
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Wait until the task has run or was cancelled
    pub async fn join(self) {
        if let Some(handle) = self.handle
            && let Err(e) = handle.await
        {
            tracing::error!(task = %self.name, error = %e, "Scheduled task join failed");
        }
    }
}

/// Scheduler backed by the current tokio runtime and `tokio::time::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(
        &self,
        name: &'static str,
        delay: Duration,
        task: BoxFuture<'static, ()>,
    ) -> Result<ScheduledHandle, ScheduleError> {
        let runtime = Handle::try_current().map_err(|_| ScheduleError::NoRuntime(name))?;
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    tracing::debug!(task = %name, "Scheduled task cancelled");
                }
                _ = tokio::time::sleep(delay) => {
                    // Panics stay inside this task
                    if let Err(panic_info) = AssertUnwindSafe(task).catch_unwind().await {
                        let panic_msg: String = if let Some(s) = panic_info.downcast_ref::<&str>() {
                            (*s).to_string()
                        } else if let Some(s) = panic_info.downcast_ref::<String>() {
                            s.clone()
                        } else {
                            "Unknown panic".to_string()
                        };
                        tracing::error!(task = %name, panic = %panic_msg, "Scheduled task panicked");
                    }
                }
            }
        });

        tracing::debug!(task = %name, delay_ms = delay.as_millis() as u64, "Scheduled task");
        Ok(ScheduledHandle::new(name, delay, token, Some(handle)))
    }
}

use std::time::Duration;

use thiserror::Error;

/// Called exactly once when a scheduled delay has elapsed, or failed.
pub type DelayCallback = Box<dyn FnOnce(Result<(), DelayError>) + Send + 'static>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelayError {
    #[error("no async runtime is available to run the delayed task: {0}")]
    NoRuntime(String),
    #[error("delayed task failed: {0}")]
    Failed(String),
}

/// Fire-and-forget delay primitive.
///
/// `schedule` returns immediately and hands back nothing: the caller can
/// neither await nor cancel the work. If the hosting environment is frozen or
/// torn down before the delay elapses, `on_elapsed` may never run.
///
/// An implementation that cannot schedule at all may call `on_elapsed` with
/// an error before `schedule` returns. The handler then logs that error before
/// its own "after" line and before responding.
pub trait DelayScheduler: Send + Sync {
    fn schedule(&self, delay: Duration, on_elapsed: DelayCallback);
}

/// Spawns one detached Tokio task per scheduled delay.
///
/// Outside a Tokio runtime the callback receives [`DelayError::NoRuntime`]
/// synchronously. The Lambda binaries always run handlers inside
/// `#[tokio::main]`, so they never take that branch.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelayScheduler;

impl DelayScheduler for TokioDelayScheduler {
    fn schedule(&self, delay: Duration, on_elapsed: DelayCallback) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                // The join handle is dropped on purpose; the task is detached.
                drop(handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    on_elapsed(Ok(()));
                }));
            }
            Err(error) => on_elapsed(Err(DelayError::NoRuntime(error.to_string()))),
        }
    }
}

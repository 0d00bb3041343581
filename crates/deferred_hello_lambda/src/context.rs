use std::sync::Arc;
use std::time::Duration;

use crate::adapters::scheduler::{DelayScheduler, TokioDelayScheduler};
use crate::runtime::clock::{Clock, SystemClock};
use crate::runtime::contract::DEFERRED_TASK_DELAY;
use crate::runtime::counter::InvocationCounter;

/// Composition root shared by every invocation handled by one process.
///
/// Cloning is cheap and clones share the same counter, so a clone can be moved
/// into each `service_fn` call.
#[derive(Clone)]
pub struct HandlerContext {
    pub counter: Arc<InvocationCounter>,
    pub clock: Arc<dyn Clock>,
    pub scheduler: Arc<dyn DelayScheduler>,
    pub delay: Duration,
}

impl HandlerContext {
    pub fn new(clock: Arc<dyn Clock>, scheduler: Arc<dyn DelayScheduler>) -> Self {
        Self {
            counter: Arc::new(InvocationCounter::new()),
            clock,
            scheduler,
            delay: DEFERRED_TASK_DELAY,
        }
    }

    /// System clock, detached Tokio tasks, three-second delay.
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(TokioDelayScheduler))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

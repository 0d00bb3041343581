#![allow(dead_code)]

pub mod logs;
pub mod scheduler;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use deferred_hello_lambda::context::HandlerContext;
use deferred_hello_lambda::runtime::clock::{Clock, FixedClock};

use self::scheduler::ManualDelayScheduler;

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0)
        .single()
        .expect("valid start instant")
}

pub fn frozen_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(start_instant()))
}

/// Context whose delays are held until the test fires them.
pub fn manual_context(clock: Arc<dyn Clock>) -> (HandlerContext, Arc<ManualDelayScheduler>) {
    let scheduler = Arc::new(ManualDelayScheduler::default());
    let context = HandlerContext::new(clock, scheduler.clone());
    (context, scheduler)
}

/// Frozen clock that panics on every read from the `fail_from`-th onward (1-based).
pub struct FailingClock {
    reads: AtomicUsize,
    fail_from: usize,
}

impl FailingClock {
    pub fn new(fail_from: usize) -> Self {
        Self {
            reads: AtomicUsize::new(0),
            fail_from,
        }
    }
}

impl Clock for FailingClock {
    fn now(&self) -> DateTime<Utc> {
        let read = self.reads.fetch_add(1, Ordering::SeqCst) + 1;
        if read >= self.fail_from {
            panic!("clock unavailable");
        }
        start_instant()
    }
}

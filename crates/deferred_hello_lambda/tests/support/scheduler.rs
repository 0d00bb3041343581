use std::sync::Mutex;
use std::time::Duration;

use deferred_hello_lambda::adapters::scheduler::{DelayCallback, DelayError, DelayScheduler};

/// Holds scheduled callbacks until the test decides when and how they finish.
#[derive(Default)]
pub struct ManualDelayScheduler {
    pending: Mutex<Vec<(Duration, DelayCallback)>>,
}

impl ManualDelayScheduler {
    pub fn pending_len(&self) -> usize {
        self.pending.lock().expect("poisoned mutex").len()
    }

    pub fn pending_delays(&self) -> Vec<Duration> {
        self.pending
            .lock()
            .expect("poisoned mutex")
            .iter()
            .map(|(delay, _)| *delay)
            .collect()
    }

    /// Completes the most recently scheduled callback.
    pub fn fire_last(&self, outcome: Result<(), DelayError>) {
        let entry = self.pending.lock().expect("poisoned mutex").pop();
        if let Some((_, callback)) = entry {
            callback(outcome);
        }
    }

    /// Completes every pending callback in scheduling order.
    pub fn fire_all(&self, outcome: Result<(), DelayError>) {
        let entries: Vec<_> = self.pending.lock().expect("poisoned mutex").drain(..).collect();
        for (_, callback) in entries {
            callback(outcome.clone());
        }
    }
}

impl DelayScheduler for ManualDelayScheduler {
    fn schedule(&self, delay: Duration, on_elapsed: DelayCallback) {
        self.pending
            .lock()
            .expect("poisoned mutex")
            .push((delay, on_elapsed));
    }
}

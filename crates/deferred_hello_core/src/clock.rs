//! Wall-clock source for log prefixes and response timestamps.

use chrono::{DateTime, Utc};

/// Supplies the current time. Injected so tests can freeze or step time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(feature = "test-helpers")]
pub use self::test_clocks::{FixedClock, SequenceClock};

#[cfg(feature = "test-helpers")]
mod test_clocks {
    use std::sync::Mutex;

    use chrono::{DateTime, Duration, Utc};

    use super::Clock;

    /// Always returns the same instant.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Returns `start`, then `start + step`, `start + 2 * step`, ... on each call.
    #[derive(Debug)]
    pub struct SequenceClock {
        next: Mutex<DateTime<Utc>>,
        step: Duration,
    }

    impl SequenceClock {
        pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
            Self {
                next: Mutex::new(start),
                step,
            }
        }
    }

    impl Clock for SequenceClock {
        fn now(&self) -> DateTime<Utc> {
            let mut next = match self.next.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let current = *next;
            *next = current + self.step;
            current
        }
    }
}

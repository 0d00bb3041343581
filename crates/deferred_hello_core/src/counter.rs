use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime counter used to correlate log lines of one invocation.
///
/// Owned by the composition root and shared by reference; each process (and
/// each test) holds its own independent instance. Never reset.
#[derive(Debug, Default)]
pub struct InvocationCounter {
    value: AtomicU64,
}

impl InvocationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter and returns the new value. The first call yields 1.
    pub fn next_index(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Number of indexes handed out so far.
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}

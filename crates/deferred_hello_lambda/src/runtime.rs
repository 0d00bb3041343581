//! Single import boundary for the runtime-free primitives.

pub use deferred_hello_core::{clock, contract, counter, prefix};

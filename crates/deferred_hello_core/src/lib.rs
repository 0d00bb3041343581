//! Runtime-free primitives shared by the deferred-work handlers.
//!
//! This crate owns the response contract, the invocation counter, the clock
//! abstraction, and log-prefix formatting. It intentionally excludes the
//! Lambda runtime and any task scheduling.

pub mod clock;
pub mod contract;
pub mod counter;
pub mod prefix;

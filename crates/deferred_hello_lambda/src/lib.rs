//! Lambda adapters and handlers for the deferred-work demonstration.
//!
//! This crate owns runtime integration details (the delay scheduler, the two
//! request handlers, handler selection, and tracing setup). Runtime-free
//! primitives live in `deferred_hello_core` and are re-exported through
//! [`runtime`].

pub mod adapters;
pub mod config;
pub mod context;
pub mod handlers;
pub mod runtime;
pub mod telemetry;

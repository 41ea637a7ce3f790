//! Core runtime types shared across the crate.
//!
//! - [`ExecutionContext`] - cancellation and deadline carrier passed to
//!   render hooks

pub mod execution;

pub use execution::ExecutionContext;

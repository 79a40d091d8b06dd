//! Service facade over the mock store.
//!
//! These async functions stand in for a remote API: each wraps a synchronous
//! store operation in an already-resolved future. There is no artificial
//! latency, no cancellation, and no retry - failure is limited to the
//! NotFound conditions surfaced by the store.

pub mod project;
pub mod report;
pub mod user;

//! Durable local storage.
//!
//! The dashboard persists exactly one thing across restarts: the serialized
//! current-user snapshot. Everything else lives in the in-memory mock store
//! and resets with the process.

pub mod session;

pub use session::SessionStorage;

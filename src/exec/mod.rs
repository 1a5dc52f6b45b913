// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`backend`] provides the `RuntimeBackend` trait plus the invocation and
//!   outcome types that cross it.
//! - [`runner`] contains `ProcessRuntime`, the implementation used in
//!   production, which spawns the runtime with `tokio::process::Command`.

pub mod backend;
pub mod runner;

pub use backend::{RunOutcome, RuntimeBackend, RuntimeInvocation};
pub use runner::ProcessRuntime;

// src/exec/backend.rs

//! Pluggable runtime backend abstraction.
//!
//! The launcher hands a [`RuntimeInvocation`] to a `RuntimeBackend` instead
//! of spawning processes itself. Production uses [`ProcessRuntime`]; tests
//! provide a fake that records the invocation without starting anything.
//!
//! [`ProcessRuntime`]: super::runner::ProcessRuntime

use std::future::Future;
use std::path::Path;
use std::pin::Pin;

use crate::config::LaunchConfig;
use crate::errors::Result;

/// The external runtime command line for one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl RuntimeInvocation {
    /// `<runtime_program> <runtime_flag> <payload>`.
    ///
    /// The payload path is a single argument, so spaces in the temp
    /// directory survive without shell quoting.
    pub fn for_payload(cfg: &LaunchConfig, payload: &Path) -> Self {
        Self {
            program: cfg.runtime_program.clone(),
            args: vec![
                cfg.runtime_flag.clone(),
                payload.to_string_lossy().into_owned(),
            ],
        }
    }
}

/// How the runtime process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub success: bool,
}

/// Trait abstracting how the payload is executed.
pub trait RuntimeBackend: Send {
    /// Run the invocation to completion, sharing the parent's console.
    fn run(
        &mut self,
        invocation: RuntimeInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutcome>> + Send + '_>>;
}

// src/exec/runner.rs

//! Real runtime process runner.

use std::future::Future;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{LaunchError, Result};

use super::backend::{RunOutcome, RuntimeBackend, RuntimeInvocation};

/// Spawns the runtime with `tokio::process::Command` and waits for it.
///
/// The child inherits stdin, stdout and stderr, so the payload talks to the
/// user's console directly. There is no timeout and no cancellation.
#[derive(Debug, Clone, Default)]
pub struct ProcessRuntime;

impl ProcessRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl RuntimeBackend for ProcessRuntime {
    fn run(
        &mut self,
        invocation: RuntimeInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutcome>> + Send + '_>> {
        Box::pin(run_process(invocation))
    }
}

async fn run_process(invocation: RuntimeInvocation) -> Result<RunOutcome> {
    info!(
        program = %invocation.program,
        args = ?invocation.args,
        "starting runtime process"
    );

    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let mut child = cmd.spawn().map_err(|source| LaunchError::SpawnFailed {
        program: invocation.program.clone(),
        source,
    })?;

    debug!(pid = ?child.id(), "runtime process spawned");

    let status = child.wait().await.map_err(|source| LaunchError::WaitFailed {
        program: invocation.program.clone(),
        source,
    })?;

    let outcome = RunOutcome {
        exit_code: status.code(),
        success: status.success(),
    };

    info!(
        program = %invocation.program,
        exit_code = ?outcome.exit_code,
        success = outcome.success,
        "runtime process exited"
    );

    Ok(outcome)
}

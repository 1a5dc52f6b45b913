// src/launcher.rs

//! The launch sequence.
//!
//! generate path -> locate resource -> write file -> spawn runtime -> wait ->
//! cleanup, with one early exit when the resource is not bundled.

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::assets::AssetSource;
use crate::config::LaunchConfig;
use crate::console::Console;
use crate::errors::{LaunchError, Result};
use crate::exec::{RunOutcome, RuntimeBackend, RuntimeInvocation};
use crate::fs::FileSystem;
use crate::temp;

/// How a launch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The runtime ran and exited. The code is informational only.
    Completed { exit_code: Option<i32> },
    /// Writing the payload, spawning or waiting failed.
    Failed { message: String },
    /// The payload is not in the asset table; nothing was written.
    ResourceMissing { available: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReport {
    pub temp_path: PathBuf,
    pub outcome: LaunchOutcome,
}

pub struct Launcher<R: RuntimeBackend, C: Console> {
    config: LaunchConfig,
    assets: Arc<dyn AssetSource>,
    fs: Arc<dyn FileSystem>,
    runtime: R,
    console: C,
}

impl<R: RuntimeBackend, C: Console> fmt::Debug for Launcher<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Launcher")
            .field("config", &self.config)
            .field("assets", &self.assets)
            .field("fs", &self.fs)
            .finish_non_exhaustive()
    }
}

impl<R: RuntimeBackend, C: Console> Launcher<R, C> {
    pub fn new(
        config: LaunchConfig,
        assets: Arc<dyn AssetSource>,
        fs: Arc<dyn FileSystem>,
        runtime: R,
        console: C,
    ) -> Self {
        Self {
            config,
            assets,
            fs,
            runtime,
            console,
        }
    }

    pub fn runtime(&self) -> &R {
        &self.runtime
    }

    /// Run the whole sequence once.
    ///
    /// Errors are reported on the console, never returned: the launcher has
    /// no exit code of its own.
    pub async fn run(&mut self) -> LaunchReport {
        let temp_path = temp::payload_path_for(&self.config);
        debug!(path = %temp_path.display(), "temporary payload path");

        let result = match self.locate_payload() {
            Ok(payload) => self.extract_and_run(&temp_path, payload).await,
            Err(err) => Err(err),
        };

        let outcome = match result {
            Ok(run) => LaunchOutcome::Completed {
                exit_code: run.exit_code,
            },
            Err(err) => {
                let may_have_written = err.is_execution_failure();
                let outcome = self.report_failure(err);
                if !may_have_written {
                    return LaunchReport { temp_path, outcome };
                }
                outcome
            }
        };

        self.cleanup(&temp_path);

        LaunchReport { temp_path, outcome }
    }

    fn locate_payload(&self) -> Result<Box<dyn Read + Send>> {
        let name = &self.config.resource_name;
        self.assets
            .open(name)
            .ok_or_else(|| LaunchError::ResourceNotFound {
                name: name.clone(),
                available: self.assets.names(),
            })
    }

    async fn extract_and_run(
        &mut self,
        temp_path: &Path,
        payload: Box<dyn Read + Send>,
    ) -> Result<RunOutcome> {
        self.extract(temp_path, payload)?;

        let invocation = RuntimeInvocation::for_payload(&self.config, temp_path);
        let outcome = self.runtime.run(invocation).await?;

        info!(exit_code = ?outcome.exit_code, "runtime finished");
        Ok(outcome)
    }

    /// Copy the payload into `temp_path`. Both the asset stream and the file
    /// handle are closed when this returns.
    fn extract(&self, temp_path: &Path, mut payload: Box<dyn Read + Send>) -> Result<u64> {
        let written = self
            .fs
            .create_from_reader(temp_path, &mut payload)
            .map_err(|source| LaunchError::WriteFailed {
                path: temp_path.to_path_buf(),
                source,
            })?;
        debug!(path = %temp_path.display(), bytes = written, "payload extracted");
        Ok(written)
    }

    fn report_failure(&mut self, err: LaunchError) -> LaunchOutcome {
        match err {
            LaunchError::ResourceNotFound { name, available } => {
                warn!(resource = %name, ?available, "payload not bundled");
                self.report_missing_resource(&available);
                LaunchOutcome::ResourceMissing { available }
            }
            err => {
                warn!(error = %err, "launch failed");
                self.report_execution_failure(&err);
                LaunchOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }

    fn report_missing_resource(&mut self, available: &[String]) {
        let kind = self
            .config
            .temp_extension
            .trim_start_matches('.')
            .to_uppercase();
        self.console
            .line(&format!("Error: Could not find embedded {kind} resource."));
        self.console.line("Available resources:");
        for name in available {
            self.console.line(&format!(" - {name}"));
        }
        self.console.wait_for_key();
    }

    fn report_execution_failure(&mut self, err: &LaunchError) {
        self.console
            .line(&format!("Error launching {}: {err}", self.config.subject));
        self.console.line(&format!(
            "Make sure {} is installed and in your PATH.",
            self.config.runtime_label
        ));
        self.console.line("Press any key to exit...");
        self.console.wait_for_key();
    }

    /// Remove the temp payload if it is there. Failures are ignored.
    fn cleanup(&self, temp_path: &Path) {
        if self.fs.exists(temp_path) {
            let _ = self.fs.remove_file(temp_path);
        }
    }
}

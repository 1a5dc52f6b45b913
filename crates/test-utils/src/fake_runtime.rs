use std::future::Future;
use std::io;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use jarlaunch::errors::{LaunchError, Result};
use jarlaunch::exec::{RunOutcome, RuntimeBackend, RuntimeInvocation};
use jarlaunch::fs::FileSystem;

/// What the fake saw when it was asked to run something.
#[derive(Debug, Clone)]
pub struct RecordedRun {
    pub invocation: RuntimeInvocation,
    /// Contents of the payload file at invocation time, if it could be read.
    pub payload: Option<Vec<u8>>,
}

#[derive(Debug, Clone, Copy)]
enum Behaviour {
    Exit(i32),
    NotFound,
}

/// A fake runtime that:
/// - records every invocation
/// - snapshots the payload file (last argument) through the given filesystem
/// - either "exits" with a fixed code or fails like a missing executable.
pub struct FakeRuntime {
    fs: Arc<dyn FileSystem>,
    behaviour: Behaviour,
    runs: Arc<Mutex<Vec<RecordedRun>>>,
}

impl FakeRuntime {
    pub fn exiting_with(fs: Arc<dyn FileSystem>, code: i32) -> Self {
        Self {
            fs,
            behaviour: Behaviour::Exit(code),
            runs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn not_installed(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            behaviour: Behaviour::NotFound,
            runs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the recorded runs.
    pub fn runs(&self) -> Arc<Mutex<Vec<RecordedRun>>> {
        Arc::clone(&self.runs)
    }
}

impl RuntimeBackend for FakeRuntime {
    fn run(
        &mut self,
        invocation: RuntimeInvocation,
    ) -> Pin<Box<dyn Future<Output = Result<RunOutcome>> + Send + '_>> {
        let payload = invocation
            .args
            .last()
            .and_then(|p| self.fs.read(&PathBuf::from(p)).ok());
        let behaviour = self.behaviour;
        let runs = Arc::clone(&self.runs);

        Box::pin(async move {
            runs.lock().unwrap().push(RecordedRun {
                invocation: invocation.clone(),
                payload,
            });

            match behaviour {
                Behaviour::Exit(code) => Ok(RunOutcome {
                    exit_code: Some(code),
                    success: code == 0,
                }),
                Behaviour::NotFound => Err(LaunchError::SpawnFailed {
                    program: invocation.program,
                    source: io::Error::new(io::ErrorKind::NotFound, "program not found"),
                }),
            }
        })
    }
}

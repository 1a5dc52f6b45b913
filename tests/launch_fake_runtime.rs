// tests/launch_fake_runtime.rs

mod common;
use crate::common::{
    entry_count, init_tracing, launcher_with, real_fs, sample_assets, SAMPLE_PAYLOAD,
};

use std::io::{self, Read};
use std::sync::Arc;

use jarlaunch::assets::{AssetSource, MemoryAssets};
use jarlaunch::launcher::{LaunchOutcome, Launcher};
use jarlaunch_test_utils::recording_console::RecordingConsole;
use jarlaunch_test_utils::builders::LaunchConfigBuilder;
use jarlaunch_test_utils::fake_runtime::FakeRuntime;
use tempfile::TempDir;

#[tokio::test]
async fn payload_is_byte_identical_when_runtime_starts_and_removed_after() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new().temp_dir(dir.path()).build();
    let runtime = FakeRuntime::exiting_with(real_fs(), 0);
    let runs = runtime.runs();

    let (mut launcher, console) = launcher_with(cfg, sample_assets(), runtime);
    let report = launcher.run().await;

    assert_eq!(report.outcome, LaunchOutcome::Completed { exit_code: Some(0) });

    let runs = runs.lock().unwrap();
    assert_eq!(runs.len(), 1);
    let run = &runs[0];
    assert_eq!(run.invocation.program, "java");
    assert_eq!(
        run.invocation.args,
        vec![
            "-jar".to_string(),
            report.temp_path.to_string_lossy().into_owned()
        ]
    );

    let seen = run.payload.as_ref().expect("payload existed at invocation");
    assert_eq!(seen.len(), 10);
    assert_eq!(seen.as_slice(), &SAMPLE_PAYLOAD);

    assert!(!report.temp_path.exists());
    assert_eq!(entry_count(dir.path()), 0);
    assert!(console.lines().is_empty());
    assert_eq!(console.key_waits(), 0);
}

#[tokio::test]
async fn nonzero_exit_code_is_not_treated_as_failure() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new().temp_dir(dir.path()).build();

    let (mut launcher, console) =
        launcher_with(cfg, sample_assets(), FakeRuntime::exiting_with(real_fs(), 1));
    let report = launcher.run().await;

    assert_eq!(report.outcome, LaunchOutcome::Completed { exit_code: Some(1) });
    assert!(console.lines().is_empty());
    assert_eq!(entry_count(dir.path()), 0);
}

#[tokio::test]
async fn runtime_not_installed_prints_hint_and_cleans_up() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new().temp_dir(dir.path()).build();
    let runtime = FakeRuntime::not_installed(real_fs());
    let runs = runtime.runs();

    let (mut launcher, console) = launcher_with(cfg, sample_assets(), runtime);
    let report = launcher.run().await;

    assert!(matches!(report.outcome, LaunchOutcome::Failed { .. }));
    // The file was fully written before the spawn attempt.
    assert_eq!(
        runs.lock().unwrap()[0].payload.as_deref(),
        Some(&SAMPLE_PAYLOAD[..])
    );

    let lines = console.lines();
    assert!(lines[0].starts_with("Error launching game: "));
    assert_eq!(lines[1], "Make sure Java is installed and in your PATH.");
    assert_eq!(lines[2], "Press any key to exit...");
    assert_eq!(console.key_waits(), 1);

    assert!(!report.temp_path.exists());
    assert_eq!(entry_count(dir.path()), 0);
}

#[tokio::test]
async fn missing_resource_creates_no_file_and_lists_names() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new().temp_dir(dir.path()).build();
    let assets = MemoryAssets::new().with_asset("readme.txt", b"hi".to_vec());
    let runtime = FakeRuntime::exiting_with(real_fs(), 0);
    let runs = runtime.runs();

    let (mut launcher, console) = launcher_with(cfg, assets, runtime);
    let report = launcher.run().await;

    assert_eq!(
        report.outcome,
        LaunchOutcome::ResourceMissing {
            available: vec!["readme.txt".to_string()]
        }
    );
    assert_eq!(
        console.lines(),
        vec![
            "Error: Could not find embedded JAR resource.".to_string(),
            "Available resources:".to_string(),
            " - readme.txt".to_string(),
        ]
    );
    assert_eq!(console.key_waits(), 1);
    assert!(runs.lock().unwrap().is_empty());
    assert_eq!(entry_count(dir.path()), 0);
}

#[tokio::test]
async fn empty_asset_table_lists_nothing_without_crashing() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new().temp_dir(dir.path()).build();

    let (mut launcher, console) = launcher_with(
        cfg,
        MemoryAssets::new(),
        FakeRuntime::exiting_with(real_fs(), 0),
    );
    let report = launcher.run().await;

    assert_eq!(
        report.outcome,
        LaunchOutcome::ResourceMissing { available: vec![] }
    );
    assert_eq!(console.lines().len(), 2);
    assert_eq!(entry_count(dir.path()), 0);
}

#[tokio::test]
async fn unwritable_temp_dir_is_an_execution_failure() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let cfg = LaunchConfigBuilder::new().temp_dir(&missing).build();
    let runtime = FakeRuntime::exiting_with(real_fs(), 0);
    let runs = runtime.runs();

    let (mut launcher, console) = launcher_with(cfg, sample_assets(), runtime);
    let report = launcher.run().await;

    assert!(matches!(report.outcome, LaunchOutcome::Failed { .. }));
    assert!(console.contains("could not write payload"));
    assert!(console.contains("Make sure Java is installed"));
    assert!(runs.lock().unwrap().is_empty());
    assert!(!missing.exists());
}

#[tokio::test]
async fn sequential_runs_use_different_paths() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new().temp_dir(dir.path()).build();

    let (mut launcher, _console) =
        launcher_with(cfg, sample_assets(), FakeRuntime::exiting_with(real_fs(), 0));
    let first = launcher.run().await;
    let second = launcher.run().await;

    assert_ne!(first.temp_path, second.temp_path);
}

#[tokio::test]
async fn configured_resource_name_is_the_one_looked_up() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new()
        .temp_dir(dir.path())
        .resource_name("Other.jar")
        .build();
    let assets = MemoryAssets::new()
        .with_asset("Connect-4.jar", b"wrong".to_vec())
        .with_asset("Other.jar", SAMPLE_PAYLOAD.to_vec());
    let runtime = FakeRuntime::exiting_with(real_fs(), 0);
    let runs = runtime.runs();

    let (mut launcher, console) = launcher_with(cfg, assets, runtime);
    let report = launcher.run().await;

    assert_eq!(report.outcome, LaunchOutcome::Completed { exit_code: Some(0) });
    assert_eq!(
        runs.lock().unwrap()[0].payload.as_deref(),
        Some(&SAMPLE_PAYLOAD[..])
    );
    assert!(console.lines().is_empty());
}

/// Yields a few bytes, then fails: the temp file exists but is incomplete.
#[derive(Debug)]
struct TruncatedAsset;

struct TruncatedReader {
    sent: bool,
}

impl Read for TruncatedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::other("boom"));
        }
        self.sent = true;
        let n = buf.len().min(4);
        buf[..n].copy_from_slice(&SAMPLE_PAYLOAD[..n]);
        Ok(n)
    }
}

impl AssetSource for TruncatedAsset {
    fn open(&self, name: &str) -> Option<Box<dyn Read + Send>> {
        (name == "Connect-4.jar")
            .then(|| Box::new(TruncatedReader { sent: false }) as Box<dyn Read + Send>)
    }

    fn names(&self) -> Vec<String> {
        vec!["Connect-4.jar".to_string()]
    }
}

#[tokio::test]
async fn copy_failure_after_create_still_removes_partial_file() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let cfg = LaunchConfigBuilder::new().temp_dir(dir.path()).build();
    let runtime = FakeRuntime::exiting_with(real_fs(), 0);
    let runs = runtime.runs();
    let console = RecordingConsole::new();

    let mut launcher = Launcher::new(
        cfg,
        Arc::new(TruncatedAsset),
        real_fs(),
        runtime,
        console.clone(),
    );
    let report = launcher.run().await;

    match &report.outcome {
        LaunchOutcome::Failed { message } => {
            assert!(message.contains("could not write payload"), "{message}");
            assert!(message.contains("boom"), "{message}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(console.contains("Make sure Java is installed and in your PATH."));
    assert_eq!(console.key_waits(), 1);
    assert!(runs.lock().unwrap().is_empty());
    assert!(!report.temp_path.exists());
    assert_eq!(entry_count(dir.path()), 0);
}

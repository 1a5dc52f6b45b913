// src/lib.rs

pub mod assets;
pub mod cli;
pub mod config;
pub mod console;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod launcher;
pub mod logging;
pub mod temp;

use std::sync::Arc;

use tracing::{debug, info};

use crate::assets::EmbeddedAssets;
use crate::cli::CliArgs;
use crate::config::LaunchConfig;
use crate::console::TerminalConsole;
use crate::exec::ProcessRuntime;
use crate::fs::RealFileSystem;
use crate::launcher::{LaunchReport, Launcher};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the embedded asset table
/// - the real filesystem
/// - the process runtime backend
/// - the terminal console
pub async fn run(args: CliArgs) -> LaunchReport {
    debug!(?args, "jarlaunch starting");

    let mut launcher = Launcher::new(
        LaunchConfig::default(),
        Arc::new(EmbeddedAssets::new()),
        Arc::new(RealFileSystem),
        ProcessRuntime::new(),
        TerminalConsole::new(),
    );

    let report = launcher.run().await;
    info!(outcome = ?report.outcome, "launcher finished");
    report
}

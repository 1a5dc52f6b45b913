// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The launcher takes no functional options; the only flag controls how much
//! of its own logging ends up on stderr.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `jarlaunch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jarlaunch",
    version,
    about = "Extract the bundled payload and run it with the Java runtime.",
    long_about = None
)]
pub struct CliArgs {
    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `JARLAUNCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

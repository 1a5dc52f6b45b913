// src/config.rs

//! Launch constants.
//!
//! The launcher has no user-facing configuration. `LaunchConfig` only gathers
//! the fixed names it works with so that tests can point it at a scratch
//! directory or a different runtime program.

use std::path::PathBuf;

/// Logical name of the embedded payload in the asset table.
pub const DEFAULT_RESOURCE_NAME: &str = "Connect-4.jar";
/// Prefix of the temporary payload file name.
pub const DEFAULT_TEMP_PREFIX: &str = "Connect-4-";
/// Extension of the temporary payload file, matching the payload type.
pub const DEFAULT_TEMP_EXTENSION: &str = ".jar";
/// Executable resolved through `PATH`.
pub const DEFAULT_RUNTIME_PROGRAM: &str = "java";
pub const DEFAULT_RUNTIME_FLAG: &str = "-jar";
/// Human-readable runtime name used in the remediation hint.
pub const DEFAULT_RUNTIME_LABEL: &str = "Java";
/// What the payload is, for the "Error launching ..." message.
pub const DEFAULT_SUBJECT: &str = "game";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchConfig {
    pub resource_name: String,
    pub temp_prefix: String,
    pub temp_extension: String,
    pub runtime_program: String,
    pub runtime_flag: String,
    pub runtime_label: String,
    pub subject: String,
    /// Directory the temporary payload is written to.
    pub temp_dir: PathBuf,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            resource_name: DEFAULT_RESOURCE_NAME.to_string(),
            temp_prefix: DEFAULT_TEMP_PREFIX.to_string(),
            temp_extension: DEFAULT_TEMP_EXTENSION.to_string(),
            runtime_program: DEFAULT_RUNTIME_PROGRAM.to_string(),
            runtime_flag: DEFAULT_RUNTIME_FLAG.to_string(),
            runtime_label: DEFAULT_RUNTIME_LABEL.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            temp_dir: std::env::temp_dir(),
        }
    }
}

// src/temp.rs

//! Temporary payload paths.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::LaunchConfig;

/// Build `<dir>/<prefix><uuid-v4><extension>`.
///
/// A fresh v4 UUID is drawn on every call, so concurrent launcher instances
/// never write to the same file.
pub fn payload_path(dir: &Path, prefix: &str, extension: &str) -> PathBuf {
    dir.join(format!("{prefix}{}{extension}", Uuid::new_v4()))
}

/// [`payload_path`] using the directory and naming from `cfg`.
pub fn payload_path_for(cfg: &LaunchConfig) -> PathBuf {
    payload_path(&cfg.temp_dir, &cfg.temp_prefix, &cfg.temp_extension)
}

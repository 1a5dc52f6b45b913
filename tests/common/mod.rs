#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use jarlaunch::assets::MemoryAssets;
use jarlaunch::config::LaunchConfig;
use jarlaunch::exec::RuntimeBackend;
use jarlaunch::fs::{FileSystem, RealFileSystem};
use jarlaunch::launcher::Launcher;
use jarlaunch_test_utils::recording_console::RecordingConsole;

pub use jarlaunch_test_utils::init_tracing;

/// The 10-byte zip-looking blob used across the launch tests.
pub const SAMPLE_PAYLOAD: [u8; 10] = [0x50, 0x4B, 0x03, 0x04, 0x14, 0x00, 0x00, 0x00, 0x08, 0x00];

pub fn real_fs() -> Arc<dyn FileSystem> {
    Arc::new(RealFileSystem)
}

pub fn sample_assets() -> MemoryAssets {
    MemoryAssets::new().with_asset("Connect-4.jar", SAMPLE_PAYLOAD.to_vec())
}

/// Build a launcher over the real filesystem with a recording console.
pub fn launcher_with<R: RuntimeBackend>(
    config: LaunchConfig,
    assets: MemoryAssets,
    runtime: R,
) -> (Launcher<R, RecordingConsole>, RecordingConsole) {
    let console = RecordingConsole::new();
    let launcher = Launcher::new(config, Arc::new(assets), real_fs(), runtime, console.clone());
    (launcher, console)
}

/// Number of entries in `dir`.
pub fn entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

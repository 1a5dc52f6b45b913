use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[path = "build/asset_table.rs"]
mod asset_table;

/// Payload embedded when `JARLAUNCH_PAYLOAD` is not set.
const DEFAULT_PAYLOAD: &str = "assets/Connect-4.jar";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=build/asset_table.rs");
    // Directory, so dropping a payload into it later triggers a rerun.
    println!("cargo:rerun-if-changed=assets");
    println!("cargo:rerun-if-env-changed=JARLAUNCH_PAYLOAD");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let out_dir = env::var("OUT_DIR").unwrap();

    let payload = match env::var("JARLAUNCH_PAYLOAD") {
        Ok(p) if !p.trim().is_empty() => Some(PathBuf::from(p)),
        _ => {
            let default = Path::new(&manifest_dir).join(DEFAULT_PAYLOAD);
            default.is_file().then_some(default)
        }
    };

    let mut embedded = None;
    if let Some(path) = payload {
        match fs::canonicalize(&path) {
            Ok(abs) if abs.is_file() => {
                println!("cargo:rerun-if-changed={}", abs.display());
                embedded = Some(abs);
            }
            _ => {
                // Never fail the build; the launcher reports the missing asset at runtime.
                println!(
                    "cargo:warning=jarlaunch: payload {} not found, building without it",
                    path.display()
                );
            }
        }
    }

    let dest_path = Path::new(&out_dir).join("embedded_assets.rs");
    fs::write(dest_path, asset_table::render(embedded.as_deref())).unwrap();
}

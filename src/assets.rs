// src/assets.rs

//! Build-time asset table.
//!
//! `build.rs` generates `EMBEDDED_ASSETS`, a static list of
//! `(logical name, bytes)` pairs linked into the binary. The launcher only
//! sees the [`AssetSource`] trait, so tests can swap in [`MemoryAssets`].

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::io::{Cursor, Read};

include!(concat!(env!("OUT_DIR"), "/embedded_assets.rs"));

/// Named, read-only blobs bundled with the launcher.
pub trait AssetSource: Send + Sync + Debug {
    /// Open the asset with this exact name, or `None` if it is not bundled.
    fn open(&self, name: &str) -> Option<Box<dyn Read + Send>>;

    /// Names of every bundled asset, in table order.
    fn names(&self) -> Vec<String>;
}

/// Assets compiled into this binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAssets {
    table: &'static [(&'static str, &'static [u8])],
}

impl EmbeddedAssets {
    pub fn new() -> Self {
        Self {
            table: EMBEDDED_ASSETS,
        }
    }
}

impl Default for EmbeddedAssets {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetSource for EmbeddedAssets {
    fn open(&self, name: &str) -> Option<Box<dyn Read + Send>> {
        self.table
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, bytes)| Box::new(Cursor::new(*bytes)) as Box<dyn Read + Send>)
    }

    fn names(&self) -> Vec<String> {
        self.table.iter().map(|(n, _)| n.to_string()).collect()
    }
}

/// In-memory asset table.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.entries.insert(name.into(), bytes.into());
        self
    }
}

impl AssetSource for MemoryAssets {
    fn open(&self, name: &str) -> Option<Box<dyn Read + Send>> {
        self.entries
            .get(name)
            .map(|bytes| Box::new(Cursor::new(bytes.clone())) as Box<dyn Read + Send>)
    }

    fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

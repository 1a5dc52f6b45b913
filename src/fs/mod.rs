// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub mod mock;

/// Abstract filesystem interface for the few operations the launcher needs.
pub trait FileSystem: Send + Sync + Debug {
    /// Create (or truncate) `path` and copy everything from `reader` into it.
    /// Returns the number of bytes written.
    fn create_from_reader(&self, path: &Path, reader: &mut dyn Read) -> io::Result<u64>;
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn exists(&self, path: &Path) -> bool;
    fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn create_from_reader(&self, path: &Path, reader: &mut dyn Read) -> io::Result<u64> {
        let mut file = fs::File::create(path)?;
        let written = io::copy(reader, &mut file)?;
        file.sync_all()?;
        Ok(written)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

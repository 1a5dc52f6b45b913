// src/fs/mock.rs

use super::FileSystem;
use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    files: HashMap<PathBuf, Vec<u8>>,
    fail_writes: bool,
    fail_removes: bool,
    removed: Vec<PathBuf>,
}

/// In-memory filesystem. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Make every `create_from_reader` fail with a permission error.
    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }

    /// Make every `remove_file` fail, leaving the file in place.
    pub fn fail_removes(&self) {
        self.state.lock().unwrap().fail_removes = true;
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().files.keys().cloned().collect()
    }

    /// Paths successfully removed, in order.
    pub fn removed(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().removed.clone()
    }
}

impl FileSystem for MockFileSystem {
    fn create_from_reader(&self, path: &Path, reader: &mut dyn Read) -> io::Result<u64> {
        if self.state.lock().unwrap().fail_writes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write denied: {}", path.display()),
            ));
        }

        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        let written = buf.len() as u64;
        self.add_file(path, buf);
        Ok(written)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let state = self.state.lock().unwrap();
        state.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("file not found: {}", path.display()))
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_removes {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("remove denied: {}", path.display()),
            ));
        }
        match state.files.remove(path) {
            Some(_) => {
                state.removed.push(path.to_path_buf());
                Ok(())
            }
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {}", path.display()),
            )),
        }
    }
}

use std::sync::{Arc, Mutex};

use jarlaunch::console::Console;

#[derive(Debug, Default)]
struct Recorded {
    lines: Vec<String>,
    key_waits: usize,
}

/// Console that records lines and key waits instead of touching the terminal.
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap().lines.clone()
    }

    pub fn key_waits(&self) -> usize {
        self.inner.lock().unwrap().key_waits
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl Console for RecordingConsole {
    fn line(&mut self, text: &str) {
        self.inner.lock().unwrap().lines.push(text.to_string());
    }

    fn wait_for_key(&mut self) {
        self.inner.lock().unwrap().key_waits += 1;
    }
}

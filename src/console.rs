// src/console.rs

//! User-facing console output and the "press any key" halt.
//!
//! Diagnostics that the user must see go through a [`Console`] rather than
//! `tracing`, because logging is quiet by default and goes to stderr.

use std::io::{self, Read, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing::debug;

pub trait Console: Send {
    /// Write one diagnostic line to standard output.
    fn line(&mut self, text: &str);

    /// Block until the user presses a key.
    fn wait_for_key(&mut self);
}

/// The real terminal.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn line(&mut self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    fn wait_for_key(&mut self) {
        if enable_raw_mode().is_ok() {
            let res = read_key_press();
            let _ = disable_raw_mode();
            if let Err(e) = res {
                debug!(error = %e, "reading key press failed");
            }
            return;
        }

        // Not a terminal: a single byte (or EOF) from stdin ends the wait.
        let mut byte = [0u8; 1];
        if let Err(e) = io::stdin().read(&mut byte) {
            debug!(error = %e, "reading stdin failed");
        }
    }
}

fn read_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

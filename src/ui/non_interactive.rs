//! Plain-text UI for pipes, CI and headless environments.

use super::{command_label, summary_label, OutputMode, UserInterface};
use crate::orchestrator::BatchSummary;

/// Unstyled output. Warnings and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn skipped(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("○ {}", msg);
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("=== {} ===", title);
        }
    }

    fn show_item(&mut self, name: &str, current: usize, total: usize) {
        if self.mode.shows_progress() {
            println!("[{}/{}] {}", current, total, name);
        }
    }

    fn show_command(&mut self, command: &str, dry_run: bool) {
        if dry_run || self.mode.shows_progress() {
            println!("  {}", command_label(command, dry_run));
        }
    }

    fn show_summary(&mut self, summary: &BatchSummary) {
        println!("{}", summary_label(summary));
    }
}

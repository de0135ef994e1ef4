//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use ffdeps::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Fetching");
//! ui.success("LIBOPUS fetched");
//!
//! assert!(ui.has_message("Fetching"));
//! assert!(ui.has_success("LIBOPUS"));
//! ```

use super::{command_label, OutputMode, UserInterface};
use crate::orchestrator::BatchSummary;

/// Captures every UI call.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    skips: Vec<String>,
    headers: Vec<String>,
    items: Vec<(String, usize, usize)>,
    commands: Vec<String>,
    summaries: Vec<BatchSummary>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn skips(&self) -> &[String] {
        &self.skips
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Announced items as (name, current, total).
    pub fn items(&self) -> &[(String, usize, usize)] {
        &self.items
    }

    /// Commands as labelled for display (`$ ...` or `Would run: ...`).
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn summaries(&self) -> &[BatchSummary] {
        &self.summaries
    }

    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn skipped(&mut self, msg: &str) {
        self.skips.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_item(&mut self, name: &str, current: usize, total: usize) {
        self.items.push((name.to_string(), current, total));
    }

    fn show_command(&mut self, command: &str, dry_run: bool) {
        self.commands.push(command_label(command, dry_run));
    }

    fn show_summary(&mut self, summary: &BatchSummary) {
        self.summaries.push(summary.clone());
    }
}

//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait the orchestrator and commands report through
//! - [`TerminalUI`] for styled terminal output
//! - [`NonInteractiveUI`] for pipes, CI and headless use
//! - [`MockUI`] capturing everything for tests
//! - [`Table`] for listings
//!
//! # Example
//!
//! ```
//! use ffdeps::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Fetching dependencies");
//! ui.success("LIBOPUS fetched");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, FfdepsTheme};

use crate::orchestrator::BatchSummary;

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Display a non-warning skip (e.g. already fetched).
    fn skipped(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Announce the item about to be processed ("[2/5] LIBX264").
    fn show_item(&mut self, name: &str, current: usize, total: usize);

    /// Show a command about to run, or one a dry run would have run.
    ///
    /// Dry-run commands are shown in every output mode.
    fn show_command(&mut self, command: &str, dry_run: bool);

    /// Show the end-of-batch summary. Always shown.
    fn show_summary(&mut self, summary: &BatchSummary);
}

/// Text for a command line, as shown to the user.
pub fn command_label(command: &str, dry_run: bool) -> String {
    if dry_run {
        format!("Would run: {}", command)
    } else {
        format!("$ {}", command)
    }
}

/// Headline for a batch summary.
pub fn summary_label(summary: &BatchSummary) -> String {
    let mut op = summary.operation.to_string();
    if let Some(first) = op.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    format!("{} summary: {}", op, summary.counts_line())
}

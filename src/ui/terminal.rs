//! Styled terminal UI.

use console::Term;
use std::io::Write;

use super::{
    command_label, should_use_colors, summary_label, FfdepsTheme, NonInteractiveUI, OutputMode,
    UserInterface,
};
use crate::orchestrator::BatchSummary;

/// Terminal UI with colors and symbols.
pub struct TerminalUI {
    term: Term,
    theme: FfdepsTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            FfdepsTheme::new()
        } else {
            FfdepsTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn skipped(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "{}", self.theme.format_skipped(msg)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_item(&mut self, name: &str, current: usize, total: usize) {
        if self.mode.shows_progress() {
            writeln!(
                self.term,
                "{}",
                self.theme.format_item(name, current, total)
            )
            .ok();
        }
    }

    fn show_command(&mut self, command: &str, dry_run: bool) {
        if dry_run || self.mode.shows_progress() {
            writeln!(
                self.term,
                "{}",
                self.theme.format_command(&command_label(command, dry_run))
            )
            .ok();
        }
    }

    fn show_summary(&mut self, summary: &BatchSummary) {
        let line = summary_label(summary);
        let styled = if summary.is_success() {
            self.theme.format_success(&line)
        } else {
            self.theme.format_error(&line)
        };
        writeln!(self.term, "\n{}", styled).ok();
    }
}

/// Create the UI for the current environment.
///
/// Falls back to [`NonInteractiveUI`] when stdout is not a terminal.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}

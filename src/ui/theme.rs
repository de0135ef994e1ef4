//! Visual theme and styling.

use console::Style;

/// ffdeps's visual theme.
#[derive(Debug, Clone)]
pub struct FfdepsTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for item counters (dim).
    pub counter: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
}

impl Default for FfdepsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FfdepsTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            counter: Style::new().dim(),
            command: Style::new().dim().italic(),
            key: Style::new().bold(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            counter: Style::new(),
            command: Style::new(),
            key: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format an item line, e.g. `[2/5] LIBX264`.
    pub fn format_item(&self, name: &str, current: usize, total: usize) -> String {
        format!(
            "{} {}",
            self.counter.apply_to(format!("[{}/{}]", current, total)),
            self.highlight.apply_to(name)
        )
    }

    pub fn format_command(&self, label: &str) -> String {
        format!("  {}", self.command.apply_to(label))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▶"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_status_lines() {
        let theme = FfdepsTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
        assert_eq!(theme.format_error("broken"), "✗ broken");
        assert_eq!(theme.format_skipped("later"), "○ later");
    }

    #[test]
    fn theme_formats_item_counter() {
        let theme = FfdepsTheme::plain();
        assert_eq!(theme.format_item("LIBX264", 2, 5), "[2/5] LIBX264");
    }

    #[test]
    fn theme_indents_commands() {
        let theme = FfdepsTheme::plain();
        assert_eq!(theme.format_command("$ git pull"), "  $ git pull");
    }

    #[test]
    fn theme_formats_header() {
        let theme = FfdepsTheme::plain();
        let msg = theme.format_header("Fetching");
        assert!(msg.contains("Fetching"));
        assert!(msg.contains("▶"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = FfdepsTheme::default();
        let new = FfdepsTheme::new();
        assert_eq!(default.format_success("test"), new.format_success("test"));
    }
}

//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the global flags every command shares
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, Settings};
use crate::configure::BuildEnvironment;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Global flags shared by every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub source_tree: PathBuf,
    pub config_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl CommandContext {
    pub fn new(source_tree: &Path) -> Self {
        Self {
            source_tree: source_tree.to_path_buf(),
            config_path: None,
            dry_run: false,
        }
    }

    /// Load `ffdeps.yml` and merge it with command-line build inputs.
    pub fn settings(&self, cli_build: BuildEnvironment) -> Result<Settings> {
        let config = load_config(&self.source_tree, self.config_path.as_deref())?;
        Ok(Settings::resolve(&self.source_tree, config, cli_build))
    }

    /// The catalog selected by `settings`.
    pub fn catalog(&self, settings: &Settings) -> Result<Catalog> {
        Catalog::load(settings.catalog_dir.as_deref())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given source tree.
    pub fn new(source_tree: PathBuf) -> Self {
        Self {
            context: CommandContext::new(&source_tree),
        }
    }

    /// Get the source tree path.
    pub fn source_tree(&self) -> &Path {
        &self.context.source_tree
    }

    /// Dispatch and execute a command.
    ///
    /// Global flags from `cli` are folded into the shared context first.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = CommandContext {
            config_path: cli.config.clone(),
            dry_run: cli.dry_run,
            ..self.context.clone()
        };

        match &cli.command {
            Commands::Fetch(args) => {
                let cmd = super::fetch::FetchCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Commands::Update(args) => {
                let cmd = super::update::UpdateCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Commands::Compile(args) => {
                let cmd = super::compile::CompileCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Commands::Show(args) => {
                let cmd = super::show::ShowCommand::new(context, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FfdepsError;
    use crate::ui::MockUI;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.source_tree(), Path::new("/test"));
    }

    #[test]
    fn context_settings_reads_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ffdeps.yml"), "repository_root: vendor").unwrap();

        let settings = CommandContext::new(temp.path())
            .settings(BuildEnvironment::default())
            .unwrap();
        assert_eq!(settings.repository_root, temp.path().join("vendor"));
    }

    #[test]
    fn dispatch_passes_config_override() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.yml");
        let cli = Cli::try_parse_from([
            "ffdeps",
            "--config",
            missing.to_str().unwrap(),
            "list",
        ])
        .unwrap();

        let dispatcher = CommandDispatcher::new(temp.path().to_path_buf());
        let mut ui = MockUI::new();
        let result = dispatcher.dispatch(&cli, &mut ui);
        assert!(matches!(result, Err(FfdepsError::ConfigNotFound { .. })));
    }
}

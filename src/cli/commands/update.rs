//! Update command implementation.
//!
//! The `ffdeps update` command brings existing checkouts up to date.

use crate::cli::args::SelectionArgs;
use crate::configure::BuildEnvironment;
use crate::error::Result;
use crate::ui::UserInterface;

use super::batch::{self, PRECONDITION_FAILED};
use super::dispatcher::{Command, CommandContext, CommandResult};

/// The update command implementation.
pub struct UpdateCommand {
    context: CommandContext,
    args: SelectionArgs,
}

impl UpdateCommand {
    /// Create a new update command.
    pub fn new(context: CommandContext, args: SelectionArgs) -> Self {
        Self { context, args }
    }
}

impl Command for UpdateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(prepared) = batch::prepare(&self.context, BuildEnvironment::default(), ui)? else {
            return Ok(CommandResult::failure(PRECONDITION_FAILED));
        };

        ui.show_header("Updating dependencies");
        Ok(batch::run(&self.context, &prepared, ui, |orchestrator, ui| {
            let names = batch::selected_names(&self.args, orchestrator);
            orchestrator.update(&names, ui)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::{ItemOutcome, SkipReason};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn source_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("configure"), "#!/bin/sh\n").unwrap();
        temp
    }

    fn args(names: &[&str]) -> SelectionArgs {
        SelectionArgs {
            names: names.iter().map(|s| s.to_string()).collect(),
            all: false,
        }
    }

    #[test]
    fn update_without_build_script_exits_2() {
        let temp = TempDir::new().unwrap();
        let cmd = UpdateCommand::new(CommandContext::new(temp.path()), args(&["libx264"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn missing_checkout_is_skipped() {
        let temp = source_tree();
        let cmd = UpdateCommand::new(CommandContext::new(temp.path()), args(&["libx264"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        let summary = &ui.summaries()[0];
        assert!(matches!(
            summary.outcome("LIBX264"),
            Some(ItemOutcome::Skipped(SkipReason::NotFetched { .. }))
        ));
    }

    #[test]
    fn dry_run_runs_update_in_checkout() {
        let temp = source_tree();
        fs::create_dir_all(temp.path().join("deps").join("libx264")).unwrap();
        let context = CommandContext {
            dry_run: true,
            ..CommandContext::new(temp.path())
        };
        let cmd = UpdateCommand::new(context, args(&["libx264"]));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.commands().len(), 1);
        assert!(ui.commands()[0].starts_with("Would run: git pull (in "));
        assert!(ui.commands()[0].contains("libx264"));
    }
}

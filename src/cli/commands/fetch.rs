//! Fetch command implementation.
//!
//! The `ffdeps fetch` command checks out fresh copies of dependencies.

use crate::cli::args::SelectionArgs;
use crate::configure::BuildEnvironment;
use crate::error::Result;
use crate::ui::UserInterface;

use super::batch::{self, PRECONDITION_FAILED};
use super::dispatcher::{Command, CommandContext, CommandResult};

/// The fetch command implementation.
pub struct FetchCommand {
    context: CommandContext,
    args: SelectionArgs,
}

impl FetchCommand {
    /// Create a new fetch command.
    pub fn new(context: CommandContext, args: SelectionArgs) -> Self {
        Self { context, args }
    }
}

impl Command for FetchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(prepared) = batch::prepare(&self.context, BuildEnvironment::default(), ui)? else {
            return Ok(CommandResult::failure(PRECONDITION_FAILED));
        };

        ui.show_header("Fetching dependencies");
        Ok(batch::run(&self.context, &prepared, ui, |orchestrator, ui| {
            let names = batch::selected_names(&self.args, orchestrator);
            orchestrator.fetch(&names, ui)
        }))
    }
}

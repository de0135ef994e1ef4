//! Compile command implementation.
//!
//! The `ffdeps compile` command runs each library's configure script with
//! the requested flags and toolchain inputs.

use crate::cli::args::CompileArgs;
use crate::configure::CommandRequest;
use crate::error::Result;
use crate::ui::UserInterface;

use super::batch::{self, PRECONDITION_FAILED};
use super::dispatcher::{Command, CommandContext, CommandResult};

/// The compile command implementation.
pub struct CompileCommand {
    context: CommandContext,
    args: CompileArgs,
}

impl CompileCommand {
    /// Create a new compile command.
    pub fn new(context: CommandContext, args: CompileArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CompileCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let request = match CommandRequest::from_cli(&self.args.flags, &self.args.assignments) {
            Ok(request) => request,
            Err(message) => {
                ui.error(&format!("Invalid --with value: {}", message));
                return Ok(CommandResult::failure(PRECONDITION_FAILED));
            }
        };

        let Some(prepared) = batch::prepare(&self.context, self.args.build_environment(), ui)?
        else {
            return Ok(CommandResult::failure(PRECONDITION_FAILED));
        };

        let env = prepared.settings.build.clone();
        ui.show_header("Configuring dependencies");
        Ok(batch::run(&self.context, &prepared, ui, |orchestrator, ui| {
            orchestrator.compile(&self.args.names, &request, &env, ui)
        }))
    }
}

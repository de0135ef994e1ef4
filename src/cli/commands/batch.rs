//! Shared plumbing for the fetch, update and compile commands.

use crate::catalog::Catalog;
use crate::cli::args::SelectionArgs;
use crate::config::Settings;
use crate::configure::BuildEnvironment;
use crate::error::Result;
use crate::orchestrator::{
    BatchSummary, CancellationToken, Orchestrator, OrchestratorOptions, ShellRunner,
};
use crate::ui::UserInterface;

use super::dispatcher::{CommandContext, CommandResult};

/// Exit code when the source tree fails its precondition checks.
pub const PRECONDITION_FAILED: i32 = 2;

/// Exit code when at least one item in a batch failed.
pub const BATCH_FAILED: i32 = 1;

/// Settings and catalog for a batch, after the source tree was checked.
pub struct Prepared {
    pub settings: Settings,
    pub catalog: Catalog,
}

/// Resolve settings, check the build script and load the catalog.
///
/// Returns `Ok(None)` after reporting a missing build script.
pub fn prepare(
    context: &CommandContext,
    cli_build: BuildEnvironment,
    ui: &mut dyn UserInterface,
) -> Result<Option<Prepared>> {
    let settings = context.settings(cli_build)?;
    if let Err(e) = settings.ensure_build_script() {
        ui.error(&format!(
            "{}. Run ffdeps from an FFmpeg source tree or pass --source-tree.",
            e
        ));
        return Ok(None);
    }

    let catalog = context.catalog(&settings)?;
    tracing::debug!(
        version = catalog.version(),
        libraries = catalog.registry().len(),
        "catalog loaded"
    );
    Ok(Some(Prepared { settings, catalog }))
}

/// Run one orchestrator batch and turn its summary into a result.
pub fn run<F>(
    context: &CommandContext,
    prepared: &Prepared,
    ui: &mut dyn UserInterface,
    batch: F,
) -> CommandResult
where
    F: FnOnce(&mut Orchestrator<'_>, &mut dyn UserInterface) -> BatchSummary,
{
    let capture = !ui.output_mode().shows_command_output();
    let mut runner = ShellRunner::new(CancellationToken::new(), capture);
    let options = OrchestratorOptions {
        repository_root: prepared.settings.repository_root.clone(),
        dry_run: context.dry_run,
    };
    let mut orchestrator = Orchestrator::new(&prepared.catalog, &mut runner, options);

    let summary = batch(&mut orchestrator, &mut *ui);
    finish(&summary, ui)
}

/// Names a selection covers.
pub fn selected_names(args: &SelectionArgs, orchestrator: &Orchestrator<'_>) -> Vec<String> {
    if args.all {
        orchestrator.all_names()
    } else {
        args.names.clone()
    }
}

fn finish(summary: &BatchSummary, ui: &mut dyn UserInterface) -> CommandResult {
    ui.show_summary(summary);
    if summary.is_success() {
        CommandResult::success()
    } else {
        CommandResult::failure(BATCH_FAILED)
    }
}

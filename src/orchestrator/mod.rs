//! Batch fetch, update and compile over catalog entries.
//!
//! Items are processed one at a time in request order. Per-item problems
//! (unknown names, unusable descriptors, failing commands) become
//! [`ItemOutcome`] values and never stop the batch.
//!
//! # Example
//!
//! ```
//! use ffdeps::catalog::Catalog;
//! use ffdeps::orchestrator::{
//!     CancellationToken, Orchestrator, OrchestratorOptions, ShellRunner,
//! };
//! use ffdeps::ui::{MockUI, UserInterface};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let mut runner = ShellRunner::new(CancellationToken::new(), true);
//! let options = OrchestratorOptions {
//!     repository_root: std::env::temp_dir().join("ffdeps-doc-deps"),
//!     dry_run: true,
//! };
//! let mut orchestrator = Orchestrator::new(&catalog, &mut runner, options);
//! let mut ui = MockUI::new();
//!
//! let summary = orchestrator.fetch(&["libbs2b".to_string()], &mut ui);
//! assert_eq!(summary.dry_runs(), 1);
//! assert!(ui.commands()[0].contains("svn co -r 175"));
//! ```

pub mod outcome;
pub mod runner;
pub mod workdir;

pub use outcome::{BatchSummary, FailureReason, ItemOutcome, Operation, SkipReason};
pub use runner::{CancellationToken, CommandRunner, ShellRunner};
pub use workdir::WorkingDirGuard;

use crate::catalog::{canonical_name, Catalog, Invocation, LibraryDescriptor, UsabilityGap};
use crate::configure::{BuildEnvironment, CommandRequest, ConfigCommandBuilder};
use crate::error::FfdepsError;
use crate::ui::UserInterface;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialises tests that change the process working directory.
#[cfg(test)]
pub(crate) static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Lines of captured stderr shown for a failing command.
const STDERR_TAIL_LINES: usize = 10;

/// Settings for one orchestrator run.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorOptions {
    /// Directory dependency checkouts live under.
    pub repository_root: PathBuf,
    /// Report commands instead of running them.
    pub dry_run: bool,
}

/// Drives fetch, update and compile batches.
pub struct Orchestrator<'a> {
    catalog: &'a Catalog,
    runner: &'a mut dyn CommandRunner,
    options: OrchestratorOptions,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        catalog: &'a Catalog,
        runner: &'a mut dyn CommandRunner,
        options: OrchestratorOptions,
    ) -> Self {
        Self {
            catalog,
            runner,
            options,
        }
    }

    /// Fetch fresh copies of the named dependencies.
    pub fn fetch(&mut self, names: &[String], ui: &mut dyn UserInterface) -> BatchSummary {
        self.run_batch(Operation::Fetch, names, ui, |this, name, descriptor, ui| {
            this.fetch_one(name, descriptor, ui)
        })
    }

    /// Update existing checkouts in place.
    pub fn update(&mut self, names: &[String], ui: &mut dyn UserInterface) -> BatchSummary {
        self.run_batch(Operation::Update, names, ui, |this, name, descriptor, ui| {
            this.update_one(name, descriptor, ui)
        })
    }

    /// Run each library's configure command inside its build directory.
    pub fn compile(
        &mut self,
        names: &[String],
        request: &CommandRequest,
        env: &BuildEnvironment,
        ui: &mut dyn UserInterface,
    ) -> BatchSummary {
        self.run_batch(Operation::Compile, names, ui, |this, name, descriptor, ui| {
            this.compile_one(name, descriptor, request, env, ui)
        })
    }

    /// Every catalog entry, in catalog order.
    pub fn all_names(&self) -> Vec<String> {
        self.catalog
            .registry()
            .all_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    fn run_batch<F>(
        &mut self,
        operation: Operation,
        names: &[String],
        ui: &mut dyn UserInterface,
        mut process: F,
    ) -> BatchSummary
    where
        F: FnMut(&mut Self, &str, &LibraryDescriptor, &mut dyn UserInterface) -> ItemOutcome,
    {
        let mut summary = BatchSummary::new(operation);
        let total = names.len();

        for (index, requested) in names.iter().enumerate() {
            let name = canonical_name(requested);
            ui.show_item(&name, index + 1, total);

            let catalog = self.catalog;
            let outcome = match self.resolve(catalog, &name) {
                Ok(descriptor) => process(self, &name, descriptor, ui),
                Err(skip) => skip,
            };
            report(operation, &name, &outcome, ui);
            summary.push(name, outcome);
        }

        summary
    }

    /// Look a name up and check that it can be acted on.
    fn resolve<'c>(
        &self,
        catalog: &'c Catalog,
        name: &str,
    ) -> Result<&'c LibraryDescriptor, ItemOutcome> {
        let registry = catalog.registry();
        match registry.lookup_usable(name) {
            Ok(descriptor) => Ok(descriptor),
            Err(e @ FfdepsError::UnusableDescriptor { .. }) => {
                tracing::debug!(library = %name, error = %e, "skipping");
                let gaps = registry
                    .lookup(name)
                    .map(LibraryDescriptor::usability_gaps)
                    .unwrap_or_default();
                Err(ItemOutcome::Skipped(SkipReason::Unusable { gaps }))
            }
            Err(e) => {
                tracing::debug!(library = %name, error = %e, "skipping");
                Err(ItemOutcome::Skipped(SkipReason::UnknownDependency))
            }
        }
    }

    fn checkout_path(&self, descriptor: &LibraryDescriptor) -> PathBuf {
        match descriptor.local_path.path() {
            Some(path) => self.options.repository_root.join(path),
            None => self.options.repository_root.clone(),
        }
    }

    fn fetch_one(
        &mut self,
        name: &str,
        descriptor: &LibraryDescriptor,
        ui: &mut dyn UserInterface,
    ) -> ItemOutcome {
        let dest = self.checkout_path(descriptor);
        if dest.exists() {
            return ItemOutcome::Skipped(SkipReason::AlreadyFetched { path: dest });
        }

        let command = match descriptor.fetch_command() {
            Invocation::Exec(command) => command,
            Invocation::Diagnostic(_) => {
                return ItemOutcome::Skipped(SkipReason::Unusable {
                    gaps: vec![UsabilityGap::UndeterminedTool],
                })
            }
        };
        tracing::debug!(library = %name, command = %command, "fetch");

        if self.options.dry_run {
            ui.show_command(&command, true);
            return ItemOutcome::DryRun {
                commands: vec![command],
            };
        }

        // The fetch command names its destination relative to the root.
        let parent = dest
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.options.repository_root.clone());
        if let Err(e) = fs::create_dir_all(&parent) {
            return ItemOutcome::Failed(FailureReason::Io {
                message: format!("cannot create {}: {}", parent.display(), e),
            });
        }

        let root = self.options.repository_root.clone();
        self.run_sequence(&[command], Some(&root), ui)
    }

    fn update_one(
        &mut self,
        name: &str,
        descriptor: &LibraryDescriptor,
        ui: &mut dyn UserInterface,
    ) -> ItemOutcome {
        let dest = self.checkout_path(descriptor);
        if !dest.exists() {
            return ItemOutcome::Skipped(SkipReason::NotFetched { path: dest });
        }

        let invocations = descriptor.update_commands();
        if invocations.is_empty() || invocations.iter().any(Invocation::is_diagnostic) {
            return ItemOutcome::Skipped(SkipReason::UpdateUnsupported {
                tool: descriptor.tool_kind,
            });
        }
        let commands: Vec<String> = invocations.iter().map(Invocation::command_line).collect();
        tracing::debug!(library = %name, commands = ?commands, "update");

        if self.options.dry_run {
            for command in &commands {
                ui.show_command(&format!("{} (in {})", command, dest.display()), true);
            }
            return ItemOutcome::DryRun { commands };
        }

        self.run_sequence(&commands, Some(&dest), ui)
    }

    fn compile_one(
        &mut self,
        name: &str,
        descriptor: &LibraryDescriptor,
        request: &CommandRequest,
        env: &BuildEnvironment,
        ui: &mut dyn UserInterface,
    ) -> ItemOutcome {
        let catalog = self.catalog;
        let Some(profile) = catalog.profile(name) else {
            return ItemOutcome::Skipped(SkipReason::NoBuildProfile);
        };

        let command = match ConfigCommandBuilder::new(profile).build(request, env) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(library = %name, error = %e, "configure command rejected");
                return ItemOutcome::Failed(FailureReason::Configuration {
                    message: e.to_string(),
                });
            }
        };

        let build_dir = self.checkout_path(descriptor).join(&profile.build_dir);
        if !build_dir.is_dir() {
            return ItemOutcome::Skipped(SkipReason::NotFetched { path: build_dir });
        }

        if self.options.dry_run {
            ui.show_command(&format!("{} (in {})", command, build_dir.display()), true);
            return ItemOutcome::DryRun {
                commands: vec![command],
            };
        }

        let _guard = match WorkingDirGuard::enter(&build_dir) {
            Ok(guard) => guard,
            Err(e) => {
                return ItemOutcome::Failed(FailureReason::Io {
                    message: format!("cannot enter {}: {}", build_dir.display(), e),
                })
            }
        };
        self.run_sequence(&[command], None, ui)
    }

    /// Run commands in order, stopping at the first failure.
    fn run_sequence(
        &mut self,
        commands: &[String],
        cwd: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> ItemOutcome {
        for (completed_steps, command) in commands.iter().enumerate() {
            ui.show_command(command, false);
            match self.runner.run(command, cwd) {
                Ok(result) if result.success => {}
                Ok(result) => {
                    for line in result.stderr_tail(STDERR_TAIL_LINES) {
                        ui.message(&format!("    {}", line));
                    }
                    return ItemOutcome::Failed(FailureReason::Command {
                        command: command.clone(),
                        exit_code: result.exit_code,
                        completed_steps,
                    });
                }
                Err(FfdepsError::Cancelled { .. }) => {
                    return ItemOutcome::Failed(FailureReason::Cancelled);
                }
                Err(FfdepsError::CommandFailed { code, .. }) => {
                    return ItemOutcome::Failed(FailureReason::Command {
                        command: command.clone(),
                        exit_code: code,
                        completed_steps,
                    });
                }
                Err(e) => {
                    return ItemOutcome::Failed(FailureReason::Io {
                        message: e.to_string(),
                    });
                }
            }
        }

        ItemOutcome::Succeeded {
            commands: commands.to_vec(),
        }
    }
}

/// Report one finished item.
fn report(operation: Operation, name: &str, outcome: &ItemOutcome, ui: &mut dyn UserInterface) {
    match outcome {
        ItemOutcome::Succeeded { .. } => {
            ui.success(&format!("{} {}", name, operation.past_tense()));
        }
        ItemOutcome::DryRun { .. } => {}
        ItemOutcome::Skipped(
            reason @ (SkipReason::UnknownDependency | SkipReason::Unusable { .. }),
        ) => {
            ui.warning(&format!("{}: {}, skipping", name, reason));
        }
        ItemOutcome::Skipped(reason) => {
            ui.skipped(&format!("{}: {}", name, reason));
        }
        ItemOutcome::Failed(reason) => {
            tracing::debug!(library = %name, %operation, reason = %reason, "failed");
            ui.error(&format!("{}: {} failed: {}", name, operation, reason));
        }
    }
}

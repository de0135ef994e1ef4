//! List command implementation.
//!
//! The `ffdeps list` command lists catalog entries.

use serde::Serialize;

use crate::catalog::{Catalog, Category, LibraryDescriptor, ToolKind, UsabilityGap};
use crate::cli::args::ListArgs;
use crate::configure::BuildEnvironment;
use crate::error::{FfdepsError, Result};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    context: CommandContext,
    args: ListArgs,
}

/// One row of `list --json`.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    category: Category,
    tool: ToolKind,
    usable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    gaps: Vec<UsabilityGap>,
    buildable: bool,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(context: CommandContext, args: ListArgs) -> Self {
        Self { context, args }
    }

    fn selected<'c>(&self, catalog: &'c Catalog) -> Vec<(&'c str, &'c LibraryDescriptor)> {
        let registry = catalog.registry();
        match (self.args.category, self.args.usable) {
            (Some(category), usable) => registry
                .by_category(category)
                .filter(|(_, d)| !usable || d.is_usable())
                .collect(),
            (None, true) => registry.usable().collect(),
            (None, false) => registry.iter().collect(),
        }
    }

    fn entries<'c>(&self, catalog: &'c Catalog) -> Vec<ListEntry<'c>> {
        self.selected(catalog)
            .into_iter()
            .map(|(name, descriptor)| ListEntry {
                name,
                category: descriptor.category,
                tool: descriptor.tool_kind,
                usable: descriptor.is_usable(),
                gaps: descriptor.usability_gaps(),
                buildable: catalog.profile(name).is_some(),
            })
            .collect()
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.context.settings(BuildEnvironment::default())?;
        let catalog = self.context.catalog(&settings)?;
        let entries = self.entries(&catalog);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| FfdepsError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("No matching dependencies.");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(&["Name", "Category", "Tool", "Usable", "Build"]);
        for entry in &entries {
            table.add_row(&[
                entry.name,
                entry.category.as_str(),
                entry.tool.as_str(),
                if entry.usable { "✓" } else { "✗" },
                if entry.buildable { "✓" } else { "" },
            ]);
        }
        ui.message(&table.render());
        ui.message(&format!(
            "{} of {} dependencies shown",
            entries.len(),
            catalog.registry().len()
        ));

        Ok(CommandResult::success())
    }
}

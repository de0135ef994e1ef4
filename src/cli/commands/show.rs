//! Show command implementation.
//!
//! The `ffdeps show` command prints everything the catalog knows about one
//! dependency: descriptor fields, the commands it would run and its build
//! profile, if any.

use serde::Serialize;
use std::path::Path;

use crate::catalog::{canonical_name, describe_gaps, Catalog, Invocation, LibraryDescriptor};
use crate::cli::args::ShowArgs;
use crate::configure::{BuildEnvironment, BuildProfile};
use crate::error::{FfdepsError, Result};
use crate::options::OptionSpec;
use crate::ui::{FfdepsTheme, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Exit code for a name missing from the catalog.
const UNKNOWN_NAME: i32 = 1;

/// The show command implementation.
pub struct ShowCommand {
    context: CommandContext,
    args: ShowArgs,
}

#[derive(Debug, Serialize)]
struct ShowReport<'a> {
    name: String,
    #[serde(flatten)]
    descriptor: &'a LibraryDescriptor,
    usable: bool,
    fetch: String,
    update: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build: Option<ProfileReport<'a>>,
}

#[derive(Debug, Serialize)]
struct ProfileReport<'a> {
    command: &'a str,
    build_dir: &'a Path,
    trailing: &'a [String],
    options: Vec<&'a OptionSpec>,
}

impl<'a> ShowReport<'a> {
    fn new(
        name: String,
        descriptor: &'a LibraryDescriptor,
        profile: Option<&'a BuildProfile>,
    ) -> Self {
        Self {
            name,
            descriptor,
            usable: descriptor.is_usable(),
            fetch: descriptor.fetch_command().command_line(),
            update: descriptor
                .update_commands()
                .iter()
                .map(Invocation::command_line)
                .collect(),
            build: profile.map(|p| ProfileReport {
                command: &p.command,
                build_dir: &p.build_dir,
                trailing: &p.trailing,
                options: p.options().iter().collect(),
            }),
        }
    }
}

impl ShowCommand {
    /// Create a new show command.
    pub fn new(context: CommandContext, args: ShowArgs) -> Self {
        Self { context, args }
    }

    fn render(&self, report: &ShowReport<'_>, ui: &mut dyn UserInterface) {
        let theme = FfdepsTheme::new();
        let field = |key: &str, value: &str| {
            format!("  {} {}", theme.key.apply_to(format!("{:<10}", key)), value)
        };
        let d = report.descriptor;

        ui.show_header(&report.name);
        ui.message(&field("category", d.category.as_str()));
        ui.message(&field("switch", &d.switch));
        ui.message(&field("default", &d.default_policy.to_string()));
        ui.message(&field("tool", d.tool_kind.as_str()));
        if let Some(rev) = d.pinned_revision {
            ui.message(&field("revision", &rev.to_string()));
        }
        ui.message(&field("source", &String::from(d.source_location.clone())));
        ui.message(&field("path", &String::from(d.local_path.clone())));

        let gaps = d.usability_gaps();
        if gaps.is_empty() {
            ui.message(&field("usable", "yes"));
            ui.message(&field("fetch", &report.fetch));
            for command in &report.update {
                ui.message(&field("update", command));
            }
        } else {
            ui.message(&field("usable", &format!("no ({})", describe_gaps(&gaps))));
        }

        let Some(build) = &report.build else {
            return;
        };
        ui.message("");
        ui.message(&format!("  {}", theme.key.apply_to("Build profile:")));
        ui.message(&field("command", build.command));
        ui.message(&field("build dir", &build.build_dir.display().to_string()));
        if !build.trailing.is_empty() {
            ui.message(&field("trailing", &build.trailing.join(" ")));
        }
        ui.message(&field("options", &build.options.len().to_string()));
        for spec in &build.options {
            ui.message(&format!("    {}", theme.dim.apply_to(describe_option(spec))));
        }
    }
}

/// One-line option summary, e.g. `--bit-depth=<all|8|10>`.
fn describe_option(spec: &OptionSpec) -> String {
    let mut line = format!("--{}", spec.name);
    if spec.is_keyword {
        let values = match &spec.allowed_values {
            Some(values) => values
                .iter()
                .flatten()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("|"),
            None => "VALUE".to_string(),
        };
        if spec.accepts_bare() {
            line.push_str(&format!("[=<{}>]", values));
        } else {
            line.push_str(&format!("=<{}>", values));
        }
    }
    if !spec.aliases.is_empty() {
        line.push_str(&format!(" (alias: {})", spec.aliases.join(", ")));
    }
    line
}

impl Command for ShowCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.context.settings(BuildEnvironment::default())?;
        let catalog: Catalog = self.context.catalog(&settings)?;

        let name = canonical_name(&self.args.name);
        let descriptor = match catalog.registry().lookup(&name) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(UNKNOWN_NAME));
            }
        };
        let report = ShowReport::new(name.clone(), descriptor, catalog.profile(&name));

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| FfdepsError::Other(e.into()))?;
            ui.message(&json);
        } else {
            self.render(&report, ui);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::OptionDef;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn show(name: &str, json: bool) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        let args = ShowArgs {
            name: name.to_string(),
            json,
        };
        let cmd = ShowCommand::new(CommandContext::new(temp.path()), args);
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn shows_fetch_command_for_usable_entry() {
        let (result, ui) = show("libbs2b", false);
        assert!(result.success);
        assert_eq!(ui.headers(), &["LIBBS2B"]);
        assert!(ui.has_message("svn co -r 175 https://svn.code.sf.net/p/bs2b/code/trunk libbs2b"));
        assert!(ui.has_message("svn up"));
    }

    #[test]
    fn shows_gaps_for_unusable_entry() {
        let (result, ui) = show("vaapi", false);
        assert!(result.success);
        assert!(ui.has_message("tool undetermined"));
        assert!(!ui.has_message("fetch"));
    }

    #[test]
    fn shows_build_profile() {
        let (_, ui) = show("LIBX264", false);
        assert!(ui.has_message("Build profile:"));
        assert!(ui.has_message("--enable-shared --enable-pic"));
        assert!(ui.has_message("--bit-depth=<all|8|10>"));
    }

    #[test]
    fn unknown_name_fails() {
        let (result, ui) = show("libnothing", false);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Unknown dependency"));
    }

    #[test]
    fn json_report() {
        let (_, ui) = show("libx264", true);
        let report: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(report["name"], "LIBX264");
        assert_eq!(report["tool"], "full-clone");
        assert_eq!(report["usable"], true);
        assert_eq!(report["build"]["command"], "./configure");
        assert!(report["build"]["options"].as_array().unwrap().len() > 30);
    }

    #[test]
    fn describe_option_forms() {
        let registry = crate::options::OptionRegistry::from_defs([
            OptionDef::flag("disable-cli"),
            OptionDef::keyword("prefix"),
            OptionDef::keyword("enable-shared").values(&["yes", "no"]).bare(),
            OptionDef::flag("help").alias("h"),
        ])
        .unwrap();

        let lines: Vec<String> = registry.iter().map(describe_option).collect();
        assert_eq!(
            lines,
            vec![
                "--disable-cli",
                "--prefix=<VALUE>",
                "--enable-shared[=<yes|no>]",
                "--help (alias: h)",
            ]
        );
    }
}

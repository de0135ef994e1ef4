//! Fetch and update command templates per tool kind.
//!
//! Each [`ToolKind`] owns exactly one row in a static table. Adding a new
//! tool means one new enum variant and one new row.

use crate::shell::quote_word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a dependency's sources are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Subversion checkout pinned to a revision.
    SnapshotCheckout,
    /// Git clone.
    FullClone,
    /// Mercurial clone.
    DistributedClone,
    /// Single file fetched with curl.
    SingleFileDownload,
    /// No known way to fetch it yet.
    #[default]
    Undetermined,
}

/// A command produced from a template.
///
/// Diagnostics are placeholders for actions a tool cannot perform. They render
/// as a harmless `echo` but callers must not treat them as real work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// A real command line to execute.
    Exec(String),
    /// A no-op that only reports why nothing can be done.
    Diagnostic(String),
}

impl Invocation {
    /// Whether this is a diagnostic placeholder.
    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Invocation::Diagnostic(_))
    }

    /// The shell command line for this invocation.
    pub fn command_line(&self) -> String {
        match self {
            Invocation::Exec(cmd) => cmd.clone(),
            Invocation::Diagnostic(msg) => format!("echo '{}'", msg),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}

struct ToolTemplate {
    kind: ToolKind,
    program: Option<&'static str>,
    fetch: Option<&'static str>,
    update: &'static [&'static str],
    diagnostic: &'static str,
}

const INCONCLUSIVE: &str = "Tool kind is inconclusive.";

/// One row per kind, in declaration order of [`ToolKind`].
static TEMPLATES: [ToolTemplate; 5] = [
    ToolTemplate {
        kind: ToolKind::SnapshotCheckout,
        program: Some("svn"),
        fetch: Some("svn co -r {rev} {url} {dest}"),
        update: &["svn up"],
        diagnostic: INCONCLUSIVE,
    },
    ToolTemplate {
        kind: ToolKind::FullClone,
        program: Some("git"),
        fetch: Some("git clone {url} {dest}"),
        update: &["git pull"],
        diagnostic: INCONCLUSIVE,
    },
    ToolTemplate {
        kind: ToolKind::DistributedClone,
        program: Some("hg"),
        fetch: Some("hg clone {url} {dest}"),
        update: &["hg pull", "hg update"],
        diagnostic: INCONCLUSIVE,
    },
    ToolTemplate {
        kind: ToolKind::SingleFileDownload,
        program: Some("curl"),
        fetch: Some("curl {url} -L -o {dest}"),
        update: &[],
        diagnostic: "Update via curl not implemented!",
    },
    ToolTemplate {
        kind: ToolKind::Undetermined,
        program: None,
        fetch: None,
        update: &[],
        diagnostic: INCONCLUSIVE,
    },
];

impl ToolKind {
    /// All tool kinds, in table order.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::SnapshotCheckout,
        ToolKind::FullClone,
        ToolKind::DistributedClone,
        ToolKind::SingleFileDownload,
        ToolKind::Undetermined,
    ];

    fn template(&self) -> &'static ToolTemplate {
        let template = &TEMPLATES[*self as usize];
        debug_assert_eq!(template.kind, *self);
        template
    }

    /// The external program this kind shells out to.
    pub fn program(&self) -> Option<&'static str> {
        self.template().program
    }

    /// Whether this kind requires a pinned revision to be usable.
    pub fn requires_revision(&self) -> bool {
        matches!(self, ToolKind::SnapshotCheckout)
    }

    /// Build the fetch command for a source and destination.
    ///
    /// Pure function of its inputs. A snapshot checkout without a revision
    /// checks out `HEAD`. Source and destination are shell-quoted.
    pub fn fetch_command(&self, revision: Option<u64>, source: &str, dest: &str) -> Invocation {
        let template = self.template();
        match template.fetch {
            Some(pattern) => {
                let rev = revision
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "HEAD".to_string());
                let words: Vec<String> = pattern
                    .split(' ')
                    .map(|word| match word {
                        "{rev}" => rev.clone(),
                        "{url}" => quote_word(source).into_owned(),
                        "{dest}" => quote_word(dest).into_owned(),
                        literal => literal.to_string(),
                    })
                    .collect();
                Invocation::Exec(words.join(" "))
            }
            None => Invocation::Diagnostic(template.diagnostic.to_string()),
        }
    }

    /// Ordered commands that update an existing checkout in place.
    ///
    /// Kinds that cannot update yield a single diagnostic.
    pub fn update_commands(&self) -> Vec<Invocation> {
        let template = self.template();
        if template.update.is_empty() {
            return vec![Invocation::Diagnostic(template.diagnostic.to_string())];
        }
        template
            .update
            .iter()
            .map(|c| Invocation::Exec(c.to_string()))
            .collect()
    }

    /// Whether the update commands are real actions.
    pub fn supports_update(&self) -> bool {
        !self.template().update.is_empty()
    }

    /// Kebab-case name as used in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::SnapshotCheckout => "snapshot-checkout",
            ToolKind::FullClone => "full-clone",
            ToolKind::DistributedClone => "distributed-clone",
            ToolKind::SingleFileDownload => "single-file-download",
            ToolKind::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_table_row() {
        for kind in ToolKind::ALL {
            assert_eq!(kind.template().kind, kind);
        }
    }

    #[test]
    fn snapshot_checkout_pins_revision() {
        let cmd = ToolKind::SnapshotCheckout.fetch_command(
            Some(175),
            "https://example/trunk",
            "libbs2b",
        );
        assert_eq!(
            cmd,
            Invocation::Exec("svn co -r 175 https://example/trunk libbs2b".to_string())
        );
    }

    #[test]
    fn snapshot_checkout_without_revision_uses_head() {
        let cmd = ToolKind::SnapshotCheckout.fetch_command(None, "u", "d");
        assert_eq!(cmd.command_line(), "svn co -r HEAD u d");
    }

    #[test]
    fn full_clone_ignores_revision() {
        let cmd = ToolKind::FullClone.fetch_command(Some(3), "https://x/y.git", "liby");
        assert_eq!(cmd.command_line(), "git clone https://x/y.git liby");
    }

    #[test]
    fn distributed_clone_uses_hg() {
        let cmd = ToolKind::DistributedClone.fetch_command(None, "https://hg/x", "x");
        assert_eq!(cmd.command_line(), "hg clone https://hg/x x");
    }

    #[test]
    fn single_file_download_uses_curl() {
        let cmd = ToolKind::SingleFileDownload.fetch_command(
            None,
            "http://www.ladspa.org/ladspa_sdk/ladspa.h.txt",
            "ladspa/ladspa.h",
        );
        assert_eq!(
            cmd.command_line(),
            "curl http://www.ladspa.org/ladspa_sdk/ladspa.h.txt -L -o ladspa/ladspa.h"
        );
    }

    #[test]
    fn source_and_destination_are_single_words() {
        let cmd = ToolKind::FullClone.fetch_command(
            None,
            "https://example.org/a b.git;echo INJECTED",
            "lib dir",
        );
        assert_eq!(
            shlex::split(&cmd.command_line()).unwrap(),
            vec![
                "git",
                "clone",
                "https://example.org/a b.git;echo INJECTED",
                "lib dir"
            ]
        );
    }

    #[test]
    fn undetermined_fetch_is_diagnostic() {
        let cmd = ToolKind::Undetermined.fetch_command(None, "u", "d");
        assert!(cmd.is_diagnostic());
        assert!(cmd.command_line().starts_with("echo "));
    }

    #[test]
    fn update_commands_per_kind() {
        let lines = |k: ToolKind| -> Vec<String> {
            k.update_commands().iter().map(|c| c.command_line()).collect()
        };
        assert_eq!(lines(ToolKind::SnapshotCheckout), vec!["svn up"]);
        assert_eq!(lines(ToolKind::FullClone), vec!["git pull"]);
        assert_eq!(lines(ToolKind::DistributedClone), vec!["hg pull", "hg update"]);
    }

    #[test]
    fn unsupported_update_yields_single_diagnostic() {
        for kind in [ToolKind::SingleFileDownload, ToolKind::Undetermined] {
            let cmds = kind.update_commands();
            assert_eq!(cmds.len(), 1);
            assert!(cmds[0].is_diagnostic());
            assert!(!kind.supports_update());
        }
    }

    #[test]
    fn programs() {
        assert_eq!(ToolKind::SnapshotCheckout.program(), Some("svn"));
        assert_eq!(ToolKind::DistributedClone.program(), Some("hg"));
        assert_eq!(ToolKind::Undetermined.program(), None);
    }

    #[test]
    fn deserializes_kebab_case() {
        let kind: ToolKind = serde_yaml::from_str("single-file-download").unwrap();
        assert_eq!(kind, ToolKind::SingleFileDownload);
        assert_eq!(kind.to_string(), "single-file-download");
    }
}

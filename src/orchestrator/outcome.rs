//! Per-item outcomes and batch summaries.

use crate::catalog::{describe_gaps, ToolKind, UsabilityGap};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Batch operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Fetch,
    Update,
    Compile,
}

impl Operation {
    /// Past tense, for success lines.
    pub fn past_tense(&self) -> &'static str {
        match self {
            Operation::Fetch => "fetched",
            Operation::Update => "updated",
            Operation::Compile => "configured",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Fetch => "fetch",
            Operation::Update => "update",
            Operation::Compile => "compile",
        };
        write!(f, "{}", s)
    }
}

/// Why an item was not processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum SkipReason {
    UnknownDependency,
    Unusable { gaps: Vec<UsabilityGap> },
    AlreadyFetched { path: PathBuf },
    NotFetched { path: PathBuf },
    UpdateUnsupported { tool: ToolKind },
    NoBuildProfile,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnknownDependency => write!(f, "unknown dependency"),
            SkipReason::Unusable { gaps } => write!(f, "not usable: {}", describe_gaps(gaps)),
            SkipReason::AlreadyFetched { path } => {
                write!(f, "already fetched at {}", path.display())
            }
            SkipReason::NotFetched { path } => {
                write!(f, "not fetched yet ({} is missing)", path.display())
            }
            SkipReason::UpdateUnsupported { tool } => {
                write!(f, "{} sources cannot be updated in place", tool)
            }
            SkipReason::NoBuildProfile => write!(f, "no build profile"),
        }
    }
}

/// Why an item failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum FailureReason {
    /// A command ran and exited non-zero, or could not be started.
    Command {
        command: String,
        exit_code: Option<i32>,
        /// Steps of a multi-step sequence that completed before this one.
        completed_steps: usize,
    },
    /// The configure command could not be synthesized.
    Configuration { message: String },
    Io { message: String },
    Cancelled,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Command {
                command,
                exit_code,
                completed_steps,
            } => {
                match exit_code {
                    Some(code) => write!(f, "`{}` exited with code {}", command, code)?,
                    None => write!(f, "`{}` could not be run", command)?,
                }
                if *completed_steps > 0 {
                    write!(f, " after {} completed step(s)", completed_steps)?;
                }
                Ok(())
            }
            FailureReason::Configuration { message } => write!(f, "{}", message),
            FailureReason::Io { message } => write!(f, "{}", message),
            FailureReason::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Outcome of one requested item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ItemOutcome {
    Succeeded { commands: Vec<String> },
    DryRun { commands: Vec<String> },
    Skipped(SkipReason),
    Failed(FailureReason),
}

impl ItemOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, ItemOutcome::Failed(_))
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, ItemOutcome::Skipped(_))
    }
}

/// Outcomes of a batch, in request order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub operation: Operation,
    pub items: Vec<(String, ItemOutcome)>,
}

impl BatchSummary {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, outcome: ItemOutcome) {
        self.items.push((name.into(), outcome));
    }

    /// Outcome recorded for `name`, if any.
    pub fn outcome(&self, name: &str) -> Option<&ItemOutcome> {
        self.items
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::Succeeded { .. }))
    }

    pub fn dry_runs(&self) -> usize {
        self.count(|o| matches!(o, ItemOutcome::DryRun { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(ItemOutcome::is_skip)
    }

    pub fn failed(&self) -> usize {
        self.count(ItemOutcome::is_failure)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether nothing failed. Skips do not count as failures.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// One-line count summary, e.g. `1 succeeded, 2 skipped, 0 failed`.
    pub fn counts_line(&self) -> String {
        let mut parts = vec![format!("{} succeeded", self.succeeded())];
        if self.dry_runs() > 0 {
            parts.push(format!("{} dry run", self.dry_runs()));
        }
        parts.push(format!("{} skipped", self.skipped()));
        parts.push(format!("{} failed", self.failed()));
        parts.join(", ")
    }

    fn count(&self, pred: impl Fn(&ItemOutcome) -> bool) -> usize {
        self.items.iter().filter(|(_, o)| pred(o)).count()
    }
}

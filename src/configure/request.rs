//! Requested option settings and build environment inputs.

use serde::{Deserialize, Serialize};

/// Flags a caller wants applied to one configure invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRequest {
    /// Bare flags, in request order.
    pub plain: Vec<String>,
    /// `name=value` flags, in request order.
    pub keyword: Vec<(String, String)>,
}

impl CommandRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bare flag.
    pub fn flag(mut self, name: &str) -> Self {
        self.plain.push(name.to_string());
        self
    }

    /// Add a `name=value` flag.
    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.keyword.push((name.to_string(), value.to_string()));
        self
    }

    /// Build a request from CLI-style inputs.
    ///
    /// Assignments are split on the first `=`; one without `=` is an error
    /// naming the offending text.
    pub fn from_cli(plain: &[String], assignments: &[String]) -> Result<Self, String> {
        let mut request = Self {
            plain: plain.to_vec(),
            keyword: Vec::with_capacity(assignments.len()),
        };
        for assignment in assignments {
            let (key, value) = parse_assignment(assignment)?;
            request.keyword.push((key.to_string(), value.to_string()));
        }
        Ok(request)
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty() && self.keyword.is_empty()
    }
}

/// Split `key=value`.
pub fn parse_assignment(text: &str) -> Result<(&str, &str), String> {
    match text.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(format!("expected KEY=VALUE, got '{}'", text)),
    }
}

/// Toolchain paths and triplets passed through to configure scripts.
///
/// Values are forwarded verbatim and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildEnvironment {
    /// Install prefix.
    #[serde(default)]
    pub prefix: Option<String>,
    /// Build-machine triplet.
    #[serde(default)]
    pub build: Option<String>,
    /// Host triplet.
    #[serde(default)]
    pub host: Option<String>,
    /// Sysroot path.
    #[serde(default)]
    pub sysroot: Option<String>,
}

impl BuildEnvironment {
    /// Fill unset fields from `fallback`.
    pub fn or(self, fallback: &BuildEnvironment) -> Self {
        Self {
            prefix: self.prefix.or_else(|| fallback.prefix.clone()),
            build: self.build.or_else(|| fallback.build.clone()),
            host: self.host.or_else(|| fallback.host.clone()),
            sysroot: self.sysroot.or_else(|| fallback.sysroot.clone()),
        }
    }

    /// Set values keyed by input name, in fixed order.
    pub fn entries(&self) -> Vec<(EnvironmentInput, &str)> {
        [
            (EnvironmentInput::Prefix, &self.prefix),
            (EnvironmentInput::Build, &self.build),
            (EnvironmentInput::Host, &self.host),
            (EnvironmentInput::Sysroot, &self.sysroot),
        ]
        .into_iter()
        .filter_map(|(input, value)| value.as_deref().map(|v| (input, v)))
        .collect()
    }
}

/// One of the environment inputs a build profile can map to a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentInput {
    Prefix,
    Build,
    Host,
    Sysroot,
}

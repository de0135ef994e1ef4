//! Library descriptors.
//!
//! A [`LibraryDescriptor`] is the static record for one optional dependency:
//! what it is, how to fetch it and where it lands. Descriptors with missing
//! pieces are still valid catalog entries, they are just never executed.

use super::tool::{Invocation, ToolKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// What part of the toolchain a dependency feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Codec,
    Encoder,
    Decoder,
    HardwareAccelerator,
    Muxer,
    Demuxer,
    Parser,
    BitstreamFilter,
    Protocol,
    Device,
    InputDevice,
    OutputDevice,
    Filter,
    #[default]
    Undetermined,
}

impl Category {
    /// Kebab-case name as used in the catalog.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Codec => "codec",
            Category::Encoder => "encoder",
            Category::Decoder => "decoder",
            Category::HardwareAccelerator => "hardware-accelerator",
            Category::Muxer => "muxer",
            Category::Demuxer => "demuxer",
            Category::Parser => "parser",
            Category::BitstreamFilter => "bitstream-filter",
            Category::Protocol => "protocol",
            Category::Device => "device",
            Category::InputDevice => "input-device",
            Category::OutputDevice => "output-device",
            Category::Filter => "filter",
            Category::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_yaml::from_str::<Category>(s.trim()).map_err(|_| format!("unknown category: {}", s))
    }
}

/// Whether the toolchain build enables a dependency by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultPolicy {
    #[default]
    Disabled,
    Enabled,
    AutoDetect,
}

impl fmt::Display for DefaultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DefaultPolicy::Disabled => "disabled",
            DefaultPolicy::Enabled => "enabled",
            DefaultPolicy::AutoDetect => "auto-detect",
        };
        write!(f, "{}", s)
    }
}

/// Where sources are fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SourceLocation {
    Uri(String),
    #[default]
    Unknown,
}

impl SourceLocation {
    pub const UNKNOWN: &'static str = "unknown";

    /// The URI, if known.
    pub fn uri(&self) -> Option<&str> {
        match self {
            SourceLocation::Uri(uri) => Some(uri),
            SourceLocation::Unknown => None,
        }
    }
}

impl From<String> for SourceLocation {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == Self::UNKNOWN {
            SourceLocation::Unknown
        } else {
            SourceLocation::Uri(trimmed.to_string())
        }
    }
}

impl From<SourceLocation> for String {
    fn from(s: SourceLocation) -> Self {
        match s {
            SourceLocation::Uri(uri) => uri,
            SourceLocation::Unknown => SourceLocation::UNKNOWN.to_string(),
        }
    }
}

/// Destination relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocalPath {
    Relative(PathBuf),
    #[default]
    Unspecified,
}

impl LocalPath {
    pub const UNSPECIFIED: &'static str = "unspecified";

    /// The relative path, if specified.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LocalPath::Relative(p) => Some(p),
            LocalPath::Unspecified => None,
        }
    }
}

impl From<String> for LocalPath {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == Self::UNSPECIFIED {
            LocalPath::Unspecified
        } else {
            LocalPath::Relative(PathBuf::from(trimmed))
        }
    }
}

impl From<LocalPath> for String {
    fn from(p: LocalPath) -> Self {
        match p {
            LocalPath::Relative(path) => path.to_string_lossy().into_owned(),
            LocalPath::Unspecified => LocalPath::UNSPECIFIED.to_string(),
        }
    }
}

/// A piece of information a descriptor is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UsabilityGap {
    UnknownSource,
    UnspecifiedPath,
    UndeterminedTool,
    MissingRevision,
}

impl fmt::Display for UsabilityGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UsabilityGap::UnknownSource => "source location unknown",
            UsabilityGap::UnspecifiedPath => "local path unspecified",
            UsabilityGap::UndeterminedTool => "tool undetermined",
            UsabilityGap::MissingRevision => "snapshot checkout has no pinned revision",
        };
        write!(f, "{}", s)
    }
}

/// Join gaps into a single human-readable reason.
pub fn describe_gaps(gaps: &[UsabilityGap]) -> String {
    gaps.iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Immutable record describing one optional dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryDescriptor {
    #[serde(default)]
    pub category: Category,

    /// Build flag toggling this dependency (informational).
    #[serde(default)]
    pub switch: String,

    #[serde(default, rename = "default")]
    pub default_policy: DefaultPolicy,

    #[serde(default, rename = "tool")]
    pub tool_kind: ToolKind,

    /// Pinned revision; only meaningful for snapshot checkouts.
    #[serde(default, rename = "revision", skip_serializing_if = "Option::is_none")]
    pub pinned_revision: Option<u64>,

    #[serde(default, rename = "source")]
    pub source_location: SourceLocation,

    #[serde(default, rename = "path")]
    pub local_path: LocalPath,
}

impl LibraryDescriptor {
    /// Everything preventing this descriptor from being fetched.
    pub fn usability_gaps(&self) -> Vec<UsabilityGap> {
        let mut gaps = Vec::new();
        if self.source_location == SourceLocation::Unknown {
            gaps.push(UsabilityGap::UnknownSource);
        }
        if self.local_path == LocalPath::Unspecified {
            gaps.push(UsabilityGap::UnspecifiedPath);
        }
        if self.tool_kind == ToolKind::Undetermined {
            gaps.push(UsabilityGap::UndeterminedTool);
        }
        if self.tool_kind.requires_revision() && self.pinned_revision.is_none() {
            gaps.push(UsabilityGap::MissingRevision);
        }
        gaps
    }

    /// Whether this descriptor has enough information to be fetched and built.
    pub fn is_usable(&self) -> bool {
        self.usability_gaps().is_empty()
    }

    /// Fetch command for this descriptor.
    ///
    /// Sentinel source or path values render as their sentinel text, so only
    /// call this on usable descriptors when the result will be executed.
    pub fn fetch_command(&self) -> Invocation {
        let source = String::from(self.source_location.clone());
        let dest = String::from(self.local_path.clone());
        self.tool_kind.fetch_command(self.pinned_revision, &source, &dest)
    }

    /// Update commands for this descriptor, run inside its local path.
    pub fn update_commands(&self) -> Vec<Invocation> {
        self.tool_kind.update_commands()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usable() -> LibraryDescriptor {
        LibraryDescriptor {
            category: Category::Encoder,
            switch: "--enable-libx264".to_string(),
            default_policy: DefaultPolicy::Disabled,
            tool_kind: ToolKind::FullClone,
            pinned_revision: None,
            source_location: SourceLocation::Uri("https://code.videolan.org/x264.git".into()),
            local_path: LocalPath::Relative("libx264".into()),
        }
    }

    #[test]
    fn complete_descriptor_is_usable() {
        assert!(usable().is_usable());
        assert!(usable().usability_gaps().is_empty());
    }

    #[test]
    fn unknown_source_is_unusable() {
        let d = LibraryDescriptor {
            source_location: SourceLocation::Unknown,
            ..usable()
        };
        assert!(!d.is_usable());
        assert_eq!(d.usability_gaps(), vec![UsabilityGap::UnknownSource]);
    }

    #[test]
    fn unspecified_path_is_unusable() {
        let d = LibraryDescriptor {
            local_path: LocalPath::Unspecified,
            ..usable()
        };
        assert!(!d.is_usable());
    }

    #[test]
    fn undetermined_tool_is_unusable() {
        let d = LibraryDescriptor {
            tool_kind: ToolKind::Undetermined,
            ..usable()
        };
        assert_eq!(d.usability_gaps(), vec![UsabilityGap::UndeterminedTool]);
    }

    #[test]
    fn snapshot_checkout_needs_revision() {
        let mut d = LibraryDescriptor {
            tool_kind: ToolKind::SnapshotCheckout,
            ..usable()
        };
        assert_eq!(d.usability_gaps(), vec![UsabilityGap::MissingRevision]);
        d.pinned_revision = Some(6431);
        assert!(d.is_usable());
    }

    #[test]
    fn every_gap_is_reported() {
        let d = LibraryDescriptor {
            tool_kind: ToolKind::Undetermined,
            source_location: SourceLocation::Unknown,
            local_path: LocalPath::Unspecified,
            ..usable()
        };
        assert_eq!(d.usability_gaps().len(), 3);
        let reason = describe_gaps(&d.usability_gaps());
        assert!(reason.contains("source location unknown"));
        assert!(reason.contains("tool undetermined"));
    }

    #[test]
    fn sentinels_parse_from_strings() {
        assert_eq!(SourceLocation::from("unknown".to_string()), SourceLocation::Unknown);
        assert_eq!(LocalPath::from("unspecified".to_string()), LocalPath::Unspecified);
        assert_eq!(
            LocalPath::from("libopus".to_string()).path(),
            Some(Path::new("libopus"))
        );
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let yaml = r#"
category: hardware-accelerator
switch: --disable-vaapi
default: auto-detect
"#;
        let d: LibraryDescriptor = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(d.category, Category::HardwareAccelerator);
        assert_eq!(d.default_policy, DefaultPolicy::AutoDetect);
        assert_eq!(d.tool_kind, ToolKind::Undetermined);
        assert_eq!(d.source_location, SourceLocation::Unknown);
        assert_eq!(d.local_path, LocalPath::Unspecified);
        assert!(!d.is_usable());
    }

    #[test]
    fn descriptor_fetch_command_uses_fields() {
        let d = LibraryDescriptor {
            tool_kind: ToolKind::SnapshotCheckout,
            pinned_revision: Some(175),
            source_location: SourceLocation::Uri("https://example/trunk".into()),
            local_path: LocalPath::Relative("libbs2b".into()),
            ..usable()
        };
        assert_eq!(
            d.fetch_command().command_line(),
            "svn co -r 175 https://example/trunk libbs2b"
        );
    }

    #[test]
    fn category_parses_from_str() {
        assert_eq!("input-device".parse::<Category>().unwrap(), Category::InputDevice);
        assert!("gadget".parse::<Category>().is_err());
    }
}

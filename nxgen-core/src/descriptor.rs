//! Project descriptor models and validation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::is_absolute;

/// Default source directory, relative to the project directory.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Default build output directory, relative to the project directory.
pub const DEFAULT_TARGET_DIR: &str = "lib";

/// Lifecycle actions a project may request.
///
/// The declaration order is the canonical order targets are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryKind {
    Clean,
    Build,
    Watch,
    Test,
}

impl EntryKind {
    pub const ALL: [EntryKind; 4] = [
        EntryKind::Clean,
        EntryKind::Build,
        EntryKind::Watch,
        EntryKind::Test,
    ];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Clean => "clean",
            EntryKind::Build => "build",
            EntryKind::Watch => "watch",
            EntryKind::Test => "test",
        }
    }

    /// Parses an entry name. Unknown names yield `None`.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clean" => Some(EntryKind::Clean),
            "build" => Some(EntryKind::Build),
            "watch" => Some(EntryKind::Watch),
            "test" => Some(EntryKind::Test),
            _ => None,
        }
    }
}

/// Kind of project, selecting the bundler configuration variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Cli,
    Lib,
    Vsc,
}

impl ProjectType {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Cli => "cli",
            ProjectType::Lib => "lib",
            ProjectType::Vsc => "vsc",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "cli" => Some(ProjectType::Cli),
            "lib" => Some(ProjectType::Lib),
            "vsc" => Some(ProjectType::Vsc),
            _ => None,
        }
    }
}

/// A validated description of one project in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub workspace_root: PathBuf,
    /// Absolute, or relative to `workspace_root`.
    pub project_dir: PathBuf,
    pub project_name: String,
    pub project_type: ProjectType,
    pub source_dir: String,
    pub target_dir: String,
    pub entries: BTreeSet<EntryKind>,
    pub tags: Vec<String>,
}

impl ProjectDescriptor {
    pub fn new(
        workspace_root: impl Into<PathBuf>,
        project_dir: impl Into<PathBuf>,
        project_name: impl Into<String>,
        project_type: ProjectType,
    ) -> Self {
        Self {
            workspace_root: workspace_root.into(),
            project_dir: project_dir.into(),
            project_name: project_name.into(),
            project_type,
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            target_dir: DEFAULT_TARGET_DIR.to_string(),
            entries: BTreeSet::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = EntryKind>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_source_dir(mut self, source_dir: impl Into<String>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    pub fn with_target_dir(mut self, target_dir: impl Into<String>) -> Self {
        self.target_dir = target_dir.into();
        self
    }

    #[inline]
    pub fn has_entry(&self, kind: EntryKind) -> bool {
        self.entries.contains(&kind)
    }
}

/// Unvalidated descriptor parameters, as read from `nxgen.toml` or CLI flags.
///
/// Every field is optional here; [`DescriptorParams::validate`] enforces the
/// mandatory ones and applies the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptorParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,
    #[serde(default, alias = "name")]
    pub project_name: Option<String>,
    #[serde(default, alias = "type")]
    pub project_type: Option<String>,
    /// Defaults to [`DEFAULT_SOURCE_DIR`].
    #[serde(default)]
    pub source_dir: Option<String>,
    /// Defaults to [`DEFAULT_TARGET_DIR`].
    #[serde(default)]
    pub target_dir: Option<String>,
    /// Entry names; unknown names are ignored.
    #[serde(default)]
    pub entries: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn required<T>(value: Option<T>, field: &'static str, is_empty: impl Fn(&T) -> bool) -> Result<T> {
    match value {
        Some(v) if !is_empty(&v) => Ok(v),
        _ => Err(Error::MissingField { field }),
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl DescriptorParams {
    /// Validates the parameters into a [`ProjectDescriptor`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if a mandatory field is absent or empty,
    /// [`Error::RelativeWorkspaceRoot`] if the workspace root is not absolute,
    /// and [`Error::InvalidProjectType`] for a type outside `cli`, `lib`, `vsc`.
    pub fn validate(self) -> Result<ProjectDescriptor> {
        let workspace_root = required(self.workspace_root, "workspace_root", |p| {
            p.as_os_str().is_empty()
        })?;
        let root = workspace_root.to_string_lossy();
        if !is_absolute(&root) {
            return Err(Error::RelativeWorkspaceRoot {
                path: root.into_owned(),
            });
        }
        let project_dir = required(self.project_dir, "project_dir", |p| {
            p.as_os_str().is_empty()
        })?;
        let project_name = required(self.project_name, "project_name", |s| s.trim().is_empty())?;
        let raw_type = required(self.project_type, "project_type", |s| s.trim().is_empty())?;
        let project_type = ProjectType::from_str(&raw_type)
            .ok_or(Error::InvalidProjectType { value: raw_type })?;

        Ok(ProjectDescriptor {
            workspace_root,
            project_dir,
            project_name,
            project_type,
            source_dir: or_default(self.source_dir, DEFAULT_SOURCE_DIR),
            target_dir: or_default(self.target_dir, DEFAULT_TARGET_DIR),
            entries: self
                .entries
                .iter()
                .filter_map(|e| EntryKind::from_str(e))
                .collect(),
            tags: self.tags,
        })
    }
}

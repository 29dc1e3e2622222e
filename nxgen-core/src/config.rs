//! TOML configuration for workspaces and projects.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::descriptor::DescriptorParams;
use crate::error::{Error, Result};

/// File name of both the workspace and per-project configuration.
pub const CONFIG_FILE: &str = "nxgen.toml";

fn default_packages_dir() -> String {
    "packages".to_string()
}

fn default_output_file() -> String {
    "project.json".to_string()
}

fn default_pretty() -> bool {
    true
}

/// Workspace-level settings from the `[workspace]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Directory scanned for project descriptors, relative to the workspace root.
    #[serde(default = "default_packages_dir")]
    pub packages_dir: String,
    /// Manifest file name written into each project directory.
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Pretty-print manifests (2-space indent) instead of compact JSON.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// Tags prepended to every project's own tags.
    #[serde(default)]
    pub default_tags: Vec<String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            packages_dir: default_packages_dir(),
            output_file: default_output_file(),
            pretty: default_pretty(),
            default_tags: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceFile {
    workspace: Option<WorkspaceConfig>,
}

impl WorkspaceConfig {
    /// Parses a workspace file. A file without a `[workspace]` table yields `None`.
    pub fn from_toml(content: &str) -> Result<Option<Self>> {
        let file: WorkspaceFile = toml::from_str(content)?;
        Ok(file.workspace)
    }

    /// Loads `<root>/nxgen.toml`, falling back to defaults when absent.
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let path = workspace_root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&content).map_err(|e| with_context(e, &path))?;
        Ok(config.unwrap_or_default())
    }

    /// Prepends the default tags the project does not already list.
    ///
    /// The project's own tags are kept exactly as written.
    pub fn merge_tags(&self, tags: Vec<String>) -> Vec<String> {
        let mut merged: Vec<String> = Vec::with_capacity(self.default_tags.len() + tags.len());
        for tag in &self.default_tags {
            if !tags.contains(tag) && !merged.contains(tag) {
                merged.push(tag.clone());
            }
        }
        merged.extend(tags);
        merged
    }
}

/// Parses a per-project descriptor file.
pub fn parse_project_config(content: &str) -> Result<DescriptorParams> {
    Ok(toml::from_str(content)?)
}

pub(crate) fn with_context(error: Error, path: &Path) -> Error {
    match error {
        Error::Toml { error, .. } => Error::Toml {
            error,
            context: path.display().to_string(),
        },
        other => other,
    }
}

//! Serializable shape of a generated `project.json`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Executor used by every generated target.
pub const RUN_COMMANDS_EXECUTOR: &str = "nx:run-commands";

/// Value of `projectType` in every generated manifest.
pub const PROJECT_KIND: &str = "library";

/// The manifest consumed by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetManifest {
    #[serde(rename = "$schema")]
    pub schema_ref: String,
    pub name: String,
    pub source_root: String,
    #[serde(rename = "projectType")]
    pub project_kind: String,
    pub tags: Vec<String>,
    /// Keyed by entry name, in canonical entry order.
    pub targets: IndexMap<String, TargetSpec>,
}

impl TargetManifest {
    #[inline]
    pub fn target(&self, name: &str) -> Option<&TargetSpec> {
        self.targets.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSpec {
    pub executor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    pub options: TargetOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configurations: Option<IndexMap<String, ConfigurationOverlay>>,
}

impl TargetSpec {
    pub fn run_commands(options: TargetOptions) -> Self {
        Self {
            executor: RUN_COMMANDS_EXECUTOR.to_string(),
            depends_on: None,
            options,
            configurations: None,
        }
    }

    pub fn with_depends_on<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends_on = Some(deps.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_configuration(mut self, name: &str, overlay: ConfigurationOverlay) -> Self {
        self.configurations
            .get_or_insert_with(IndexMap::new)
            .insert(name.to_string(), overlay);
        self
    }

    #[inline]
    pub fn configuration(&self, name: &str) -> Option<&ConfigurationOverlay> {
        self.configurations.as_ref()?.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetOptions {
    pub cwd: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    pub commands: Vec<String>,
}

/// A named partial override of a target's options.
///
/// Fields left as `None` keep the base value; `commands` replaces the base
/// sequence wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationOverlay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_map: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,
}

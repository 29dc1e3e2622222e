//! Workspace scanner for discovering project descriptor files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{parse_project_config, with_context, WorkspaceConfig, CONFIG_FILE};
use crate::descriptor::ProjectDescriptor;
use crate::error::Result;
use crate::path::relative_path;

const MAX_DEPTH: usize = 3;

/// Finds and loads the per-project `nxgen.toml` files of a workspace.
pub struct Scanner {
    workspace_root: PathBuf,
    config: WorkspaceConfig,
}

impl Scanner {
    /// Creates a scanner, reading `<workspace_root>/nxgen.toml` if present.
    pub fn new(workspace_root: impl AsRef<Path>) -> Result<Self> {
        let workspace_root = workspace_root.as_ref().to_path_buf();
        let config = WorkspaceConfig::load(&workspace_root)?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn with_config(workspace_root: impl AsRef<Path>, config: WorkspaceConfig) -> Self {
        Self {
            workspace_root: workspace_root.as_ref().to_path_buf(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    pub fn packages_dir(&self) -> PathBuf {
        self.workspace_root.join(&self.config.packages_dir)
    }

    /// Returns the sorted paths of every project descriptor file.
    ///
    /// `node_modules` and hidden directories are not descended into, and the
    /// workspace file itself is never returned.
    pub fn discover(&self) -> Vec<PathBuf> {
        let workspace_file = self.workspace_root.join(CONFIG_FILE);

        let mut files: Vec<PathBuf> = WalkDir::new(self.packages_dir())
            .max_depth(MAX_DEPTH)
            .into_iter()
            .filter_entry(|e| {
                let name = e.file_name().to_string_lossy();
                e.depth() == 0 || !(name == "node_modules" || name.starts_with('.'))
            })
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && e.file_name() == CONFIG_FILE)
            .map(|e| e.path().to_path_buf())
            .filter(|p| *p != workspace_file)
            .collect();

        files.sort();
        files
    }

    /// Loads and validates one descriptor file.
    ///
    /// The project directory is the file's parent, expressed relative to the
    /// workspace root.
    pub fn load(&self, config_path: &Path) -> Result<ProjectDescriptor> {
        let content = std::fs::read_to_string(config_path)?;
        let mut params =
            parse_project_config(&content).map_err(|e| with_context(e, config_path))?;

        let project_dir = config_path
            .parent()
            .map(|dir| relative_path(&self.workspace_root, dir))
            .unwrap_or_else(|| ".".to_string());

        params.workspace_root = Some(self.workspace_root.clone());
        params.project_dir = Some(PathBuf::from(project_dir));
        params.tags = self.config.merge_tags(std::mem::take(&mut params.tags));
        params.validate()
    }

    /// Path the manifest of `descriptor` is written to.
    pub fn output_path(&self, descriptor: &ProjectDescriptor) -> PathBuf {
        self.workspace_root
            .join(&descriptor.project_dir)
            .join(&self.config.output_file)
    }
}

//! Target synthesis for a single project.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::descriptor::{EntryKind, ProjectDescriptor, ProjectType};
use crate::manifest::{
    ConfigurationOverlay, TargetManifest, TargetOptions, TargetSpec, PROJECT_KIND,
};
use crate::path::{is_absolute, relative_path};

/// Orchestrator schema, relative to the workspace root.
pub const SCHEMA_PATH: &str = "node_modules/nx/schemas/project-schema.json";
/// Shared bundler config, relative to the workspace root.
pub const ROLLUP_CONFIG: &str = "rollup.config.mjs";
/// Shared test runner config, relative to the workspace root.
pub const JEST_CONFIG: &str = "jest.config.mjs";
/// Test runner entry point, relative to the workspace root.
pub const JEST_BIN: &str = "node_modules/.bin/jest";

/// Builds the target map of one project.
///
/// Holds the values derived once per descriptor; every `*_target` method is
/// pure.
pub struct TargetBuilder<'a> {
    descriptor: &'a ProjectDescriptor,
    /// Project directory to workspace root, e.g. `../..`.
    to_root: String,
    cwd: String,
}

impl<'a> TargetBuilder<'a> {
    pub fn new(descriptor: &'a ProjectDescriptor) -> Self {
        let project_dir = descriptor.project_dir.to_string_lossy();
        let absolute_dir = if is_absolute(&project_dir) {
            descriptor.project_dir.clone()
        } else {
            PathBuf::from(format!(
                "{}/{}",
                descriptor.workspace_root.to_string_lossy(),
                project_dir
            ))
        };

        Self {
            descriptor,
            to_root: relative_path(&absolute_dir, &descriptor.workspace_root),
            cwd: project_dir.into_owned(),
        }
    }

    /// Relative path from the project directory to the workspace root.
    #[inline]
    pub fn to_root(&self) -> &str {
        &self.to_root
    }

    pub fn build(&self) -> TargetManifest {
        let d = self.descriptor;
        let mut targets = IndexMap::new();
        for kind in &d.entries {
            targets.insert(kind.as_str().to_string(), self.target(*kind));
        }

        TargetManifest {
            schema_ref: self.from_root(SCHEMA_PATH),
            name: d.project_name.clone(),
            source_root: format!("{}/{}", self.cwd, d.source_dir),
            project_kind: PROJECT_KIND.to_string(),
            tags: d.tags.clone(),
            targets,
        }
    }

    pub fn target(&self, kind: EntryKind) -> TargetSpec {
        match kind {
            EntryKind::Clean => self.clean_target(),
            EntryKind::Build => self.build_target(),
            EntryKind::Watch => self.watch_target(),
            EntryKind::Test => self.test_target(),
        }
    }

    fn from_root(&self, path: &str) -> String {
        format!("{}/{}", self.to_root, path)
    }

    fn bundle_options(&self, command: String) -> TargetOptions {
        TargetOptions {
            cwd: self.cwd.clone(),
            parallel: Some(false),
            source_map: Some(true),
            commands: vec![command],
        }
    }

    fn rollup_command(&self, project_type: ProjectType) -> String {
        format!(
            "cross-env ROLLUP_CONFIG_TYPE={} rollup -c {}",
            project_type.as_str(),
            self.from_root(ROLLUP_CONFIG)
        )
    }

    fn jest_command(&self, flag: Option<&str>) -> String {
        let mut command = format!(
            "node --experimental-vm-modules {} --config {} --rootDir .",
            self.from_root(JEST_BIN),
            self.from_root(JEST_CONFIG)
        );
        if let Some(flag) = flag {
            command.push(' ');
            command.push_str(flag);
        }
        command
    }

    fn clean_target(&self) -> TargetSpec {
        TargetSpec::run_commands(
            self.bundle_options(format!("rimraf {}", self.descriptor.target_dir)),
        )
    }

    fn build_target(&self) -> TargetSpec {
        // Depends on `clean` even when no clean target is generated.
        let production = ConfigurationOverlay {
            source_map: Some(false),
            env: Some(IndexMap::from([(
                "NODE_ENV".to_string(),
                "production".to_string(),
            )])),
            commands: None,
        };

        TargetSpec::run_commands(
            self.bundle_options(self.rollup_command(self.descriptor.project_type)),
        )
        .with_depends_on([EntryKind::Clean.as_str(), "^build"])
        .with_configuration("production", production)
    }

    fn watch_target(&self) -> TargetSpec {
        let command = format!("{} -w", self.rollup_command(self.descriptor.project_type));
        TargetSpec::run_commands(self.bundle_options(command))
    }

    fn test_target(&self) -> TargetSpec {
        let options = TargetOptions {
            cwd: self.cwd.clone(),
            parallel: None,
            source_map: None,
            commands: vec![self.jest_command(None)],
        };
        let replace_commands = |flag: &str| ConfigurationOverlay {
            commands: Some(vec![self.jest_command(Some(flag))]),
            ..Default::default()
        };

        TargetSpec::run_commands(options)
            .with_configuration("coverage", replace_commands("--coverage"))
            .with_configuration("update", replace_commands("-u"))
    }
}

/// Synthesizes the manifest for `descriptor`.
pub fn synthesize(descriptor: &ProjectDescriptor) -> TargetManifest {
    TargetBuilder::new(descriptor).build()
}

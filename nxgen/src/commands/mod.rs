//! Command implementations for the CLI.

mod generate;
mod scan;
mod tracing_reporter;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nxgen_core::{DescriptorParams, WorkspaceConfig};

use crate::ProjectArgs;

pub use generate::{cmd_generate, cmd_print};
pub use scan::cmd_scan;

/// Makes the workspace root absolute without touching symlinks.
pub fn resolve_workspace_root(root: &Path) -> Result<PathBuf> {
    if root.is_absolute() {
        return Ok(root.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd.join(root))
}

fn descriptor_params(
    workspace_root: &Path,
    config: &WorkspaceConfig,
    args: ProjectArgs,
) -> DescriptorParams {
    DescriptorParams {
        workspace_root: Some(workspace_root.to_path_buf()),
        project_dir: args.project_dir,
        project_name: args.name,
        project_type: args.project_type,
        source_dir: args.source_dir,
        target_dir: args.target_dir,
        entries: args.entries,
        tags: config.merge_tags(args.tags),
    }
}

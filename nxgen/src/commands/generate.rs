//! Single-project commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nxgen_core::fs_utils::to_json_string;
use nxgen_core::{generate, synthesize, JsonStyle, WorkspaceConfig};

use crate::formatting::print_success;
use crate::ProjectArgs;

use super::descriptor_params;
use super::tracing_reporter::TracingReporter;

pub fn cmd_generate(
    workspace_root: &Path,
    project: ProjectArgs,
    output: Option<PathBuf>,
    compact: bool,
) -> Result<()> {
    let config = WorkspaceConfig::load(workspace_root)?;
    let descriptor = descriptor_params(workspace_root, &config, project)
        .validate()
        .context("Invalid project descriptor")?;

    let output = output.unwrap_or_else(|| {
        workspace_root
            .join(&descriptor.project_dir)
            .join(&config.output_file)
    });
    let style = if compact {
        JsonStyle::Compact
    } else {
        JsonStyle::from_pretty(config.pretty)
    };

    let manifest = generate(&descriptor, &output, style, &TracingReporter)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    print_success(&format!(
        "{} ({} targets) -> {}",
        manifest.name,
        manifest.targets.len(),
        output.display()
    ));
    Ok(())
}

pub fn cmd_print(workspace_root: &Path, project: ProjectArgs, compact: bool) -> Result<()> {
    let config = WorkspaceConfig::load(workspace_root)?;
    let descriptor = descriptor_params(workspace_root, &config, project)
        .validate()
        .context("Invalid project descriptor")?;

    let manifest = synthesize(&descriptor);
    print!(
        "{}",
        to_json_string(&manifest, JsonStyle::from_pretty(!compact))?
    );
    Ok(())
}

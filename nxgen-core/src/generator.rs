//! Synthesize-and-write glue used by the CLI.

use std::path::Path;

use crate::builder::synthesize;
use crate::descriptor::ProjectDescriptor;
use crate::error::Result;
use crate::fs_utils::{ensure_dirs, write_json, JsonStyle};
use crate::manifest::TargetManifest;
use crate::reporter::Reporter;

/// Synthesizes the manifest of `descriptor` and writes it to `output`.
pub fn generate(
    descriptor: &ProjectDescriptor,
    output: &Path,
    style: JsonStyle,
    reporter: &dyn Reporter,
) -> Result<TargetManifest> {
    let manifest = synthesize(descriptor);
    reporter.debug(format_args!(
        "{}: {} targets",
        descriptor.project_name,
        manifest.targets.len()
    ));

    ensure_dirs(output, false, reporter)?;
    write_json(output, &manifest, style)?;

    reporter.info(format_args!("generated {}", output.display()));
    Ok(manifest)
}

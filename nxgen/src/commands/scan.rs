//! Workspace-wide generation.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Result};
use nxgen_core::{generate, synthesize, JsonStyle, Scanner, TargetManifest};
use owo_colors::OwoColorize;
use rayon::prelude::*;
use serde_json::json;

use crate::formatting::{format_duration, print_error, print_success, print_summary_box, print_warning};

use super::tracing_reporter::TracingReporter;

struct Outcome {
    config_path: PathBuf,
    output: Option<PathBuf>,
    result: nxgen_core::Result<TargetManifest>,
}

pub fn cmd_scan(
    workspace_root: &Path,
    compact: bool,
    dry_run: bool,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let start = Instant::now();
    let scanner = Scanner::new(workspace_root)?;
    let files = scanner.discover();
    tracing::debug!(
        "found {} descriptor files under {}",
        files.len(),
        scanner.packages_dir().display()
    );

    let style = if compact {
        JsonStyle::Compact
    } else {
        JsonStyle::from_pretty(scanner.config().pretty)
    };

    let outcomes: Vec<Outcome> = files
        .into_par_iter()
        .map(|config_path| match scanner.load(&config_path) {
            Ok(descriptor) => {
                let output = scanner.output_path(&descriptor);
                let result = if dry_run {
                    Ok(synthesize(&descriptor))
                } else {
                    generate(&descriptor, &output, style, &TracingReporter)
                };
                Outcome {
                    config_path,
                    output: Some(output),
                    result,
                }
            }
            Err(e) => Outcome {
                config_path,
                output: None,
                result: Err(e),
            },
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();

    if json {
        let report: Vec<_> = outcomes
            .iter()
            .map(|o| match &o.result {
                Ok(manifest) => json!({
                    "config": o.config_path.display().to_string(),
                    "output": o.output.as_ref().map(|p| p.display().to_string()),
                    "name": manifest.name,
                    "targets": manifest.targets.keys().collect::<Vec<_>>(),
                }),
                Err(e) => json!({
                    "config": o.config_path.display().to_string(),
                    "error": e.to_string(),
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !quiet {
        print_report(&outcomes, dry_run, start.elapsed().as_secs_f64());
    }

    if failed > 0 {
        return Err(anyhow!("{} of {} projects failed", failed, outcomes.len()));
    }
    Ok(())
}

fn print_report(outcomes: &[Outcome], dry_run: bool, elapsed: f64) {
    let title = if dry_run {
        "[Scanning projects (dry run)]"
    } else {
        "[Generating manifests]"
    };
    println!("{}", title.bold().cyan());
    println!();

    if outcomes.is_empty() {
        print_warning("No nxgen.toml files found");
        println!();
        return;
    }

    for outcome in outcomes {
        match &outcome.result {
            Ok(manifest) => {
                let targets: Vec<&str> = manifest.targets.keys().map(String::as_str).collect();
                print_success(&format!("{} [{}]", manifest.name, targets.join(", ")));
            }
            Err(e) => {
                print_error(&format!("{}: {}", outcome.config_path.display(), e));
            }
        }
    }
    println!();

    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    let failed = outcomes.len() - succeeded;
    print_summary_box(
        "Summary",
        &[
            ("Projects", &outcomes.len().to_string()),
            ("Generated", &succeeded.to_string()),
            ("Failed", &failed.to_string()),
            ("Duration", &format_duration(elapsed)),
        ],
    );
}

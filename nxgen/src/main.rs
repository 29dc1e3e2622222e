mod commands;
mod formatting;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nxgen")]
#[command(about = "Generate Nx project.json manifests for monorepo packages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, default_value = ".", global = true)]
    workspace_root: PathBuf,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(short, long, action, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the manifest of a single project.
    Generate {
        #[command(flatten)]
        project: ProjectArgs,
        /// Output file (defaults to `<project-dir>/project.json`).
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, action)]
        compact: bool,
    },
    /// Print the manifest of a single project to stdout.
    Print {
        #[command(flatten)]
        project: ProjectArgs,
        #[arg(long, action)]
        compact: bool,
    },
    /// Generate manifests for every `nxgen.toml` under the packages directory.
    Scan {
        #[arg(long, action)]
        compact: bool,
        #[arg(long, action)]
        dry_run: bool,
        #[arg(long, action)]
        json: bool,
    },
}

#[derive(Args, Clone)]
pub struct ProjectArgs {
    /// Project directory, absolute or relative to the workspace root.
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
    #[arg(long)]
    pub name: Option<String>,
    /// One of: cli, lib, vsc.
    #[arg(long = "type")]
    pub project_type: Option<String>,
    /// Lifecycle entries: clean, build, watch, test.
    #[arg(short, long = "entry", value_delimiter = ',')]
    pub entries: Vec<String>,
    #[arg(short, long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,
    #[arg(long)]
    pub source_dir: Option<String>,
    #[arg(long)]
    pub target_dir: Option<String>,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nxgen={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let workspace_root = commands::resolve_workspace_root(&cli.workspace_root)?;

    match cli.command {
        Commands::Generate {
            project,
            output,
            compact,
        } => commands::cmd_generate(&workspace_root, project, output, compact)?,
        Commands::Print { project, compact } => {
            commands::cmd_print(&workspace_root, project, compact)?
        }
        Commands::Scan {
            compact,
            dry_run,
            json,
        } => commands::cmd_scan(&workspace_root, compact, dry_run, json, cli.quiet)?,
    }

    Ok(())
}

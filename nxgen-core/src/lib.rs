//! Core library for generating Nx project manifests.

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod fs_utils;
pub mod generator;
pub mod manifest;
pub mod path;
pub mod reporter;
pub mod scanner;

pub use builder::{synthesize, TargetBuilder};
pub use config::WorkspaceConfig;
pub use descriptor::{DescriptorParams, EntryKind, ProjectDescriptor, ProjectType};
pub use error::{Error, Result};
pub use fs_utils::{ensure_dirs, write_json, JsonStyle};
pub use generator::generate;
pub use manifest::{ConfigurationOverlay, TargetManifest, TargetOptions, TargetSpec};
pub use path::relative_path;
pub use reporter::{NoopReporter, Reporter};
pub use scanner::Scanner;

//! File-system helpers used when writing manifests to disk.
//!
//! Failures are never caught here; they surface to the caller unchanged.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::reporter::Reporter;

/// Output layout for [`write_json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Two-space indentation.
    #[default]
    Pretty,
    /// Single line.
    Compact,
}

impl JsonStyle {
    #[inline]
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            JsonStyle::Pretty
        } else {
            JsonStyle::Compact
        }
    }
}

/// Creates the directory denoted by `path` if it is missing.
///
/// When `is_dir` is false, `path` names a file and its parent directory is
/// created instead.
pub fn ensure_dirs(path: &Path, is_dir: bool, reporter: &dyn Reporter) -> io::Result<()> {
    let dir = if is_dir {
        path
    } else {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => return Ok(()),
        }
    };

    if dir.exists() {
        return Ok(());
    }

    reporter.verbose(format_args!("mkdirs: {}", dir.display()));
    fs::create_dir_all(dir)
}

/// Serializes `value` into a JSON string terminated by a newline.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> Result<String> {
    let mut content = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(value)?,
        JsonStyle::Compact => serde_json::to_string(value)?,
    };
    content.push('\n');
    Ok(content)
}

/// Writes `value` as UTF-8 JSON to `path`, replacing any existing file.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, style: JsonStyle) -> Result<()> {
    let content = to_json_string(value, style)?;
    fs::write(path, content)?;
    Ok(())
}

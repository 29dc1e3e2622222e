//! Platform-independent relative path computation.
//!
//! Paths are treated lexically: nothing here touches the file system, and
//! both `/` and `\` are accepted as separators on every host so that the
//! generated manifest is identical no matter where it was produced.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/\\]+").expect("separator pattern is valid"));

/// A path split into its root prefix and normalized segments.
#[derive(Debug, PartialEq, Eq)]
struct Segments {
    /// `Some("/")` for unix roots, `Some("C:")` for drive prefixes.
    root: Option<String>,
    parts: Vec<String>,
}

impl Segments {
    fn parse(path: &str) -> Self {
        let mut pieces = SEPARATORS.split(path).peekable();
        let mut root = None;

        if let Some(first) = pieces.peek() {
            if first.is_empty() && !path.is_empty() {
                root = Some("/".to_string());
                pieces.next();
            } else if is_drive(first) {
                root = Some(first.to_ascii_uppercase());
                pieces.next();
            }
        }

        let mut parts: Vec<String> = Vec::new();
        for piece in pieces {
            match piece {
                "" | "." => {}
                ".." => {
                    if parts.last().is_some_and(|p| p != "..") {
                        parts.pop();
                    } else if root.is_none() {
                        parts.push("..".to_string());
                    }
                }
                other => parts.push(other.to_string()),
            }
        }

        Self { root, parts }
    }

    fn render(&self) -> String {
        let body = self.parts.join("/");
        match self.root.as_deref() {
            Some("/") => normalize_separators(&format!("/{}", body)),
            Some(drive) => normalize_separators(&format!("{}/{}", drive, body)),
            None if body.is_empty() => ".".to_string(),
            None => normalize_separators(&body),
        }
    }
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Returns `true` if `path` is absolute under either unix or windows rules.
pub fn is_absolute(path: &str) -> bool {
    path.starts_with('/')
        || path.starts_with('\\')
        || SEPARATORS
            .split(path)
            .next()
            .is_some_and(|first| is_drive(first) && path.len() > 2)
}

/// Collapses runs of `/` and `\` into a single `/` and strips a trailing slash.
///
/// A bare root (`/`) is kept as is.
pub fn normalize_separators(path: &str) -> String {
    let collapsed = SEPARATORS.replace_all(path, "/");
    match collapsed.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => collapsed.into_owned(),
    }
}

/// Computes the relative path from `from` to `to`.
///
/// The result always uses `/`, never ends with a slash and never contains
/// doubled separators. Identical directories yield `"."`. When the paths do
/// not share a root (different drives), the normalized `to` is returned.
///
/// # Examples
///
/// ```
/// use nxgen_core::path::relative_path;
///
/// assert_eq!(relative_path("/ws/packages/foo".as_ref(), "/ws".as_ref()), "../..");
/// ```
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from = Segments::parse(&from.to_string_lossy());
    let to = Segments::parse(&to.to_string_lossy());

    if from.root != to.root {
        return to.render();
    }

    let common = from
        .parts
        .iter()
        .zip(to.parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut parts: Vec<&str> = Vec::with_capacity(from.parts.len() + to.parts.len());
    parts.extend(std::iter::repeat("..").take(from.parts.len() - common));
    parts.extend(to.parts[common..].iter().map(String::as_str));

    if parts.is_empty() {
        ".".to_string()
    } else {
        normalize_separators(&parts.join("/"))
    }
}

use std::fmt;
use std::fs;
use std::sync::Mutex;

use nxgen_core::descriptor::{EntryKind, ProjectDescriptor, ProjectType};
use nxgen_core::{ensure_dirs, generate, synthesize, write_json, JsonStyle, NoopReporter, Reporter};
use tempfile::TempDir;

#[derive(Default)]
struct RecordingReporter {
    messages: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingReporter {
    fn record(&self, level: &'static str, message: fmt::Arguments<'_>) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }

    fn messages(&self) -> Vec<(&'static str, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn verbose(&self, message: fmt::Arguments<'_>) {
        self.record("verbose", message);
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.record("info", message);
    }
}

#[test]
fn test_ensure_dirs_for_file() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("a").join("b").join("project.json");
    let reporter = RecordingReporter::default();

    ensure_dirs(&file, false, &reporter).unwrap();

    let dir = temp_dir.path().join("a").join("b");
    assert!(dir.is_dir());
    assert!(!file.exists());
    assert_eq!(
        reporter.messages(),
        vec![("verbose", format!("mkdirs: {}", dir.display()))]
    );
}

#[test]
fn test_ensure_dirs_existing_is_silent() {
    let temp_dir = TempDir::new().unwrap();
    let reporter = RecordingReporter::default();

    ensure_dirs(temp_dir.path(), true, &reporter).unwrap();
    assert!(reporter.messages().is_empty());
}

#[test]
fn test_ensure_dirs_propagates_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a dir").unwrap();

    assert!(ensure_dirs(&blocker.join("child"), true, &NoopReporter).is_err());
}

#[test]
fn test_write_json_pretty_and_compact() {
    let temp_dir = TempDir::new().unwrap();
    let value = serde_json::json!({ "a": [1, 2] });

    let pretty = temp_dir.path().join("pretty.json");
    write_json(&pretty, &value, JsonStyle::Pretty).unwrap();
    assert_eq!(
        fs::read_to_string(&pretty).unwrap(),
        "{\n  \"a\": [\n    1,\n    2\n  ]\n}\n"
    );

    let compact = temp_dir.path().join("compact.json");
    write_json(&compact, &value, JsonStyle::Compact).unwrap();
    assert_eq!(fs::read_to_string(&compact).unwrap(), "{\"a\":[1,2]}\n");
}

#[test]
fn test_generate_writes_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let descriptor = ProjectDescriptor::new(root, root.join("packages/foo"), "foo", ProjectType::Lib)
        .with_entries([EntryKind::Clean, EntryKind::Build]);
    let output = root.join("packages/foo/project.json");
    let reporter = RecordingReporter::default();

    let manifest = generate(&descriptor, &output, JsonStyle::Pretty, &reporter).unwrap();

    let written: nxgen_core::TargetManifest =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written, manifest);
    assert_eq!(manifest, synthesize(&descriptor));
    assert!(reporter
        .messages()
        .iter()
        .any(|(level, msg)| *level == "info" && msg.contains("project.json")));
}

use std::path::Path;

use nxgen_core::path::{is_absolute, normalize_separators, relative_path};

fn rel(from: &str, to: &str) -> String {
    relative_path(Path::new(from), Path::new(to))
}

#[test]
fn test_relative_to_ancestor() {
    assert_eq!(rel("/ws/packages/foo", "/ws"), "../..");
    assert_eq!(rel("/ws/foo", "/ws"), "..");
}

#[test]
fn test_relative_to_descendant() {
    assert_eq!(rel("/ws", "/ws/packages/foo"), "packages/foo");
}

#[test]
fn test_relative_to_sibling() {
    assert_eq!(rel("/ws/packages/foo", "/ws/tools/bar"), "../../tools/bar");
}

#[test]
fn test_same_directory() {
    assert_eq!(rel("/ws", "/ws"), ".");
    assert_eq!(rel("/ws/", "/ws"), ".");
}

#[test]
fn test_trailing_and_doubled_separators() {
    assert_eq!(rel("/ws//packages///foo/", "/ws/"), "../..");
}

#[test]
fn test_backslash_separators() {
    assert_eq!(rel(r"C:\ws\packages\foo", r"C:\ws"), "../..");
    assert_eq!(rel(r"C:\ws\\packages", r"c:/ws"), "..");
}

#[test]
fn test_dot_segments() {
    assert_eq!(rel("/ws/packages/./foo/../bar", "/ws"), "../..");
}

#[test]
fn test_different_roots() {
    assert_eq!(rel(r"C:\ws\foo", r"D:\ws"), "D:/ws");
}

#[test]
fn test_normalize_separators() {
    assert_eq!(normalize_separators(r"..\\..//a/"), "../../a");
    assert_eq!(normalize_separators("a/b"), "a/b");
    assert_eq!(normalize_separators("/"), "/");
    assert_eq!(normalize_separators("//"), "/");
}

#[test]
fn test_is_absolute() {
    assert!(is_absolute("/ws"));
    assert!(is_absolute(r"\ws"));
    assert!(is_absolute(r"C:\ws"));
    assert!(is_absolute("c:/ws"));
    assert!(!is_absolute("packages/foo"));
    assert!(!is_absolute("."));
    assert!(!is_absolute("C:"));
}

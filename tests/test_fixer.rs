// Copyright (C) Brian G. Milnes 2025

//! End-to-end tests for the rewrite driver

mod common;

use cmpfix::fix_file;
use common::{sort_program, write_go_file};
use std::fs;

#[test]
fn test_rewrites_file_in_place() {
    let source = sort_program("func(a, b Person) bool { return a.Name < b.Name }");
    let (_dir, path) = write_go_file("people.go", &source);

    let report = fix_file(&path, false).unwrap();
    assert_eq!(report.rewrites.len(), 1);
    assert!(report.written);

    let out = fs::read_to_string(&path).unwrap();
    assert!(out.contains("func(a, b Person) int"));
    assert!(out.contains("return cmp.Compare(a.Name, b.Name)"));
    assert!(out.contains("\t\"cmp\"\n\t\"fmt\"\n\t\"slices\""));
}

#[test]
fn test_untouched_file_is_not_written() {
    let source = r#"package main

func main() {
	println("nothing to sort here")
}
"#;
    let (_dir, path) = write_go_file("plain.go", source);

    let report = fix_file(&path, false).unwrap();
    assert!(report.rewrites.is_empty());
    assert!(!report.written);

    // Byte-for-byte unchanged
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_conservative_body_is_not_written() {
    let source = sort_program("func(a, b Person) bool { return a.Name < b.Name && a.Id < b.Id }");
    let (_dir, path) = write_go_file("people.go", &source);

    let report = fix_file(&path, false).unwrap();
    assert!(report.rewrites.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let source = sort_program("func(a, b Person) bool { return a.Name > b.Name }");
    let (_dir, path) = write_go_file("people.go", &source);

    let report = fix_file(&path, true).unwrap();
    assert_eq!(report.rewrites.len(), 1);
    assert!(!report.written);
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn test_second_run_is_noop() {
    let source = sort_program("func(a, b Person) bool { return a.Name < b.Name }");
    let (_dir, path) = write_go_file("people.go", &source);

    fix_file(&path, false).unwrap();
    let once = fs::read_to_string(&path).unwrap();

    let report = fix_file(&path, false).unwrap();
    assert!(report.rewrites.is_empty());
    assert!(!report.written);
    assert_eq!(fs::read_to_string(&path).unwrap(), once);
}

#[test]
fn test_directory_is_silent_noop() {
    let dir = tempfile::TempDir::new().unwrap();

    let report = fix_file(dir.path(), false).unwrap();
    assert!(report.rewrites.is_empty());
    assert!(!report.written);
}

#[test]
fn test_non_go_suffix_is_an_error() {
    let (_dir, path) = write_go_file("people.txt", "not go at all");

    assert!(fix_file(&path, false).is_err());
}

#[test]
fn test_unparseable_file_is_an_error() {
    let (_dir, path) = write_go_file("broken.go", "package main\n\nfunc broken( {\n");

    assert!(fix_file(&path, false).is_err());
}

#[cfg(unix)]
#[test]
fn test_write_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let source = sort_program("func(a, b Person) bool { return a.Id == b.Id }");
    let (_dir, path) = write_go_file("people.go", &source);
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

    let report = fix_file(&path, false).unwrap();
    assert!(report.written);

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_report_serializes_to_json() {
    let source = sort_program("func(a, b Person) bool { return a.Id != b.Id }");
    let (_dir, path) = write_go_file("people.go", &source);

    let report = fix_file(&path, true).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"operator\":\"!=\""));
    assert!(json.contains("cmp.Compare(b.Id, a.Id)"));
}

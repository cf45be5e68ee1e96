// Copyright (C) Brian G. Milnes 2025

//! Common test utilities for integration tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a Go source file into a fresh temp directory
///
/// Returns the directory guard together with the file path; dropping the
/// guard removes the directory.
pub fn write_go_file(name: &str, source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, source).expect("Failed to write Go file");
    (dir, path)
}

/// A complete Go file sorting people with the given comparator body
pub fn sort_program(comparator: &str) -> String {
    format!(
        r#"package main

import (
	"fmt"
	"slices"
)

type Person struct {{
	Name string
	Id   int
}}

func main() {{
	people := []Person{{{{Name: "b"}}, {{Name: "a"}}}}
	slices.SortFunc(people, {comparator})
	fmt.Println(people)
}}
"#
    )
}

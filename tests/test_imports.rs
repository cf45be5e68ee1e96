// Copyright (C) Brian G. Milnes 2025

//! Tests for the import fixer

use cmpfix::{apply_edits, ensure_import, fix_source, import_paths, parse_source};

fn add_cmp(source: &str) -> Option<String> {
    let tree = parse_source(source).unwrap();
    ensure_import(tree.root_node(), source, "cmp")
        .map(|edit| apply_edits(source, &[edit]))
}

#[test]
fn test_import_paths_collects_all_forms() {
    let source = r#"package main

import (
	"fmt"
	s "slices"
	`strings`
)
"#;

    let tree = parse_source(source).unwrap();
    let paths = import_paths(tree.root_node(), source);
    assert_eq!(paths, vec!["fmt", "slices", "strings"]);
}

#[test]
fn test_existing_import_is_noop() {
    let source = r#"package main

import (
	"cmp"
	"slices"
)
"#;

    assert!(add_cmp(source).is_none());
}

#[test]
fn test_existing_aliased_import_is_noop() {
    let source = r#"package main

import c "cmp"
"#;

    assert!(add_cmp(source).is_none());
}

#[test]
fn test_inserts_sorted_into_grouped_import() {
    let source = r#"package main

import (
	"fmt"
	"slices"
)
"#;

    let out = add_cmp(source).unwrap();
    assert!(out.contains("\t\"cmp\"\n\t\"fmt\"\n\t\"slices\""));
}

#[test]
fn test_appends_after_group_when_sorted_last() {
    let source = r#"package main

import (
	"bufio"
	"bytes"
)
"#;

    let out = add_cmp(source).unwrap();
    assert!(out.contains("\t\"bytes\"\n\t\"cmp\""));
}

#[test]
fn test_adds_declaration_after_single_import() {
    let source = r#"package main

import "slices"

func main() {}
"#;

    let out = add_cmp(source).unwrap();
    assert!(out.contains("import \"slices\"\nimport \"cmp\""));
}

#[test]
fn test_adds_declaration_when_no_imports() {
    let source = r#"package main

func main() {}
"#;

    let out = add_cmp(source).unwrap();
    assert!(out.contains("package main\n\nimport \"cmp\""));
}

#[test]
fn test_import_added_once_for_many_call_sites() {
    let source = r#"package main

import "slices"

func sortBoth(xs, ys []string) {
	slices.SortFunc(xs, func(a, b string) bool { return a < b })
	slices.SortFunc(ys, func(a, b string) bool { return a > b })
}
"#;

    let (rewrites, new_source) = fix_source(source).unwrap();
    let out = new_source.unwrap();
    assert_eq!(rewrites.len(), 2);
    assert_eq!(out.matches("\"cmp\"").count(), 1);
}

#[test]
fn test_rerun_does_not_duplicate_import() {
    let source = r#"package main

import "slices"

func sortNames(names []string) {
	slices.SortFunc(names, func(a, b string) bool { return a < b })
}
"#;

    let (_, first) = fix_source(source).unwrap();
    let first = first.unwrap();
    assert_eq!(first.matches("\"cmp\"").count(), 1);

    // The rewritten comparator no longer matches the boolean filter
    let (rewrites, second) = fix_source(&first).unwrap();
    assert!(rewrites.is_empty());
    assert!(second.is_none());
}

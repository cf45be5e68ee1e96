// Copyright (C) Brian G. Milnes 2025

//! Rewrite driver: one file in, one report out
//!
//! Orchestrates a single file's processing: validate the path, parse,
//! run matcher -> classifier -> rewriter over the whole tree exactly once,
//! then commit the collected edits and write back only when something was
//! actually rewritten. A failure at any step leaves the on-disk file
//! untouched; all edit application happens in memory first.

pub mod driver {
    use crate::ast_utils::ast_utils::apply_edits;
    use crate::classifier::classifier::classify;
    use crate::imports::imports::ensure_import;
    use crate::matcher::matcher::find_sort_call_sites;
    use crate::parser::parser::parse_source;
    use crate::rewriter::rewriter::{rewrite_comparator, Rewrite, CMP_PACKAGE};
    use anyhow::{Context, Result};
    use serde::{Deserialize, Serialize};
    use std::fs;
    use std::path::{Path, PathBuf};

    /// File suffix the validator accepts
    pub const GO_SUFFIX: &str = "go";

    /// Outcome of processing one file
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct FixReport {
        pub path: PathBuf,
        pub rewrites: Vec<Rewrite>,
        pub written: bool,
    }

    impl FixReport {
        fn untouched(path: &Path) -> Self {
            FixReport {
                path: path.to_path_buf(),
                rewrites: Vec::new(),
                written: false,
            }
        }
    }

    /// Rewrite sort comparators in Go source text
    ///
    /// The pure core of the tool. Returns the applied rewrite records and,
    /// when at least one return was rewritten, the new source text with the
    /// `cmp` import ensured. `None` means the input must not be rewritten
    /// at all.
    pub fn fix_source(source: &str) -> Result<(Vec<Rewrite>, Option<String>)> {
        let tree = parse_source(source)?;
        let root = tree.root_node();

        let mut edits = Vec::new();
        let mut rewrites = Vec::new();

        for site in find_sort_call_sites(root, source) {
            let Some(comparator) = classify(site.comparator, source) else {
                continue;
            };
            let result = rewrite_comparator(&comparator, source);
            edits.extend(result.edits);
            rewrites.extend(result.rewrites);
        }

        if rewrites.is_empty() {
            return Ok((rewrites, None));
        }

        if let Some(import_edit) = ensure_import(root, source, CMP_PACKAGE) {
            edits.push(import_edit);
        }

        let new_source = apply_edits(source, &edits);
        Ok((rewrites, Some(new_source)))
    }

    /// Rewrite sort comparators in a Go file on disk
    ///
    /// A directory path is a silent no-op; any suffix other than `.go` is
    /// an error. The file is written back, preserving its permission bits,
    /// only when at least one rewrite applied and `dry_run` is false.
    pub fn fix_file(path: &Path, dry_run: bool) -> Result<FixReport> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to stat file: {}", path.display()))?;
        if metadata.is_dir() {
            return Ok(FixReport::untouched(path));
        }
        if path.extension().and_then(|e| e.to_str()) != Some(GO_SUFFIX) {
            return Err(anyhow::anyhow!("Not a Go file: {}", path.display()));
        }

        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let (rewrites, fixed) = fix_source(&source)
            .with_context(|| format!("Failed to process file: {}", path.display()))?;

        let mut written = false;
        if let Some(fixed) = fixed {
            if !dry_run {
                fs::write(path, &fixed)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
                fs::set_permissions(path, metadata.permissions()).with_context(|| {
                    format!("Failed to restore permissions: {}", path.display())
                })?;
                written = true;
            }
        }

        Ok(FixReport {
            path: path.to_path_buf(),
            rewrites,
            written,
        })
    }
}

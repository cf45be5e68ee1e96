// Copyright (C) Brian G. Milnes 2025

//! Cmpfix - AST-based Go code fix tool
//!
//! This library parses Go code and rewrites boolean sort comparators
//! passed to slices.SortFunc / slices.SortStableFunc into three-way
//! cmp.Compare comparators, using the syntax tree instead of regex-based
//! approaches.

pub mod ast_utils;
pub mod classifier;
pub mod driver;
pub mod imports;
pub mod logging;
pub mod matcher;
pub mod parser;
pub mod rewriter;
pub mod tool_runner;

use anyhow::Result;
use std::path::Path;

// Re-export commonly used items
pub use ast_utils::ast_utils::{apply_edits, find_nodes, named_children, node_text, TextEdit};
pub use classifier::classifier::{classify, Comparator};
pub use driver::driver::{fix_file, fix_source, FixReport};
pub use imports::imports::{ensure_import, import_paths};
pub use matcher::matcher::{find_sort_call_sites, is_sort_func_name, CallSite};
pub use parser::parser::parse_source;
pub use rewriter::rewriter::{has_logical_operator, rewrite_comparator, RelOp, Rewrite};

/// Parse a Go file and display its syntax tree
pub fn parse(file: &Path) -> Result<()> {
    let source = std::fs::read_to_string(file)?;
    let tree = parse_source(&source)?;

    println!("{}", tree.root_node().to_sexp());

    Ok(())
}

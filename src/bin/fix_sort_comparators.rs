// Copyright (C) Brian G. Milnes 2025

//! Fix: rewrite boolean sort comparators to cmp.Compare.
//!
//! Rewrites `slices.SortFunc(xs, func(a, b T) bool { return a.X < b.X })`
//! into `slices.SortFunc(xs, func(a, b T) int { return cmp.Compare(a.X, b.X) })`
//! and adds the "cmp" import. Comparator bodies outside the recognized
//! shapes are left exactly as written.
//!
//! Binary: cmpfix-fix-sort-comparators

use anyhow::Result;
use clap::Parser;
use cmpfix::fix_file;
use cmpfix::tool_runner::tool_runner::{run_tool, ToolConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fix-sort-comparators")]
#[command(about = "Rewrite boolean sort comparators to cmp.Compare", long_about = None)]
struct Args {
    /// Path to the Go file to fix
    file: PathBuf,

    /// Dry run - show what would be changed without modifying the file
    #[arg(short, long)]
    dry_run: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.format == "json" {
        let report = fix_file(&args.file, args.dry_run)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let base_dir = args
        .file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let config = ToolConfig::new("fix-sort-comparators", base_dir).with_logging();
    run_tool(config, |logger| {
        logger.log(&format!("processing {} ...", args.file.display()));
        if args.dry_run {
            logger.log("[DRY RUN MODE - No files will be modified]");
        }

        let report = fix_file(&args.file, args.dry_run)?;

        if report.rewrites.is_empty() {
            logger.log("✓ No boolean sort comparators found");
        } else {
            for rewrite in &report.rewrites {
                logger.log(&format!("  {rewrite}"));
            }
            if report.written {
                logger.log(&format!(
                    "  ✓ Rewrote {} return(s), ensured \"cmp\" import",
                    report.rewrites.len()
                ));
            }
        }

        Ok(format!(
            "SUMMARY:\n  Returns rewritten: {}\n  File written: {}",
            report.rewrites.len(),
            report.written
        ))
    })
}

// Copyright (C) Brian G. Milnes 2025

//! Parse and display the syntax tree of a Go file
//!
//! Binary: cmpfix-parse

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "parse")]
#[command(about = "Parse and display the syntax tree of a Go file", long_about = None)]
struct Args {
    /// Path to the Go file to parse
    file: PathBuf,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    // Print directory context
    let parent_dir = args.file.parent().unwrap_or_else(|| std::path::Path::new("."));
    println!("Entering directory '{}'", parent_dir.display());
    println!();

    println!("Parsing file: {:?}", args.file);

    cmpfix::parse(&args.file)?;

    println!();
    println!("Completed in {}ms", start.elapsed().as_millis());

    Ok(())
}

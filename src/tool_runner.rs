// Copyright (C) Brian G. Milnes 2025

//! Tool runner infrastructure for cmpfix binaries
//!
//! Provides a consistent wrapper for cmpfix tools that handles:
//! - Timing measurement
//! - Directory context for Emacs compile-mode
//! - Optional logging to files
//! - Standard error handling

pub mod tool_runner {
    use crate::logging::logging::ToolLogger;
    use anyhow::Result;
    use std::path::PathBuf;
    use std::time::Instant;

    /// Configuration for a tool run
    pub struct ToolConfig {
        /// Name of the tool (for logging directory)
        pub tool_name: String,
        /// Base directory to display in "Entering directory"
        pub base_dir: PathBuf,
        /// Whether to enable file logging
        pub enable_logging: bool,
    }

    impl ToolConfig {
        pub fn new(tool_name: &str, base_dir: PathBuf) -> Self {
            ToolConfig {
                tool_name: tool_name.to_string(),
                base_dir,
                enable_logging: false,
            }
        }

        /// Same config with file logging turned on
        pub fn with_logging(mut self) -> Self {
            self.enable_logging = true;
            self
        }
    }

    /// Run a tool with standard timing, context, and optional logging
    ///
    /// Usage:
    /// ```no_run
    /// use cmpfix::tool_runner::tool_runner::{run_tool, ToolConfig};
    ///
    /// let config = ToolConfig::new("fix-sort-comparators", ".".into());
    /// run_tool(config, |logger| {
    ///     logger.log("Starting rewrite...");
    ///     Ok("Summary: 1 file checked".to_string())
    /// }).unwrap();
    /// ```
    pub fn run_tool<F>(config: ToolConfig, tool_fn: F) -> Result<()>
    where
        F: FnOnce(&mut ToolLogger) -> Result<String>,
    {
        let start = Instant::now();

        println!("Entering directory '{}'", config.base_dir.display());
        println!();

        let mut logger = if config.enable_logging {
            ToolLogger::new(&config.tool_name)
        } else {
            ToolLogger::new_disabled()
        };

        let summary = tool_fn(&mut logger)?;

        println!();
        println!("{summary}");
        println!("Completed in {}ms", start.elapsed().as_millis());

        if config.enable_logging {
            logger.finalize(&summary);
        }

        Ok(())
    }
}

//! # find-node-modules
//!
//! Recursively finds `node_modules` directories and reports how much disk
//! space each one takes.
//!
//! ## Usage
//!
//! ```bash
//! # Scan the current directory (or `search_path` from the config file)
//! find-node-modules
//!
//! # Scan a specific directory
//! find-node-modules ~/dev
//!
//! # `path|size` lines for a cleanup script
//! find-node-modules --json-output ~/dev
//! ```

mod cli;

use std::{
    io::{self, ErrorKind},
    process::exit,
};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use find_node_modules::{FileConfig, OutputFormat, Reporter, Scanner, init_colors};

/// Entry point for the find-node-modules application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, validates the search path, then streams one line per
/// `node_modules` directory to stdout as the scan finds it.
///
/// # Errors
///
/// Returns an error if the search path does not exist or stdout cannot be
/// written to.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    init_colors();

    // No config warnings for scripts that asked for machine output
    let flag_format = args.output_format(&FileConfig::default());
    let file_config = load_config(flag_format == OutputFormat::Plain);

    let search_path = args.search_path(&file_config);
    let output_format = args.output_format(&file_config);
    let scan_options = args.scan_options(&file_config);

    let matches = Scanner::new(scan_options).scan(&search_path)?;
    let mut reporter = Reporter::new(io::stdout().lock(), output_format);

    for found in matches {
        match reporter.report(&found) {
            Ok(()) => {}
            // The reading end went away (e.g. piped into `head`)
            Err(err) if err.kind() == ErrorKind::BrokenPipe => return Ok(()),
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(warn: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if warn {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}

//! Command-line interface definition and argument parsing.
//!
//! This module defines the command-line arguments using the
//! [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::Parser;

use find_node_modules::config::{FileConfig, ScanOptions, expand_tilde};
use find_node_modules::output::OutputFormat;

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "find-node-modules")]
#[command(about = "Find all node_modules directories and their sizes")]
#[command(version)]
pub struct Cli {
    /// Directory to search in
    ///
    /// The tree below this directory is searched for `node_modules`
    /// directories. Falls back to `search_path` from the config file, then to
    /// the current directory.
    search_path: Option<PathBuf>,

    /// Output in machine-readable format
    ///
    /// Prints one `path|size` line per directory (size in MB with two
    /// decimals) for shell scripts to parse, instead of colored text.
    #[arg(long)]
    json_output: bool,

    /// Show access errors that are skipped while scanning
    ///
    /// Unreadable directories and files count as zero bytes either way; this
    /// only prints them to stderr.
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// Resolve the directory to scan.
    ///
    /// Priority: CLI argument > config file `search_path` > current directory (`.`).
    /// Tilde expansion is applied to the path from the config file.
    #[must_use]
    pub fn search_path(&self, config: &FileConfig) -> PathBuf {
        if let Some(ref path) = self.search_path {
            return path.clone();
        }

        config
            .search_path
            .as_deref()
            .map_or_else(|| PathBuf::from("."), expand_tilde)
    }

    /// Resolve the output format; the flag wins, then the config file.
    #[must_use]
    pub fn output_format(&self, config: &FileConfig) -> OutputFormat {
        OutputFormat::from_json_flag(self.json_output || config.output.json_output.unwrap_or(false))
    }

    /// Build [`ScanOptions`] from CLI args and config file.
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        ScanOptions {
            verbose: self.verbose || config.scanning.verbose.unwrap_or(false),
        }
    }
}

//! Directory scanning and `node_modules` detection.
//!
//! This module walks a directory tree looking for directories named
//! `node_modules`. Each one found is measured and handed back to the caller
//! straight away, and the walker is told not to descend into it, so
//! dependency trees are never walked twice and nested `node_modules`
//! directories are never reported on their own.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::ScanOptions,
    utils::{bytes_to_mb, measure_dir},
};

/// Directory name the scanner looks for.
pub const NODE_MODULES: &str = "node_modules";

/// A `node_modules` directory found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeModulesMatch {
    /// Path of the directory, as reached from the scan root
    pub path: PathBuf,

    /// Total size of the regular files inside it, in bytes
    pub bytes: u64,
}

impl NodeModulesMatch {
    /// Size of the directory in megabytes (MiB), unrounded.
    #[must_use]
    pub fn size_mb(&self) -> f64 {
        bytes_to_mb(self.bytes)
    }
}

/// Directory scanner for `node_modules` directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// Start scanning the directory tree rooted at `root`.
    ///
    /// The returned iterator is lazy: the tree is walked, and each match is
    /// measured, only as the caller pulls items from it. Matches come out in
    /// the order the filesystem lists directory entries.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` does not exist. Nothing is traversed in
    /// that case. Errors met later in the walk never surface here; they are
    /// skipped (and printed to stderr in verbose mode).
    pub fn scan(&self, root: &Path) -> Result<Matches> {
        if !root.exists() {
            bail!("Path '{}' does not exist.", root.display());
        }

        Ok(Matches {
            walker: WalkDir::new(root).into_iter(),
            verbose: self.scan_options.verbose,
        })
    }
}

/// Lazy stream of [`NodeModulesMatch`] values produced by [`Scanner::scan`].
#[derive(Debug)]
pub struct Matches {
    walker: walkdir::IntoIter,
    verbose: bool,
}

impl Matches {
    fn report_error(&self, error: &str) {
        if self.verbose {
            eprintln!("{}", error.red());
        }
    }
}

impl Iterator for Matches {
    type Item = NodeModulesMatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    self.report_error(&err.to_string());
                    continue;
                }
            };

            if !is_node_modules_child(&entry) {
                continue;
            }

            // Prune. A symlink is never descended into, and calling
            // skip_current_dir for it would skip its parent's remaining entries.
            if entry.file_type().is_dir() {
                self.walker.skip_current_dir();
            }

            let size = measure_dir(entry.path());
            for error in &size.errors {
                self.report_error(error);
            }

            return Some(NodeModulesMatch {
                path: entry.into_path(),
                bytes: size.bytes,
            });
        }
    }
}

/// Check whether a walked entry is a `node_modules` directory below the root.
///
/// The scan root itself never counts. A symlink named `node_modules` counts
/// when it resolves to a directory.
fn is_node_modules_child(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || entry.file_name() != NODE_MODULES {
        return false;
    }

    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

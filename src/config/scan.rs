//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how directories are scanned
//! and what is reported while the scan runs.

/// Configuration for directory scanning behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether to print traversal errors that are otherwise skipped silently
    pub verbose: bool,
}

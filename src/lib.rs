//! # find-node-modules
//!
//! Library behind the `find-node-modules` command. It walks a directory tree,
//! finds every `node_modules` directory, and measures how much disk space each
//! one uses.
//!
//! ## Main Parts
//!
//! - [`scanner`] - Lazy tree walk that yields matches and never descends into them
//! - [`utils::size`] - Directory size measurement that tolerates unreadable entries
//! - [`output`] - Plain and machine (`path|size`) line formats and the streaming [`Reporter`]
//! - [`config`] - Scan options and the optional TOML config file

pub mod config;
pub mod output;
pub mod scanner;
pub mod utils;

pub use config::{FileConfig, ScanOptions};
pub use output::{OutputFormat, Reporter, init_colors};
pub use scanner::{Matches, NodeModulesMatch, Scanner};

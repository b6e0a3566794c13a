//! Configuration for scanning and reporting.
//!
//! Settings come from three layers, in order of precedence: command-line
//! arguments, the optional config file ([`FileConfig`]), and built-in defaults.

pub mod file;
pub mod scan;

pub use file::{FileConfig, expand_tilde};
pub use scan::ScanOptions;

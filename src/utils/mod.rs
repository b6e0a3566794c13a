//! Utility functions and helpers.
//!
//! This module contains helpers used throughout the application, such as
//! measuring directory sizes on disk.

pub mod size;

pub use size::{BYTES_PER_MB, DirSize, bytes_to_mb, calculate_dir_size, dir_size_mb, measure_dir};

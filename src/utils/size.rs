//! Directory size measurement.
//!
//! This module walks a directory tree and sums the sizes of the regular files
//! inside it. Entries that cannot be read are counted as zero bytes and the
//! walk carries on, so measuring a directory never fails.

use std::path::Path;

use walkdir::WalkDir;

/// Number of bytes in one megabyte as reported by this tool (1 MiB).
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Result of measuring a directory tree.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirSize {
    /// Sum of the lengths of every regular file found, in bytes.
    pub bytes: u64,

    /// Entries that could not be read or stat'ed during the walk.
    ///
    /// Each of them contributed zero bytes to [`DirSize::bytes`].
    pub errors: Vec<String>,
}

/// Walk `path` and sum the sizes of all regular files below it.
///
/// Errors are handled per entry: a directory that cannot be listed, a file
/// that disappears before it can be stat'ed, or a symlink loop only removes
/// that entry (or subtree) from the total. The message is kept in
/// [`DirSize::errors`] and the walk continues with the remaining entries.
///
/// Symlinks below `path` are not followed and add nothing, whether they point
/// at a file or a directory. If `path` is a regular file, its
/// own length is returned; if it does not exist, the result is zero bytes with
/// one recorded error.
#[must_use]
pub fn measure_dir(path: &Path) -> DirSize {
    let mut size = DirSize::default();

    for entry in WalkDir::new(path) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                size.errors.push(err.to_string());
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => size.bytes = size.bytes.saturating_add(metadata.len()),
            Err(err) => size.errors.push(err.to_string()),
        }
    }

    size
}

/// Calculate the total size of a directory and all its contents, in bytes.
///
/// Returns `0` if the path does not exist or cannot be traversed at the root level.
#[must_use]
pub fn calculate_dir_size(path: &Path) -> u64 {
    measure_dir(path).bytes
}

/// Calculate the total size of a directory in megabytes (MiB).
///
/// No rounding is applied; callers format the value for display.
#[must_use]
pub fn dir_size_mb(path: &Path) -> f64 {
    bytes_to_mb(calculate_dir_size(path))
}

/// Convert a byte count into megabytes (MiB).
#[must_use]
#[allow(clippy::cast_precision_loss)] // exact below 2^53 bytes
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

//! Result formatting and streaming output.
//!
//! Every match is turned into a single line as soon as it is found. Two
//! encodings exist:
//!
//! - **Plain**: `Found: <path> (<size> MB)` in yellow, for people.
//! - **Machine**: `<path>|<size>`, for scripts. The `|` separator and the
//!   two-decimal size are a stable contract with downstream cleanup tools.
//!
//! Sizes are formatted with `{:.2}`, which rounds the exact binary value to
//! the nearest hundredth with ties going to the even digit.

use std::{
    borrow::Cow,
    env,
    ffi::OsStr,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::Once,
};

use colored::Colorize;

use crate::scanner::NodeModulesMatch;

/// Field separator used in machine output.
pub const MACHINE_SEPARATOR: char = '|';

static COLOR_INIT: Once = Once::new();

/// Prepare terminal color support for this process.
///
/// Runs at most once per process; later calls do nothing. A non-empty
/// `CLICOLOR_FORCE` other than `0` turns colors on; otherwise they are turned
/// off when stdout is not a terminal. On Windows ANSI escape processing is
/// switched on first (or colors are turned off if that fails).
pub fn init_colors() {
    COLOR_INIT.call_once(|| {
        #[cfg(windows)]
        {
            if colored::control::set_virtual_terminal(true).is_err() {
                colored::control::set_override(false);
            }
        }

        if color_forced(env::var_os("CLICOLOR_FORCE").as_deref()) {
            colored::control::set_override(true);
        } else if !io::stdout().is_terminal() {
            colored::control::set_override(false);
        }
    });
}

/// Whether a `CLICOLOR_FORCE` value requests colors (set and not `"0"`).
fn color_forced(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v != "0")
}

/// Raw bytes of a path, so machine output names exactly the directory found.
#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.to_string_lossy().into_owned().into_bytes())
}

/// How each match is written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, human-readable line
    #[default]
    Plain,

    /// `path|size` line for consumption by other tools
    Machine,
}

impl OutputFormat {
    /// Select the format from the `--json-output` flag.
    #[must_use]
    pub const fn from_json_flag(json_output: bool) -> Self {
        if json_output { Self::Machine } else { Self::Plain }
    }

    /// Render one result line for display, without the trailing newline.
    ///
    /// Paths that are not valid UTF-8 are shown lossily; use
    /// [`OutputFormat::write_line`] when the exact path matters.
    #[must_use]
    pub fn format_line(self, path: &Path, size_mb: f64) -> String {
        match self {
            Self::Plain => format!("Found: {} ({size_mb:.2} MB)", path.display())
                .yellow()
                .to_string(),
            Self::Machine => format!("{}{MACHINE_SEPARATOR}{size_mb:.2}", path.display()),
        }
    }

    /// Render a scanner match.
    #[must_use]
    pub fn format_match(self, found: &NodeModulesMatch) -> String {
        self.format_line(&found.path, found.size_mb())
    }

    /// Write one line, including the newline, to `writer`.
    ///
    /// Machine lines carry the path's raw bytes on Unix, so a path that is
    /// not valid UTF-8 still names an existing directory.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from `writer`.
    pub fn write_line<W: Write>(
        self,
        writer: &mut W,
        path: &Path,
        size_mb: f64,
    ) -> io::Result<()> {
        match self {
            Self::Plain => writeln!(writer, "{}", self.format_line(path, size_mb)),
            Self::Machine => {
                writer.write_all(&path_bytes(path))?;
                writeln!(writer, "{MACHINE_SEPARATOR}{size_mb:.2}")
            }
        }
    }
}

/// Writes formatted matches to an output stream, one line each.
///
/// The stream is flushed after every line so results show up while the scan
/// is still running.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `writer` in the given format.
    #[must_use]
    pub const fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    /// Write one match and flush.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn report(&mut self, found: &NodeModulesMatch) -> io::Result<()> {
        self.format
            .write_line(&mut self.writer, &found.path, found.size_mb())?;
        self.writer.flush()
    }
}

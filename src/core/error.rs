//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::constants::USAGE;

/// Font lookup / parse faults.
#[derive(Debug)]
pub enum FontError {
    NotFound { name: String },
    Parse { name: String, reason: String },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::NotFound { name } => write!(f, "font `{name}` not found"),
            FontError::Parse { name, reason } => {
                write!(f, "font `{name}` could not be parsed: {reason}")
            }
        }
    }
}
impl Error for FontError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum BannerError {
    /// Reading standard input failed part-way.
    Io(io::Error),
    /// No text from any source in argument mode.
    Usage,
    /// Writing the banner to stdout failed.
    Write(io::Error),
    Font(FontError),
    /// Strict rendering met a character the font has no glyph for.
    Unsupported { ch: char },
}

impl BannerError {
    /// Process exit status for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        1
    }

    /// Usage and stdin failures are reported on stdout, like the original tool.
    #[must_use]
    pub const fn reports_to_stdout(&self) -> bool {
        matches!(self, BannerError::Io(_) | BannerError::Usage)
    }
}

impl fmt::Display for BannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BannerError::Io(e) => write!(f, "Error reading stdin: {e}"),
            BannerError::Usage => f.write_str(USAGE),
            BannerError::Write(e) => write!(f, "Error writing output: {e}"),
            BannerError::Font(e) => write!(f, "{e}"),
            BannerError::Unsupported { ch } => {
                write!(f, "character {ch:?} (U+{:04X}) is not in the font", u32::from(*ch))
            }
        }
    }
}

impl Error for BannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BannerError::Io(e) | BannerError::Write(e) => Some(e),
            BannerError::Font(e) => Some(e),
            _ => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for BannerError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<FontError> for BannerError {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_error_prints_usage_line() {
        assert_eq!(BannerError::Usage.to_string(), USAGE);
        assert!(BannerError::Usage.reports_to_stdout());
    }

    #[test]
    fn io_error_is_prefixed() {
        let e = BannerError::from(io::Error::new(io::ErrorKind::UnexpectedEof, "pipe closed"));
        assert_eq!(e.to_string(), "Error reading stdin: pipe closed");
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn font_errors_go_to_stderr() {
        let e = BannerError::from(FontError::NotFound {
            name: "nope".into(),
        });
        assert!(!e.reports_to_stdout());
        assert!(e.to_string().contains("`nope`"));
    }

    #[test]
    fn unsupported_names_the_codepoint() {
        let e = BannerError::Unsupported { ch: 'é' };
        assert!(e.to_string().contains("U+00E9"));
    }
}

//! Width helpers: banner extent + terminal size plumbing.

use terminal_size::{Width, terminal_size};

/// Widest row of a rendered banner, in characters.
#[inline]
#[must_use]
pub fn banner_width(banner: &str) -> usize {
    banner
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
}

/// Columns of the terminal on stdout, `None` when stdout is not a terminal.
#[inline]
#[must_use]
pub fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| usize::from(w))
}

/// How many columns the banner spills past `cols`, if any.
#[inline]
#[must_use]
pub fn overflow(banner: &str, cols: usize) -> Option<usize> {
    banner_width(banner).checked_sub(cols).filter(|&n| n > 0)
}

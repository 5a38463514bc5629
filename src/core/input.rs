//! Works out *what* to render: the clock, piped stdin, or the argument list.

use std::io::{self, IsTerminal, Read};

use chrono::{Local, NaiveTime};
use tracing::debug;

use crate::core::{constants::TIME_FORMAT, error::BannerError};

/// Where the text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Clock,
    Stdin,
    Args,
}

/// A readable stream that knows whether a person is typing into it.
pub trait InputSource {
    /// `true` for a terminal / character device, `false` for pipes and files.
    fn is_interactive(&self) -> bool;
    /// Drain the stream. Invalid UTF-8 is replaced, not rejected.
    fn read_all(&mut self) -> io::Result<String>;
}

/// Source of the current local time of day.
pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// The process' standard input.
pub struct StdinSource {
    inner: io::Stdin,
}

impl StdinSource {
    #[must_use]
    pub fn new() -> Self {
        Self { inner: io::stdin() }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for StdinSource {
    fn is_interactive(&self) -> bool {
        self.inner.is_terminal() || is_char_device(&self.inner)
    }

    fn read_all(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.inner.lock().read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// `/dev/null` and friends count as interactive, same as a tty.
#[cfg(unix)]
fn is_char_device(stdin: &io::Stdin) -> bool {
    use std::os::{fd::AsFd, unix::fs::FileTypeExt};

    stdin
        .as_fd()
        .try_clone_to_owned()
        .map(std::fs::File::from)
        .and_then(|f| f.metadata())
        .is_ok_and(|m| m.file_type().is_char_device())
}

#[cfg(not(unix))]
fn is_char_device(_stdin: &io::Stdin) -> bool {
    false
}

/// Wall clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Format a time of day as `HH:MM:SS`.
#[inline]
#[must_use]
pub fn format_time(t: NaiveTime) -> String {
    t.format(TIME_FORMAT).to_string()
}

/// Resolve the text to render. First match wins:
///
/// 1. `show_time` - the clock; stdin and `words` are left untouched.
/// 2. non-interactive input - the whole stream, outer whitespace trimmed.
///    An empty result is passed through as-is.
/// 3. `words` joined by single spaces, or [`BannerError::Usage`] when empty.
pub fn resolve_text<I, C>(
    show_time: bool,
    words: &[String],
    input: &mut I,
    clock: &C,
) -> Result<(String, Origin), BannerError>
where
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
{
    if show_time {
        let text = format_time(clock.now());
        debug!(%text, "rendering current time");
        return Ok((text, Origin::Clock));
    }

    if !input.is_interactive() {
        let raw = input.read_all()?;
        let text = raw.trim().to_owned();
        debug!(bytes = raw.len(), chars = text.chars().count(), "read piped input");
        return Ok((text, Origin::Stdin));
    }

    if words.is_empty() {
        return Err(BannerError::Usage);
    }
    let text = words.join(" ");
    debug!(words = words.len(), "rendering arguments");
    Ok((text, Origin::Args))
}

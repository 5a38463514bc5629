use std::{ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::core::constants::{FONT_DIR_ENV, SINGLE_DASH_FLAGS, VALUE_FLAGS};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "ascii",
    version,
    about = "Render text, piped input or the current time as an ASCII-art banner",
    after_help = "Piped input takes precedence over TEXT; -time takes precedence over both."
)]
pub struct Cli {
    /// Font to use for ASCII art (name, or path to a .flf file)
    #[arg(short, long)]
    pub font: Option<String>,

    /// Display time in ASCII art
    #[arg(short, long)]
    pub time: bool,

    /// Extra directory searched for `<font>.flf`
    #[arg(long, value_name = "DIR", env = FONT_DIR_ENV)]
    pub font_dir: Option<PathBuf>,

    /// List the fonts found in the search path and exit
    #[arg(long)]
    pub list_fonts: bool,

    /// Emit diagnostics on stderr
    #[arg(long)]
    pub debug: bool,

    /// Text to render (ignored when input is piped)
    #[arg(value_name = "TEXT", trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl Cli {
    /// Parse the process arguments, accepting `-font`-style long flags.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }
}

/// Rewrite single-dash long flags (`-font x`, `-time`) to clap's `--` form.
///
/// Rewriting stops at the first positional argument or `--`, so words such as
/// `-time` after the text are rendered rather than parsed.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut it = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = it.next().into_iter().collect();
    let mut expect_value = false;

    for arg in it.by_ref() {
        if expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }
        let Some(s) = arg.to_str() else {
            out.push(arg);
            break;
        };
        if s == "--" || s == "-" || !s.starts_with('-') {
            out.push(arg);
            break;
        }

        let (name, inline_value) = match s.trim_start_matches('-').split_once('=') {
            Some((n, _)) => (n, true),
            None => (s.trim_start_matches('-'), false),
        };
        expect_value = !inline_value && VALUE_FLAGS.contains(&name);

        if !s.starts_with("--") && SINGLE_DASH_FLAGS.contains(&name) {
            out.push(format!("-{s}").into());
        } else {
            out.push(arg);
        }
    }
    out.extend(it);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(args: &[&str]) -> Vec<String> {
        normalize_args(args.iter().copied())
            .into_iter()
            .map(|a| a.into_string().unwrap())
            .collect()
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(normalize_args(args.iter().copied()))
    }

    #[test]
    fn single_dash_long_flags_are_rewritten() {
        assert_eq!(
            norm(&["ascii", "-font", "slant", "-time"]),
            ["ascii", "--font", "slant", "--time"]
        );
        assert_eq!(norm(&["ascii", "-font=slant"]), ["ascii", "--font=slant"]);
    }

    #[test]
    fn single_dash_help_is_rewritten() {
        assert_eq!(norm(&["ascii", "-help"]), ["ascii", "--help"]);
        assert_eq!(norm(&["ascii", "-h"]), ["ascii", "-h"]);
    }

    #[test]
    fn single_dash_help_reaches_clap() {
        let err = Cli::try_parse_from(normalize_args(["ascii", "-help"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn font_value_is_not_mistaken_for_text() {
        assert_eq!(
            norm(&["ascii", "-font", "-time", "hi"]),
            ["ascii", "--font", "-time", "hi"]
        );
    }

    #[test]
    fn rewriting_stops_at_first_word() {
        assert_eq!(
            norm(&["ascii", "hello", "-time"]),
            ["ascii", "hello", "-time"]
        );
        assert_eq!(norm(&["ascii", "--", "-time"]), ["ascii", "--", "-time"]);
    }

    #[test]
    fn short_and_double_dash_pass_through() {
        assert_eq!(norm(&["ascii", "-t", "--font", "x"]), ["ascii", "-t", "--font", "x"]);
    }

    #[test]
    fn go_style_invocation_parses() {
        let cli = parse(&["ascii", "-font", "slant", "hello", "world"]);
        assert_eq!(cli.font.as_deref(), Some("slant"));
        assert!(!cli.time);
        assert_eq!(cli.words, ["hello", "world"]);
    }

    #[test]
    fn flags_after_text_are_text() {
        let cli = parse(&["ascii", "hello", "-time"]);
        assert!(!cli.time);
        assert_eq!(cli.words, ["hello", "-time"]);
    }

    #[test]
    fn defaults() {
        let cli = parse(&["ascii", "-time"]);
        assert!(cli.time);
        assert_eq!(cli.font, None);
        assert!(cli.words.is_empty());
        assert!(!cli.list_fonts);
    }
}

//! A collection of constants.

/// Printed when there is nothing to render.
pub const USAGE: &str = "Usage: [-font <font>] ./ascii <string>";

/// Zero-padded 24-hour clock, e.g. `07:04:05`.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// The font embedded in `figlet-rs`, used when no font is requested.
pub const DEFAULT_FONT: &str = "standard";

/// File extension of FIGlet font files.
pub const FONT_EXTENSION: &str = "flf";

/// Environment variable naming an extra font directory.
pub const FONT_DIR_ENV: &str = "ASCII_FONT_DIR";

/// System font directories, searched after any user supplied one.
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/figlet",
    "/usr/local/share/figlet",
    "/usr/share/figlet/fonts",
];

/// Long flags the original tool spelled with a single dash.
pub const SINGLE_DASH_FLAGS: &[&str] = &["font", "time", "font-dir", "list-fonts", "debug", "help"];

/// Flags whose value is the following argument.
pub const VALUE_FLAGS: &[&str] = &["font", "font-dir", "f"];

//! FIGfont lookup: embedded default, explicit paths, then font directories.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use figlet_rs::FIGfont;
use tracing::debug;

use crate::core::{
    constants::{DEFAULT_FONT, FONT_EXTENSION, SYSTEM_FONT_DIRS},
    error::FontError,
};

/// Ordered list of directories searched for `<name>.flf`.
#[derive(Debug, Clone)]
pub struct FontSource {
    dirs: Vec<PathBuf>,
}

impl FontSource {
    /// `extra` (from `--font-dir` / the environment) is searched first.
    #[must_use]
    pub fn new(extra: Option<PathBuf>) -> Self {
        let dirs = extra
            .into_iter()
            .chain(SYSTEM_FONT_DIRS.iter().map(PathBuf::from))
            .collect();
        Self { dirs }
    }

    /// Search exactly `dirs`, nothing else.
    #[must_use]
    pub fn with_dirs(dirs: Vec<PathBuf>) -> Self {
        Self { dirs }
    }

    #[must_use]
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Where `name` would be loaded from. `None` for the embedded font and for
    /// names that resolve nowhere.
    #[must_use]
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        if is_default(name) {
            return None;
        }
        let direct = Path::new(name);
        if looks_like_path(name) && direct.is_file() {
            return Some(direct.to_path_buf());
        }
        self.dirs
            .iter()
            .map(|d| d.join(name).with_extension(FONT_EXTENSION))
            .find(|p| p.is_file())
    }

    pub fn load(&self, name: &str) -> Result<FIGfont, FontError> {
        if is_default(name) {
            debug!("using embedded standard font");
            return FIGfont::standard().map_err(|reason| FontError::Parse {
                name: DEFAULT_FONT.into(),
                reason,
            });
        }
        let path = self.locate(name).ok_or_else(|| FontError::NotFound {
            name: name.to_owned(),
        })?;
        debug!(path = %path.display(), "loading font");

        // Plenty of .flf files in the wild are Latin-1.
        let bytes = fs::read(&path).map_err(|e| FontError::Parse {
            name: name.to_owned(),
            reason: e.to_string(),
        })?;
        FIGfont::from_content(&String::from_utf8_lossy(&bytes)).map_err(|reason| {
            FontError::Parse {
                name: name.to_owned(),
                reason,
            }
        })
    }

    /// Every font name found in the search path, plus the embedded one.
    #[must_use]
    pub fn available(&self) -> Vec<String> {
        let mut names = BTreeSet::from([DEFAULT_FONT.to_owned()]);
        for dir in &self.dirs {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            for path in entries.flatten().map(|e| e.path()) {
                let is_font = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(FONT_EXTENSION));
                if let (true, Some(stem)) = (is_font, path.file_stem()) {
                    names.insert(stem.to_string_lossy().into_owned());
                }
            }
        }
        names.into_iter().collect()
    }
}

impl Default for FontSource {
    fn default() -> Self {
        Self::new(None)
    }
}

#[inline]
fn is_default(name: &str) -> bool {
    name.is_empty() || name.eq_ignore_ascii_case(DEFAULT_FONT)
}

#[inline]
fn looks_like_path(name: &str) -> bool {
    name.contains(std::path::MAIN_SEPARATOR)
        || name.contains('/')
        || Path::new(name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(FONT_EXTENSION))
}

/// A tiny two-row font whose glyphs are the characters themselves.
#[cfg(test)]
pub(crate) fn echo_font_source() -> &'static str {
    include_str!("../../tests/fixtures/echo.flf")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dir_with_echo_font() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("echo.flf"), echo_font_source()).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a font").unwrap();
        dir
    }

    #[test]
    fn empty_and_standard_use_embedded_font() {
        let src = FontSource::with_dirs(Vec::new());
        assert!(src.locate("").is_none());
        assert!(src.load("").is_ok());
        assert!(src.load("Standard").is_ok());
    }

    #[test]
    fn finds_font_by_name_in_dir() {
        let dir = dir_with_echo_font();
        let src = FontSource::with_dirs(vec![dir.path().to_path_buf()]);
        assert_eq!(src.locate("echo"), Some(dir.path().join("echo.flf")));
        assert!(src.load("echo").is_ok());
    }

    #[test]
    fn loads_font_by_path() {
        let dir = dir_with_echo_font();
        let path = dir.path().join("echo.flf");
        let src = FontSource::with_dirs(Vec::new());
        assert!(src.load(path.to_str().unwrap()).is_ok());
    }

    #[test]
    fn unknown_font_is_not_found() {
        let src = FontSource::with_dirs(Vec::new());
        match src.load("no-such-font") {
            Err(FontError::NotFound { name }) => assert_eq!(name, "no-such-font"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn garbage_font_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("junk.flf"), "this is not a figlet font").unwrap();
        let src = FontSource::with_dirs(vec![dir.path().to_path_buf()]);
        assert!(matches!(src.load("junk"), Err(FontError::Parse { .. })));
    }

    #[test]
    fn lists_fonts_sorted_with_default() {
        let dir = dir_with_echo_font();
        let src = FontSource::with_dirs(vec![dir.path().to_path_buf()]);
        assert_eq!(src.available(), vec!["echo".to_owned(), "standard".to_owned()]);
    }

    #[test]
    fn extra_dir_is_searched_first() {
        let src = FontSource::new(Some(PathBuf::from("/tmp/fonts")));
        assert_eq!(src.dirs()[0], PathBuf::from("/tmp/fonts"));
        assert_eq!(src.dirs().len(), 1 + SYSTEM_FONT_DIRS.len());
    }
}

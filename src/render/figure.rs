//! Text -> banner, delegated to `figlet-rs`.

use figlet_rs::FIGfont;
use tracing::debug;

use crate::{
    core::{error::BannerError, request::RenderRequest},
    render::font::FontSource,
};

/// Anything that can turn text into a multi-line banner.
pub trait FigureRenderer {
    /// `strict` rejects characters the font has no glyph for instead of
    /// dropping them.
    fn render(&self, text: &str, font: &str, strict: bool) -> Result<String, BannerError>;

    #[inline]
    fn render_request(&self, req: &RenderRequest) -> Result<String, BannerError> {
        self.render(&req.text, req.font_name(), req.strict)
    }
}

/// FIGlet renderer backed by a [`FontSource`].
#[derive(Debug, Clone, Default)]
pub struct FigletRenderer {
    fonts: FontSource,
}

impl FigletRenderer {
    #[must_use]
    pub fn new(fonts: FontSource) -> Self {
        Self { fonts }
    }
}

impl FigureRenderer for FigletRenderer {
    fn render(&self, text: &str, font: &str, strict: bool) -> Result<String, BannerError> {
        let figfont = self.fonts.load(font)?;
        let banner = render_with(&figfont, text, strict)?;
        debug!(font, rows = banner.lines().count(), "rendered banner");
        Ok(banner)
    }
}

/// Render each line of `text` as its own block, stacked top to bottom.
/// An empty line becomes a blank block as tall as the font; an empty `text`
/// renders nothing.
pub fn render_with(font: &FIGfont, text: &str, strict: bool) -> Result<String, BannerError> {
    let mut out = String::new();
    if text.is_empty() {
        return Ok(out);
    }
    for line in text.split('\n').map(|l| l.trim_end_matches('\r')) {
        let line = if line.is_empty() { " " } else { line };
        if strict {
            if let Some(ch) = line.chars().find(|&c| !has_glyph(font, c)) {
                return Err(BannerError::Unsupported { ch });
            }
        }
        if let Some(figure) = font.convert(line) {
            out.push_str(&figure.to_string());
        }
    }
    Ok(out)
}

#[inline]
fn has_glyph(font: &FIGfont, c: char) -> bool {
    let mut buf = [0u8; 4];
    font.convert(c.encode_utf8(&mut buf)).is_some()
}

//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use self::core::{
    constants::{DEFAULT_FONT, USAGE},
    error::{BannerError, FontError},
    input::{Clock, InputSource, LocalClock, Origin, StdinSource, resolve_text},
    request::{RenderRequest, RequestBuilder},
};

pub use render::{FigletRenderer, FigureRenderer, FontSource, render_with};

/// Render `text` with `font` (empty for the default) using the system font
/// directories.
pub fn render_text(text: &str, font: &str) -> Result<String, BannerError> {
    let req = RenderRequest::builder(text).font(font).build();
    FigletRenderer::default().render_request(&req)
}

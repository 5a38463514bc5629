use std::io::{self, Write};

use tracing::{debug, warn};

use crate::{
    core::{
        error::BannerError,
        geometry::{overflow, terminal_width},
        input::{Clock, InputSource, LocalClock, StdinSource, resolve_text},
        request::RenderRequest,
    },
    render::{FigletRenderer, FigureRenderer, FontSource},
};

use super::parse::Cli;

/// Resolve the text, render it, print it.
pub fn banner(cli: &Cli) -> Result<(), BannerError> {
    let renderer = FigletRenderer::new(FontSource::new(cli.font_dir.clone()));
    let banner = banner_with(cli, &mut StdinSource::new(), &LocalClock, &renderer)?;

    if let Some(cols) = terminal_width() {
        if let Some(extra) = overflow(&banner, cols) {
            warn!(cols, extra, "banner is wider than the terminal");
        }
    }
    write_out(&mut io::stdout().lock(), &banner)
}

/// [`banner`] with every collaborator injected; returns the rendered text.
pub fn banner_with<I, C, R>(
    cli: &Cli,
    input: &mut I,
    clock: &C,
    renderer: &R,
) -> Result<String, BannerError>
where
    I: InputSource + ?Sized,
    C: Clock + ?Sized,
    R: FigureRenderer + ?Sized,
{
    let (text, origin) = resolve_text(cli.time, &cli.words, input, clock)?;
    debug!(?origin, font = ?cli.font, "resolved input");

    let req = RenderRequest::builder(text)
        .font_opt(cli.font.as_deref())
        .strict(false)
        .build();
    renderer.render_request(&req)
}

/// Print the names of every discoverable font.
pub fn list_fonts(cli: &Cli) -> Result<(), BannerError> {
    let fonts = FontSource::new(cli.font_dir.clone());
    debug!(dirs = ?fonts.dirs(), "listing fonts");
    let mut listing = fonts.available().join("\n");
    listing.push('\n');
    write_out(&mut io::stdout().lock(), &listing)
}

/// A closed pipe downstream (`ascii hi | head -1`) is not an error.
fn write_out<W: Write>(out: &mut W, s: &str) -> Result<(), BannerError> {
    match out.write_all(s.as_bytes()).and_then(|()| out.flush()) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(BannerError::Write(e)),
        _ => Ok(()),
    }
}

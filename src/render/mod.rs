pub mod figure;
pub mod font;

pub use figure::{FigletRenderer, FigureRenderer, render_with};
pub use font::FontSource;

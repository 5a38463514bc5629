//! Aggregates the input / request / error layer.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod request;

// re-export frequently-used items for convenience
pub use constants::{DEFAULT_FONT, USAGE};
pub use error::{BannerError, FontError};
pub use input::{Clock, InputSource, LocalClock, Origin, StdinSource, resolve_text};
pub use request::{RenderRequest, RequestBuilder};

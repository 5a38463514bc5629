mod handlers;
pub mod parse;

pub use handlers::banner_with;
pub use parse::{Cli, normalize_args};

use crate::core::error::BannerError;

pub fn run(cli: &Cli) -> Result<(), BannerError> {
    if cli.list_fonts {
        handlers::list_fonts(cli)
    } else {
        handlers::banner(cli)
    }
}

//! PDF backend for the worksheet layout.

mod canvas;
mod error;
mod fonts;
mod images;

pub use canvas::PdfCanvas;
pub use error::PdfError;
pub use fonts::{EmbeddedFont, FontSet, PdfFont};

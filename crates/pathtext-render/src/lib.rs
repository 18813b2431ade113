#![forbid(unsafe_code)]

//! `usvg`-backed collaborators for `pathtext-core`: a [`UsvgShaper`] that replaces `<text>` with
//! glyph outlines and a [`UsvgBounds`] path measurer used for cropping.

pub mod bounds;
pub mod format;
pub mod shaper;

pub use bounds::UsvgBounds;
pub use format::FontFormat;
pub use shaper::{UsvgSession, UsvgShaper};

use pathtext_core::Pipeline;
use pathtext_core::loader::{FileFontLoader, FontLoader};

/// A pipeline wired to the `usvg` collaborators.
pub type UsvgPipeline<L = FileFontLoader> = Pipeline<UsvgShaper<L>, UsvgBounds>;

pub fn usvg_pipeline() -> UsvgPipeline {
    Pipeline::new(UsvgShaper::new(), UsvgBounds::new())
}

pub fn usvg_pipeline_with_loader<L: FontLoader>(loader: L) -> UsvgPipeline<L> {
    Pipeline::new(UsvgShaper::with_loader(loader), UsvgBounds::new())
}

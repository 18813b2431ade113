#![forbid(unsafe_code)]

//! Text-to-outline SVG conversion (headless).
//!
//! Design goals:
//! - a conversion always yields a displayable SVG document, degrading through font fallbacks,
//!   built-in glyph outlines and finally the unconverted text
//! - glyph shaping and geometry are collaborators behind traits ([`GlyphShaper`],
//!   [`BoundsProvider`]) so the pipeline stays testable without a font stack
//! - runtime-agnostic async APIs (no specific executor required)

pub mod assemble;
pub mod bounds;
pub mod config;
pub mod crop;
pub mod display;
pub mod download;
pub mod error;
pub mod loader;
pub mod model;
pub mod object_url;
pub mod pipeline;
pub mod resolve;
pub mod session;
pub mod shaper;
pub mod synthetic;
pub mod xml;

pub use bounds::{BoundsProvider, NoBounds, Rect};
pub use config::{ConvertOptions, RunOrdering, TerminalStage};
pub use display::{OutputSlot, RunTicket};
pub use download::{download_file_name, save_download};
pub use error::{CropError, Error, Result, ShapeError};
pub use loader::{FetchError, FileFontLoader, FontLoader};
pub use model::{
    AttemptOutcome, Conversion, ConversionAttempt, ConversionStage, FontOrigin, FontSource,
    RenderRequest, SourceEncoding,
};
pub use object_url::{ObjectUrl, ObjectUrlRegistry};
pub use pipeline::{Pipeline, PipelineOutcome, PipelineRun, PlannedAttempt, plan_attempts};
pub use session::{DefaultFont, DiskFontFile, FontUpload, InMemoryFontFile, SessionState};
pub use shaper::{
    FontFace, FontRegistry, FontSourceRef, GlyphShaper, MissingGlyphPolicy, ShapeOptions,
    ShapingSession,
};

#[cfg(test)]
mod tests;

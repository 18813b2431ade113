//! Contract of the glyph shaping collaborator.
//!
//! A shaper opens a [`ShapingSession`] over one SVG document and a font registration map. The
//! session replaces every `<text>` element with path outlines and hands back the rewritten
//! document. Sessions hold collaborator resources and must be [`destroy`](ShapingSession::destroy)ed
//! by the caller on every branch.

use crate::error::ShapeError;
use crate::object_url::ObjectUrlRegistry;
use std::collections::BTreeMap;
use std::sync::Arc;

/// What the collaborator does with a character the registered font cannot render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingGlyphPolicy {
    Error,
    /// Drop the character and lay out the rest.
    SkipChar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSourceRef {
    Binary(Arc<[u8]>),
    ObjectUrl(String),
    RemoteUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFace {
    pub weight: u16,
    pub italic: bool,
    pub source: FontSourceRef,
}

impl FontFace {
    pub fn regular(source: FontSourceRef) -> Self {
        Self {
            weight: 400,
            italic: false,
            source,
        }
    }
}

/// Family name to the faces registered under it.
pub type FontRegistry = BTreeMap<String, Vec<FontFace>>;

#[derive(Debug, Clone)]
pub struct ShapeOptions {
    pub fonts: FontRegistry,
    pub missing_glyphs: MissingGlyphPolicy,
    /// Emit one `<path>` per glyph instead of one per text element.
    pub split: bool,
    /// Fractional digits kept in emitted path data.
    pub decimals: u8,
    /// Resolves `blob:` sources in `fonts`.
    pub object_urls: Arc<ObjectUrlRegistry>,
}

pub trait GlyphShaper {
    type Session: ShapingSession;

    fn open(&self, svg: &str, options: ShapeOptions) -> Result<Self::Session, ShapeError>;
}

#[allow(async_fn_in_trait)]
pub trait ShapingSession {
    /// Replaces all text with paths. Returns the number of text elements that were processed.
    async fn replace_all(&mut self) -> Result<usize, ShapeError>;

    /// The current document, including any replacements made so far.
    fn svg_string(&self) -> String;

    /// Releases collaborator resources held by the session.
    fn destroy(self);
}

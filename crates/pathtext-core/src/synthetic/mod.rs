//! Font-free fallback rendering.
//!
//! When no shaping attempt produces geometry, text is laid out from the built-in outline table
//! in [`table`]: one fixed-width slot per character, centered on the placeholder canvas.

pub mod table;

use crate::model::RenderRequest;
use crate::xml::{SVG_NS, escape_xml, fmt};
use std::fmt::Write as _;

pub use table::{GRID_SIZE, lookup, outline};

/// Position of one emitted glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub d: &'static str,
}

/// Places every non-blank character of `text` on a `width` × `height` canvas.
///
/// Characters without an outline still advance the pen, so the remaining glyphs keep their
/// positions. The starting x may be negative when the text is wider than the canvas.
pub fn layout(text: &str, font_size: f64, width: f64, height: f64) -> Vec<GlyphPlacement> {
    let scale = font_size / GRID_SIZE;
    let advance = GRID_SIZE * scale;
    let total_advance = text.chars().count() as f64 * advance;
    let start_x = (width - total_advance) / 2.0;
    let y = height / 2.0 - (GRID_SIZE / 2.0) * scale;

    text.chars()
        .enumerate()
        .filter_map(|(i, ch)| {
            let d = lookup(ch);
            if d.is_empty() {
                return None;
            }
            Some(GlyphPlacement {
                ch,
                x: start_x + i as f64 * advance,
                y,
                scale,
                d,
            })
        })
        .collect()
}

/// Renders the request with the built-in outlines on the placeholder's canvas.
pub fn render(request: &RenderRequest, width: f64, height: f64) -> String {
    let (w, h) = (fmt(width), fmt(height));
    let mut out = format!(
        r#"<svg width="{w}" height="{h}" viewBox="0 0 {w} {h}" xmlns="{SVG_NS}"><g fill="{}" fill-rule="evenodd">"#,
        escape_xml(&request.color)
    );
    for glyph in layout(&request.text, request.font_size, width, height) {
        let _ = write!(
            out,
            r#"<path d="{}" transform="translate({}, {}) scale({})"/>"#,
            glyph.d,
            fmt(glyph.x),
            fmt(glyph.y),
            fmt(glyph.scale)
        );
    }
    out.push_str("</g></svg>");
    out
}

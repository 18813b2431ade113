//! Glyph shaping on top of `usvg`'s text layout.
//!
//! Registered fonts are loaded into a private `fontdb` database under the family they are
//! registered as; no system fonts are consulted. `usvg` lays out every `<text>`, and each
//! positioned glyph is outlined with `ttf-parser` and written back out as a plain `<path>`.

use crate::format::{mime_admits, sniff};
use pathtext_core::loader::{FileFontLoader, FontLoader};
use pathtext_core::shaper::{
    FontFace, FontSourceRef, GlyphShaper, MissingGlyphPolicy, ShapeOptions, ShapingSession,
};
use pathtext_core::xml::{SVG_NS, escape_xml, fmt_decimals};
use pathtext_core::ShapeError;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::sync::Arc;
use usvg::fontdb;

/// A `<text>` element of the input: its first font family and its character data.
#[derive(Debug, Clone)]
struct TextRun {
    family: String,
    fill: Option<String>,
    content: String,
}

#[derive(Debug, Clone)]
struct RootAttributes {
    width: Option<String>,
    height: Option<String>,
    view_box: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UsvgShaper<L = FileFontLoader> {
    loader: Arc<L>,
    strict_mime: bool,
}

impl UsvgShaper<FileFontLoader> {
    pub fn new() -> Self {
        Self::with_loader(FileFontLoader::new())
    }
}

impl Default for UsvgShaper<FileFontLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: FontLoader> UsvgShaper<L> {
    /// Shaper that fetches remote font sources through `loader`.
    pub fn with_loader(loader: L) -> Self {
        Self {
            loader: Arc::new(loader),
            strict_mime: true,
        }
    }

    /// When enabled (the default), an object URL whose MIME type contradicts the font data is
    /// rejected instead of being loaded anyway.
    pub fn strict_mime(mut self, strict: bool) -> Self {
        self.strict_mime = strict;
        self
    }
}

impl<L: FontLoader> GlyphShaper for UsvgShaper<L> {
    type Session = UsvgSession<L>;

    fn open(&self, svg: &str, options: ShapeOptions) -> Result<UsvgSession<L>, ShapeError> {
        let doc = roxmltree::Document::parse(svg).map_err(|e| ShapeError::InvalidDocument {
            message: e.to_string(),
        })?;
        let root = doc.root_element();
        let root_attributes = RootAttributes {
            width: root.attribute("width").map(str::to_string),
            height: root.attribute("height").map(str::to_string),
            view_box: root.attribute("viewBox").map(str::to_string),
        };
        let texts = doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "text")
            .map(|n| TextRun {
                family: n
                    .attribute("font-family")
                    .map(first_family)
                    .unwrap_or_default(),
                fill: n.attribute("fill").map(str::to_string),
                content: n
                    .descendants()
                    .filter(|d| d.is_text())
                    .filter_map(|d| d.text())
                    .collect(),
            })
            .collect();

        Ok(UsvgSession {
            svg: svg.to_string(),
            root_attributes,
            texts,
            options,
            loader: Arc::clone(&self.loader),
            strict_mime: self.strict_mime,
            output: None,
        })
    }
}

pub struct UsvgSession<L> {
    svg: String,
    root_attributes: RootAttributes,
    texts: Vec<TextRun>,
    options: ShapeOptions,
    loader: Arc<L>,
    strict_mime: bool,
    output: Option<String>,
}

fn first_family(list: &str) -> String {
    list.split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

impl<L: FontLoader> UsvgSession<L> {
    async fn face_bytes(&self, face: &FontFace) -> Result<Arc<[u8]>, ShapeError> {
        match &face.source {
            FontSourceRef::Binary(data) => Ok(Arc::clone(data)),
            FontSourceRef::ObjectUrl(url) => {
                let blob = self.options.object_urls.resolve(url).ok_or_else(|| {
                    ShapeError::UnresolvedObjectUrl { url: url.clone() }
                })?;
                if self.strict_mime {
                    if let Some(detected) = sniff(&blob.data) {
                        if !mime_admits(&blob.mime, detected) {
                            return Err(ShapeError::MimeMismatch {
                                mime: blob.mime,
                                detected: detected.to_string(),
                            });
                        }
                    }
                }
                Ok(blob.data)
            }
            FontSourceRef::RemoteUrl(url) => self
                .loader
                .fetch(url)
                .await
                .map(Arc::from)
                .map_err(|e| ShapeError::Fetch {
                    url: url.clone(),
                    message: e.to_string(),
                }),
        }
    }

    /// Loads every registered face into `db`, renamed to its registered family.
    async fn load_fonts(
        &self,
        db: &mut fontdb::Database,
    ) -> Result<BTreeMap<String, Vec<Arc<[u8]>>>, ShapeError> {
        let mut loaded = BTreeMap::new();
        for (family, faces) in &self.options.fonts {
            for face in faces {
                let bytes = self.face_bytes(face).await?;
                if ttf_parser::Face::parse(&bytes, 0).is_err() {
                    let reason = match sniff(&bytes) {
                        Some(format) => format!("{format} data is not supported"),
                        None => "unrecognized font data".to_string(),
                    };
                    return Err(ShapeError::UnreadableFont { reason });
                }

                let source = fontdb::Source::Binary(Arc::new(Arc::clone(&bytes)));
                let ids = db.load_font_source(source);
                if ids.is_empty() {
                    return Err(ShapeError::UnreadableFont {
                        reason: "no faces found".to_string(),
                    });
                }
                for id in ids {
                    let Some(mut info) = db.face(id).cloned() else {
                        continue;
                    };
                    info.families
                        .insert(0, (family.clone(), fontdb::Language::English_UnitedStates));
                    info.weight = fontdb::Weight(face.weight);
                    info.style = if face.italic {
                        fontdb::Style::Italic
                    } else {
                        fontdb::Style::Normal
                    };
                    db.remove_face(id);
                    db.push_face_info(info);
                }
                tracing::trace!(family = %family, bytes = bytes.len(), "font face registered");
                loaded
                    .entry(family.clone())
                    .or_insert_with(Vec::new)
                    .push(bytes);
            }
        }
        Ok(loaded)
    }

    fn check_coverage(&self, loaded: &BTreeMap<String, Vec<Arc<[u8]>>>) -> Result<(), ShapeError> {
        for run in &self.texts {
            let Some(faces) = loaded.get(&run.family) else {
                return Err(ShapeError::UnknownFamily {
                    family: run.family.clone(),
                });
            };
            let parsed: Vec<_> = faces
                .iter()
                .filter_map(|bytes| ttf_parser::Face::parse(bytes, 0).ok())
                .collect();
            for ch in run.content.chars().filter(|c| !c.is_whitespace() && !c.is_control()) {
                if !parsed.iter().any(|face| face.glyph_index(ch).is_some()) {
                    return Err(ShapeError::MissingGlyph {
                        family: run.family.clone(),
                        ch,
                    });
                }
            }
        }
        Ok(())
    }

    fn write_document(&self, tree: &usvg::Tree) -> String {
        let mut out = String::from("<svg");
        let attrs = &self.root_attributes;
        for (name, value) in [
            ("width", &attrs.width),
            ("height", &attrs.height),
            ("viewBox", &attrs.view_box),
        ] {
            if let Some(value) = value {
                let _ = write!(out, r#" {name}="{}""#, escape_xml(value));
            }
        }
        let _ = write!(out, r#" xmlns="{SVG_NS}">"#);

        let mut texts = self.texts.iter();
        let mut text_nodes = Vec::new();
        collect_text_nodes(tree.root(), &mut text_nodes);
        for text in text_nodes {
            let fill = texts
                .next()
                .and_then(|run| run.fill.as_deref())
                .unwrap_or("black");
            let _ = write!(out, r#"<g fill="{}">"#, escape_xml(fill));
            let outlines = self.glyph_outlines(tree.fontdb(), text);
            if self.options.split {
                for d in &outlines {
                    let _ = write!(out, r#"<path d="{d}"/>"#);
                }
            } else if !outlines.is_empty() {
                let _ = write!(out, r#"<path d="{}"/>"#, outlines.join(" "));
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");
        out
    }

    /// Path data of every drawable glyph in `text`, in layout order.
    fn glyph_outlines(&self, db: &fontdb::Database, text: &usvg::Text) -> Vec<String> {
        let mut outlines = Vec::new();
        for span in text.layouted().iter().filter(|span| span.visible) {
            for glyph in &span.positioned_glyphs {
                let notdef = glyph.id.0 == 0;
                if notdef && self.options.missing_glyphs == MissingGlyphPolicy::SkipChar {
                    tracing::trace!(text = %glyph.text, "skipping character without a glyph");
                    continue;
                }
                let Some(path) = glyph_outline(db, glyph) else {
                    continue;
                };
                let d = path_data(&path, self.options.decimals);
                if !d.is_empty() {
                    outlines.push(d);
                }
            }
        }
        outlines
    }
}

struct OutlineBuilder(tiny_skia::PathBuilder);

impl ttf_parser::OutlineBuilder for OutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

/// The glyph's outline in document coordinates, or `None` for blank glyphs.
fn glyph_outline(
    db: &fontdb::Database,
    glyph: &usvg::layout::PositionedGlyph,
) -> Option<tiny_skia::Path> {
    let path = db
        .with_face_data(glyph.font, |data, index| {
            let face = ttf_parser::Face::parse(data, index).ok()?;
            let mut builder = OutlineBuilder(tiny_skia::PathBuilder::new());
            face.outline_glyph(glyph.id, &mut builder)?;
            builder.0.finish()
        })
        .flatten()?;
    path.transform(glyph.outline_transform())
}

fn collect_text_nodes<'a>(group: &'a usvg::Group, out: &mut Vec<&'a usvg::Text>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_text_nodes(g, out),
            usvg::Node::Text(t) => out.push(t),
            usvg::Node::Path(_) | usvg::Node::Image(_) => {}
        }
    }
}

fn path_data(path: &tiny_skia::Path, decimals: u8) -> String {
    let n = |v: f32| fmt_decimals(f64::from(v), decimals);
    let mut d = String::new();
    for segment in path.segments() {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match segment {
            tiny_skia::PathSegment::MoveTo(p) => write!(d, "M{} {}", n(p.x), n(p.y)),
            tiny_skia::PathSegment::LineTo(p) => write!(d, "L{} {}", n(p.x), n(p.y)),
            tiny_skia::PathSegment::QuadTo(c, p) => {
                write!(d, "Q{} {} {} {}", n(c.x), n(c.y), n(p.x), n(p.y))
            }
            tiny_skia::PathSegment::CubicTo(c1, c2, p) => write!(
                d,
                "C{} {} {} {} {} {}",
                n(c1.x),
                n(c1.y),
                n(c2.x),
                n(c2.y),
                n(p.x),
                n(p.y)
            ),
            tiny_skia::PathSegment::Close => write!(d, "Z"),
        };
    }
    d
}

impl<L: FontLoader> ShapingSession for UsvgSession<L> {
    async fn replace_all(&mut self) -> Result<usize, ShapeError> {
        let mut opt = usvg::Options::default();
        let loaded = self.load_fonts(opt.fontdb_mut()).await?;
        if self.options.missing_glyphs == MissingGlyphPolicy::Error {
            self.check_coverage(&loaded)?;
        }
        if let Some(family) = self.options.fonts.keys().next() {
            opt.font_family = family.clone();
        }

        let tree = usvg::Tree::from_str(&self.svg, &opt).map_err(|e| {
            ShapeError::InvalidDocument {
                message: e.to_string(),
            }
        })?;
        let output = self.write_document(&tree);
        tracing::trace!(texts = self.texts.len(), "text replaced with outlines");
        self.output = Some(output);
        Ok(self.texts.len())
    }

    fn svg_string(&self) -> String {
        self.output.clone().unwrap_or_else(|| self.svg.clone())
    }

    fn destroy(self) {
        tracing::trace!("shaping session destroyed");
    }
}

mod session;

use crate::*;
use std::sync::{Arc, Mutex};

/// What a scripted session does when asked to replace text.
#[derive(Debug, Clone)]
pub(crate) enum Script {
    /// Emit this many glyph paths.
    Paths(usize),
    Throw(ShapeError),
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Event {
    Opened { source: FontSourceRef },
    Destroyed { object_url_live: Option<bool> },
}

type Behavior = dyn Fn(&FontSourceRef) -> Script + Send + Sync;

/// Shaper double that answers per font source and records session lifecycles.
#[derive(Clone)]
pub(crate) struct ScriptedShaper {
    behavior: Arc<Behavior>,
    events: Arc<Mutex<Vec<Event>>>,
}

impl ScriptedShaper {
    pub(crate) fn new(behavior: impl Fn(&FontSourceRef) -> Script + Send + Sync + 'static) -> Self {
        Self {
            behavior: Arc::new(behavior),
            events: Arc::default(),
        }
    }

    pub(crate) fn always(script: Script) -> Self {
        Self::new(move |_| script.clone())
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub(crate) fn opened_sources(&self) -> Vec<FontSourceRef> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Opened { source } => Some(source),
                Event::Destroyed { .. } => None,
            })
            .collect()
    }
}

pub(crate) struct ScriptedSession {
    svg: String,
    source: FontSourceRef,
    script: Script,
    options: ShapeOptions,
    events: Arc<Mutex<Vec<Event>>>,
}

impl GlyphShaper for ScriptedShaper {
    type Session = ScriptedSession;

    fn open(&self, svg: &str, options: ShapeOptions) -> std::result::Result<ScriptedSession, ShapeError> {
        assert_eq!(options.fonts.len(), 1, "one family per attempt");
        assert!(options.split, "attempts request one path per glyph");
        let faces = options.fonts.values().next().unwrap();
        assert_eq!(faces.len(), 1);
        let source = faces[0].source.clone();
        self.events.lock().unwrap().push(Event::Opened {
            source: source.clone(),
        });
        Ok(ScriptedSession {
            svg: svg.to_string(),
            script: (self.behavior)(&source),
            source,
            options,
            events: Arc::clone(&self.events),
        })
    }
}

impl ShapingSession for ScriptedSession {
    async fn replace_all(&mut self) -> std::result::Result<usize, ShapeError> {
        if let FontSourceRef::ObjectUrl(url) = &self.source {
            if self.options.object_urls.resolve(url).is_none() {
                return Err(ShapeError::UnresolvedObjectUrl { url: url.clone() });
            }
        }
        match &self.script {
            Script::Throw(err) => Err(err.clone()),
            Script::Paths(n) => {
                let doc = roxmltree::Document::parse(&self.svg).unwrap();
                let root = doc.root_element();
                let width = root.attribute("width").unwrap();
                let height = root.attribute("height").unwrap();
                let mut out = format!(
                    r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg"><g fill="black" transform="translate(0, 0)">"#
                );
                for i in 0..*n {
                    let x = 10 + i * 12;
                    out.push_str(&format!(
                        r#"<path d="M{x} 30 L{} 30 L{} 46 Z"/>"#,
                        x + 10,
                        x + 10
                    ));
                }
                out.push_str("</g></svg>");
                self.svg = out;
                Ok(1)
            }
        }
    }

    fn svg_string(&self) -> String {
        self.svg.clone()
    }

    fn destroy(self) {
        let object_url_live = match &self.source {
            FontSourceRef::ObjectUrl(url) => Some(self.options.object_urls.resolve(url).is_some()),
            _ => None,
        };
        self.events
            .lock()
            .unwrap()
            .push(Event::Destroyed { object_url_live });
    }
}

/// Bounds of absolute move/line path data, enough for the paths the scripted session emits.
pub(crate) struct PolylineBounds;

impl BoundsProvider for PolylineBounds {
    fn path_bounds(&self, d: &str) -> Option<Rect> {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for segment in svgtypes::PathParser::from(d) {
            let (x, y) = match segment.ok()? {
                svgtypes::PathSegment::MoveTo { abs: true, x, y }
                | svgtypes::PathSegment::LineTo { abs: true, x, y } => (x, y),
                svgtypes::PathSegment::ClosePath { .. } => continue,
                _ => return None,
            };
            min = (min.0.min(x), min.1.min(y));
            max = (max.0.max(x), max.1.max(y));
        }
        min.0
            .is_finite()
            .then(|| Rect::new(min.0, min.1, max.0 - min.0, max.1 - min.1))
    }
}

pub(crate) fn uploaded_session(family: &str) -> SessionState {
    SessionState::new().with_uploaded_font_data(family, vec![0u8, 1, 0, 0])
}

use crate::error::{Error, Result, ShapeError};
use std::fmt;
use std::sync::Arc;

/// One conversion request. Built fresh for every run and never mutated while it is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub text: String,
    pub font_size: f64,
    /// CSS color written verbatim (escaped) into `fill` attributes.
    pub color: String,
}

impl RenderRequest {
    pub fn new(text: impl Into<String>, font_size: f64, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size,
            color: color.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(Error::InvalidRequest {
                message: format!("font size must be a positive number, got {}", self.font_size),
            });
        }
        if self.color.trim().is_empty() {
            return Err(Error::InvalidRequest {
                message: "fill color is empty".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self::new("Hello World!", 48.0, "#000000")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontOrigin {
    Uploaded,
    BundledDefault,
    Remote(String),
}

/// A font the resolver can hand to the pipeline.
///
/// Binary data is shared, never copied, between the session and the attempts that use it.
#[derive(Clone, PartialEq, Eq)]
pub struct FontSource {
    pub family: String,
    pub data: Option<Arc<[u8]>>,
    pub origin: FontOrigin,
}

impl FontSource {
    pub fn uploaded(family: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            family: family.into(),
            data: Some(data.into()),
            origin: FontOrigin::Uploaded,
        }
    }

    pub fn bundled(family: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            family: family.into(),
            data: Some(data.into()),
            origin: FontOrigin::BundledDefault,
        }
    }

    pub fn remote(family: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            data: None,
            origin: FontOrigin::Remote(url.into()),
        }
    }
}

impl fmt::Debug for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontSource")
            .field("family", &self.family)
            .field("data", &self.data.as_ref().map(|d| d.len()))
            .field("origin", &self.origin)
            .finish()
    }
}

/// How font data is handed to the shaping collaborator for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceEncoding {
    RawBinary,
    ObjectUrl { mime: String },
    RemoteUrl { url: String },
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEncoding::RawBinary => write!(f, "raw binary"),
            SourceEncoding::ObjectUrl { mime } => write!(f, "object URL ({mime})"),
            SourceEncoding::RemoteUrl { url } => write!(f, "remote URL ({url})"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    Success { paths: usize },
    NoGlyphsProduced,
    Threw(ShapeError),
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Success { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionAttempt {
    pub family: String,
    pub encoding: SourceEncoding,
    pub outcome: AttemptOutcome,
}

/// Which stage produced the final document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionStage {
    /// The request text was empty or whitespace only.
    EmptyInput,
    /// A shaping attempt succeeded. `cropped` is false when bounds could not be computed.
    Outlined { cropped: bool },
    Synthetic,
    /// Every stage failed; the placeholder is returned with a warning comment.
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub svg: String,
    pub stage: ConversionStage,
    pub attempts: Vec<ConversionAttempt>,
}

impl Conversion {
    pub fn successful_attempt(&self) -> Option<&ConversionAttempt> {
        self.attempts.iter().find(|a| a.outcome.is_success())
    }
}

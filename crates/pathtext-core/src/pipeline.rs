//! The glyph outline pipeline.
//!
//! A conversion resolves font candidates, expands them into an ordered list of
//! [`PlannedAttempt`]s and runs them one at a time until one produces path geometry. Every attempt
//! owns its collaborator session and object URL and releases both before the next one starts.

use crate::assemble::{annotate_conversion_failure, build_placeholder, empty_input_notice};
use crate::bounds::BoundsProvider;
use crate::config::{ConvertOptions, TerminalStage};
use crate::crop::crop_or_keep;
use crate::error::{Result, ShapeError};
use crate::model::{
    AttemptOutcome, Conversion, ConversionAttempt, ConversionStage, FontOrigin, FontSource,
    RenderRequest, SourceEncoding,
};
use crate::object_url::ObjectUrlRegistry;
use crate::resolve::{resolve_candidates, resolved_family};
use crate::session::SessionState;
use crate::shaper::{
    FontFace, FontRegistry, FontSourceRef, GlyphShaper, MissingGlyphPolicy, ShapeOptions,
    ShapingSession,
};
use crate::synthetic;
use crate::xml::count_path_elements;
use std::sync::Arc;

/// One (font source, encoding) pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedAttempt {
    pub family: String,
    pub encoding: SourceEncoding,
    pub data: Option<Arc<[u8]>>,
    pub missing_glyphs: MissingGlyphPolicy,
}

/// Expands font candidates into the attempts to run, in order.
///
/// Uploaded fonts are tried as raw bytes first and then once per MIME hypothesis; the bundled
/// default gets a single `font/ttf` object URL; the remote family a single remote URL attempt.
pub fn plan_attempts(candidates: &[FontSource], options: &ConvertOptions) -> Vec<PlannedAttempt> {
    let mut plan = Vec::new();
    for candidate in candidates {
        let attempt = |encoding: SourceEncoding, missing_glyphs: MissingGlyphPolicy| PlannedAttempt {
            family: candidate.family.clone(),
            encoding,
            data: candidate.data.clone(),
            missing_glyphs,
        };
        match &candidate.origin {
            FontOrigin::Uploaded => {
                plan.push(attempt(SourceEncoding::RawBinary, MissingGlyphPolicy::Error));
                for mime in &options.mime_types {
                    plan.push(attempt(
                        SourceEncoding::ObjectUrl { mime: mime.clone() },
                        MissingGlyphPolicy::Error,
                    ));
                }
            }
            FontOrigin::BundledDefault => plan.push(attempt(
                SourceEncoding::ObjectUrl {
                    mime: "font/ttf".to_string(),
                },
                MissingGlyphPolicy::Error,
            )),
            FontOrigin::Remote(url) => plan.push(attempt(
                SourceEncoding::RemoteUrl { url: url.clone() },
                MissingGlyphPolicy::SkipChar,
            )),
        }
    }
    plan
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    Success { svg: String, cropped: bool },
    /// Every attempt failed or produced no paths.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub outcome: PipelineOutcome,
    pub attempts: Vec<ConversionAttempt>,
}

enum AttemptResult {
    Success { svg: String, paths: usize },
    Failure(AttemptOutcome),
}

/// Runs shaping attempts against a shaper and crops the first success.
pub struct Pipeline<S, B> {
    shaper: S,
    bounds: B,
    options: ConvertOptions,
    object_urls: Arc<ObjectUrlRegistry>,
}

impl<S: GlyphShaper, B: BoundsProvider> Pipeline<S, B> {
    pub fn new(shaper: S, bounds: B) -> Self {
        Self {
            shaper,
            bounds,
            options: ConvertOptions::default(),
            object_urls: Arc::new(ObjectUrlRegistry::new()),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn shaper(&self) -> &S {
        &self.shaper
    }

    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    /// Object URLs created by attempts. Empty whenever no attempt is in flight.
    pub fn object_urls(&self) -> &ObjectUrlRegistry {
        &self.object_urls
    }

    /// Converts one request using the fonts held by `session`.
    ///
    /// Only an invalid request is an error. Shaping failures fall through to the configured
    /// terminal stage and are reported in [`Conversion::attempts`].
    pub async fn convert(
        &self,
        request: &RenderRequest,
        session: &SessionState,
    ) -> Result<Conversion> {
        if request.is_blank() {
            return Ok(Conversion {
                svg: empty_input_notice(),
                stage: ConversionStage::EmptyInput,
                attempts: Vec::new(),
            });
        }
        request.validate()?;

        let candidates = resolve_candidates(session, &self.options);
        let family = resolved_family(&candidates, &self.options);
        let placeholder = build_placeholder(request, &family);
        let plan = plan_attempts(&candidates, &self.options);

        let run = self.run(&placeholder.svg, &plan).await;
        let (svg, stage) = match run.outcome {
            PipelineOutcome::Success { svg, cropped } => {
                (svg, ConversionStage::Outlined { cropped })
            }
            PipelineOutcome::Exhausted => match self.options.terminal_stage {
                TerminalStage::Synthetic => {
                    tracing::info!("all font attempts failed, using built-in glyph outlines");
                    (
                        synthetic::render(request, placeholder.width, placeholder.height),
                        ConversionStage::Synthetic,
                    )
                }
                TerminalStage::Placeholder => {
                    tracing::warn!("all font attempts failed, returning unconverted text");
                    (
                        annotate_conversion_failure(&placeholder.svg),
                        ConversionStage::Placeholder,
                    )
                }
            },
        };

        Ok(Conversion {
            svg,
            stage,
            attempts: run.attempts,
        })
    }

    /// Runs `plan` in order against `svg`, stopping at the first attempt that yields paths.
    pub async fn run(&self, svg: &str, plan: &[PlannedAttempt]) -> PipelineRun {
        let mut attempts = Vec::with_capacity(plan.len());
        for planned in plan {
            tracing::debug!(family = %planned.family, encoding = %planned.encoding, "shaping attempt");
            match self.run_attempt(svg, planned).await {
                AttemptResult::Success { svg: output, paths } => {
                    tracing::debug!(
                        family = %planned.family,
                        encoding = %planned.encoding,
                        paths,
                        "shaping succeeded"
                    );
                    attempts.push(ConversionAttempt {
                        family: planned.family.clone(),
                        encoding: planned.encoding.clone(),
                        outcome: AttemptOutcome::Success { paths },
                    });
                    let (svg, cropped) =
                        crop_or_keep(&output, &self.bounds, self.options.crop_padding);
                    return PipelineRun {
                        outcome: PipelineOutcome::Success { svg, cropped },
                        attempts,
                    };
                }
                AttemptResult::Failure(outcome) => {
                    match &outcome {
                        AttemptOutcome::Threw(err) => {
                            tracing::debug!(
                                family = %planned.family,
                                encoding = %planned.encoding,
                                error = %err,
                                "shaping attempt failed"
                            );
                        }
                        _ => {
                            tracing::debug!(
                                family = %planned.family,
                                encoding = %planned.encoding,
                                "no path elements produced"
                            );
                        }
                    }
                    attempts.push(ConversionAttempt {
                        family: planned.family.clone(),
                        encoding: planned.encoding.clone(),
                        outcome,
                    });
                }
            }
        }
        PipelineRun {
            outcome: PipelineOutcome::Exhausted,
            attempts,
        }
    }

    async fn run_attempt(&self, svg: &str, planned: &PlannedAttempt) -> AttemptResult {
        let source = match &planned.encoding {
            SourceEncoding::RemoteUrl { url } => FontSourceRef::RemoteUrl(url.clone()),
            SourceEncoding::RawBinary | SourceEncoding::ObjectUrl { .. } => {
                let Some(data) = planned.data.clone() else {
                    return AttemptResult::Failure(AttemptOutcome::Threw(ShapeError::Other(
                        format!("no font data held for `{}`", planned.family),
                    )));
                };
                match &planned.encoding {
                    SourceEncoding::ObjectUrl { mime } => {
                        let url = self.object_urls.create(data, mime);
                        let source = FontSourceRef::ObjectUrl(url.as_str().to_string());
                        let result = self.shape_once(svg, planned, source).await;
                        url.revoke();
                        return result;
                    }
                    _ => FontSourceRef::Binary(data),
                }
            }
        };
        self.shape_once(svg, planned, source).await
    }

    async fn shape_once(
        &self,
        svg: &str,
        planned: &PlannedAttempt,
        source: FontSourceRef,
    ) -> AttemptResult {
        let mut fonts = FontRegistry::new();
        fonts.insert(planned.family.clone(), vec![FontFace::regular(source)]);
        let options = ShapeOptions {
            fonts,
            missing_glyphs: planned.missing_glyphs,
            split: true,
            decimals: self.options.path_decimals,
            object_urls: Arc::clone(&self.object_urls),
        };

        let mut session = match self.shaper.open(svg, options) {
            Ok(session) => session,
            Err(err) => return AttemptResult::Failure(AttemptOutcome::Threw(err)),
        };
        let replaced = session.replace_all().await;
        let output = replaced.map(|_| session.svg_string());
        session.destroy();

        let output = match output {
            Ok(output) => output,
            Err(err) => return AttemptResult::Failure(AttemptOutcome::Threw(err)),
        };
        let paths = match roxmltree::Document::parse(&output) {
            Ok(doc) => count_path_elements(&doc),
            Err(err) => {
                return AttemptResult::Failure(AttemptOutcome::Threw(
                    ShapeError::InvalidDocument {
                        message: err.to_string(),
                    },
                ));
            }
        };
        if paths == 0 {
            return AttemptResult::Failure(AttemptOutcome::NoGlyphsProduced);
        }
        AttemptResult::Success { svg: output, paths }
    }
}

#![forbid(unsafe_code)]

//! `pathtext` converts text into SVG glyph outlines without a browser.
//!
//! Conversions always produce a displayable document: the uploaded or bundled font is tried
//! first, then a remote fallback family, then built-in outlines for A–Z and a–z.
//!
//! # Features
//!
//! - `render`: enable the `usvg`-backed shaper and the [`render::HeadlessConverter`]
//! - `raster`: enable PNG previews via pure-Rust SVG rasterization

pub use pathtext_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use pathtext_render::{
        FontFormat, UsvgBounds, UsvgPipeline, UsvgSession, UsvgShaper, usvg_pipeline,
        usvg_pipeline_with_loader,
    };

    use pathtext_core::loader::{FileFontLoader, FontLoader};
    use pathtext_core::session::FontUpload;
    use pathtext_core::{Conversion, ConvertOptions, FontSource, RenderRequest, SessionState};

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Convert(#[from] pathtext_core::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Bundles a `usvg` pipeline with the font state it converts against.
    ///
    /// This is the host-side counterpart of the conversion API: it owns the session, loads the
    /// default font, accepts uploads and regenerates output on request.
    pub struct HeadlessConverter<L = FileFontLoader> {
        pipeline: UsvgPipeline<L>,
        loader: L,
        session: SessionState,
    }

    impl Default for HeadlessConverter<FileFontLoader> {
        fn default() -> Self {
            Self::with_loader(FileFontLoader::new())
        }
    }

    impl HeadlessConverter<FileFontLoader> {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl<L: FontLoader + Clone> HeadlessConverter<L> {
        pub fn with_loader(loader: L) -> Self {
            Self {
                pipeline: usvg_pipeline_with_loader(loader.clone()),
                loader,
                session: SessionState::new(),
            }
        }

        pub fn with_options(mut self, options: ConvertOptions) -> Self {
            self.pipeline = self.pipeline.with_options(options);
            self
        }

        pub fn options(&self) -> &ConvertOptions {
            self.pipeline.options()
        }

        pub fn session(&self) -> &SessionState {
            &self.session
        }

        pub fn pipeline(&self) -> &UsvgPipeline<L> {
            &self.pipeline
        }

        /// Loads the bundled default font from `location`. On failure conversions keep using the
        /// remote fallback family.
        pub async fn load_default_font(&mut self, location: &str) -> Result<()> {
            let family = self.pipeline.options().default_font_family.clone();
            self.session
                .load_default_font(&self.loader, location, &family)
                .await?;
            Ok(())
        }

        pub fn load_default_font_sync(&mut self, location: &str) -> Result<()> {
            futures::executor::block_on(self.load_default_font(location))
        }

        pub async fn upload<U: FontUpload>(&mut self, file: U) -> Result<&FontSource> {
            Ok(self.session.upload(file).await?)
        }

        pub fn upload_sync<U: FontUpload>(&mut self, file: U) -> Result<&FontSource> {
            futures::executor::block_on(self.upload(file))
        }

        pub fn clear_upload(&mut self) {
            self.session.clear_upload();
        }

        pub async fn convert(&self, request: &RenderRequest) -> Result<Conversion> {
            Ok(self.pipeline.convert(request, &self.session).await?)
        }

        /// Synchronous conversion helper (drives the pipeline on the current thread).
        pub fn convert_sync(&self, request: &RenderRequest) -> Result<Conversion> {
            futures::executor::block_on(self.convert(request))
        }

        #[cfg(feature = "raster")]
        pub fn render_png_sync(
            &self,
            request: &RenderRequest,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            let conversion = self.convert_sync(request)?;
            raster::svg_to_png(&conversion.svg, raster)
        }
    }

}

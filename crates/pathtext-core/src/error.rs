pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced to the caller of the conversion API.
///
/// Anything the pipeline can recover from (a shaping attempt that fails, a document that cannot
/// be cropped) never shows up here; it is recorded in the attempt log instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Please upload a valid font file (.ttf, .otf, .woff, .woff2), got `{file_name}`")]
    InvalidFontFile { file_name: String },

    #[error("Failed to fetch font from {location}: {message}")]
    FontFetchFailed { location: String, message: String },

    #[error("Failed to read uploaded font `{file_name}`: {message}")]
    FontRead { file_name: String, message: String },

    #[error("Invalid render request: {message}")]
    InvalidRequest { message: String },
}

/// Errors raised by a glyph shaping collaborator during one attempt.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("font data could not be parsed: {reason}")]
    UnreadableFont { reason: String },

    #[error("declared type {mime} does not match {detected} font data")]
    MimeMismatch { mime: String, detected: String },

    #[error("font `{family}` has no glyph for {ch:?}")]
    MissingGlyph { family: String, ch: char },

    #[error("no font registered for family `{family}`")]
    UnknownFamily { family: String },

    #[error("object URL {url} is not registered (revoked or never created)")]
    UnresolvedObjectUrl { url: String },

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("document could not be parsed: {message}")]
    InvalidDocument { message: String },

    #[error("{0}")]
    Other(String),
}

/// Why the bounds cropper left a document untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CropError {
    #[error("document could not be parsed: {message}")]
    Unparseable { message: String },

    #[error("document has no path elements")]
    NoPaths,

    #[error("no finite bounds were reported for any path")]
    NoFiniteBounds,
}

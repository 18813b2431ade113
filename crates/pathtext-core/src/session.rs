//! Font state shared by consecutive conversions.
//!
//! A [`SessionState`] is owned by the host and passed by reference into every conversion. Upload
//! and default-font operations update it in place; the pipeline only ever reads it.

use crate::error::{Error, Result};
use crate::loader::FontLoader;
use crate::model::FontSource;
use std::path::PathBuf;
use std::sync::Arc;

pub const ALLOWED_FONT_EXTENSIONS: [&str; 4] = [".ttf", ".otf", ".woff", ".woff2"];

/// Family label used when an uploaded file name has nothing before its first `.`.
const UNNAMED_UPLOAD_FAMILY: &str = "Uploaded Font";

/// A user-selected font file. Bytes are only read after the name has been accepted.
#[allow(async_fn_in_trait)]
pub trait FontUpload {
    fn file_name(&self) -> &str;
    async fn read_bytes(self) -> std::io::Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct InMemoryFontFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl InMemoryFontFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl FontUpload for InMemoryFontFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(self) -> std::io::Result<Vec<u8>> {
        Ok(self.bytes)
    }
}

#[derive(Debug, Clone)]
pub struct DiskFontFile {
    path: PathBuf,
    name: String,
}

impl DiskFontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, name }
    }
}

impl FontUpload for DiskFontFile {
    fn file_name(&self) -> &str {
        &self.name
    }

    async fn read_bytes(self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// Checks the extension of an uploaded file and returns the family name to register it under.
pub fn validate_font_file_name(file_name: &str) -> Result<String> {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()));
    if !ext.is_some_and(|ext| ALLOWED_FONT_EXTENSIONS.contains(&ext.as_str())) {
        return Err(Error::InvalidFontFile {
            file_name: file_name.to_string(),
        });
    }

    let stem = file_name.split('.').next().unwrap_or_default();
    if stem.is_empty() {
        Ok(UNNAMED_UPLOAD_FAMILY.to_string())
    } else {
        Ok(stem.to_string())
    }
}

/// Load state of the bundled default font.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultFont {
    /// The startup fetch has not settled yet.
    #[default]
    Pending,
    Loaded(FontSource),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    uploaded: Option<FontSource>,
    default_font: DefaultFont,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uploaded(&self) -> Option<&FontSource> {
        self.uploaded.as_ref()
    }

    pub fn default_font(&self) -> &DefaultFont {
        &self.default_font
    }

    /// The bundled default font, if its fetch has completed successfully.
    pub fn bundled_default(&self) -> Option<&FontSource> {
        match &self.default_font {
            DefaultFont::Loaded(source) => Some(source),
            DefaultFont::Pending | DefaultFont::Failed(_) => None,
        }
    }

    pub fn with_default_font_data(mut self, family: &str, data: impl Into<Arc<[u8]>>) -> Self {
        self.default_font = DefaultFont::Loaded(FontSource::bundled(family, data));
        self
    }

    pub fn with_uploaded_font_data(mut self, family: &str, data: impl Into<Arc<[u8]>>) -> Self {
        self.uploaded = Some(FontSource::uploaded(family, data));
        self
    }

    /// Fetches the bundled default font.
    ///
    /// Failure is not fatal: the state records it and conversions fall back to the remote
    /// candidate. The error is still returned so the host can report it.
    pub async fn load_default_font<L: FontLoader>(
        &mut self,
        loader: &L,
        location: &str,
        family: &str,
    ) -> Result<()> {
        match loader.fetch(location).await {
            Ok(bytes) => {
                tracing::info!(family, bytes = bytes.len(), "Default font loaded");
                self.default_font = DefaultFont::Loaded(FontSource::bundled(family, bytes));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(location, error = %err, "Default font failed to load (using fallback)");
                self.default_font = DefaultFont::Failed(err.to_string());
                Err(Error::FontFetchFailed {
                    location: location.to_string(),
                    message: err.to_string(),
                })
            }
        }
    }

    /// Replaces the uploaded font with `file`.
    ///
    /// The name is validated before any byte is read. On any failure the previous upload is
    /// cleared as well, so a rejected file never leaves a stale font behind.
    pub async fn upload<U: FontUpload>(&mut self, file: U) -> Result<&FontSource> {
        let file_name = file.file_name().to_string();
        let family = match validate_font_file_name(&file_name) {
            Ok(family) => family,
            Err(err) => {
                self.uploaded = None;
                return Err(err);
            }
        };

        let bytes = match file.read_bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                self.uploaded = None;
                return Err(Error::FontRead {
                    file_name,
                    message: err.to_string(),
                });
            }
        };

        tracing::info!(file = %file_name, family = %family, "font loaded");
        Ok(self.uploaded.insert(FontSource::uploaded(family, bytes)))
    }

    /// Drops the uploaded font; conversions revert to the default font.
    pub fn clear_upload(&mut self) {
        self.uploaded = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_is_text_before_first_dot() {
        assert_eq!(validate_font_file_name("MyFont.ttf").unwrap(), "MyFont");
        assert_eq!(validate_font_file_name("Inter.var.WOFF2").unwrap(), "Inter");
        assert_eq!(validate_font_file_name(".otf").unwrap(), "Uploaded Font");
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["font.pdf", "font", "font.ttf.zip", "woff"] {
            assert!(
                matches!(
                    validate_font_file_name(name),
                    Err(Error::InvalidFontFile { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn bare_extension_word_is_not_an_extension() {
        for name in ["woff", "TTF", "otf", "woff2"] {
            let err = validate_font_file_name(name).unwrap_err();
            assert!(
                matches!(&err, Error::InvalidFontFile { file_name } if file_name == name),
                "{name}: {err:?}"
            );
        }
        assert_eq!(validate_font_file_name("woff.woff").unwrap(), "woff");
    }

    #[test]
    fn pending_and_failed_defaults_are_absent() {
        let mut state = SessionState::new();
        assert!(state.bundled_default().is_none());
        state.default_font = DefaultFont::Failed("offline".to_string());
        assert!(state.bundled_default().is_none());
        let state = state.with_default_font_data("Roboto", vec![1, 2, 3]);
        assert_eq!(state.bundled_default().unwrap().family, "Roboto");
    }
}

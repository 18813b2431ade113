use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("unsupported URL scheme `{0}` (only file URLs and local paths are readable)")]
    UnsupportedScheme(String),
    #[error("invalid font location: {0}")]
    InvalidLocation(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reads font bytes from a location string (URL or path).
///
/// This is the only place the pipeline suspends for I/O besides the shaping collaborator.
#[allow(async_fn_in_trait)]
pub trait FontLoader {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, FetchError>;
}

/// Loads `file://` URLs and plain filesystem paths; every other scheme is reported as a failure.
#[derive(Debug, Clone, Default)]
pub struct FileFontLoader {
    /// Base directory for relative paths. Defaults to the process working directory.
    pub base_dir: Option<PathBuf>,
}

impl FileFontLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve_path(&self, location: &str) -> Result<PathBuf, FetchError> {
        match Url::parse(location) {
            // Single-letter schemes are Windows drive letters, not URLs.
            Ok(url) if url.scheme().len() > 1 => {
                if url.scheme() != "file" {
                    return Err(FetchError::UnsupportedScheme(url.scheme().to_string()));
                }
                url.to_file_path()
                    .map_err(|()| FetchError::InvalidLocation(location.to_string()))
            }
            _ => {
                let path = Path::new(location);
                Ok(match &self.base_dir {
                    Some(base) if path.is_relative() => base.join(path),
                    _ => path.to_path_buf(),
                })
            }
        }
    }
}

impl FontLoader for FileFontLoader {
    async fn fetch(&self, location: &str) -> Result<Vec<u8>, FetchError> {
        let path = self.resolve_path(location)?;
        tracing::debug!(path = %path.display(), "reading font file");
        Ok(std::fs::read(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn reads_relative_paths_against_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.ttf"), b"abc").unwrap();
        let loader = FileFontLoader::with_base_dir(dir.path());
        assert_eq!(block_on(loader.fetch("a.ttf")).unwrap(), b"abc");
    }

    #[test]
    fn reads_file_urls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.otf");
        std::fs::write(&path, b"OTTO").unwrap();
        let url = Url::from_file_path(&path).unwrap();
        let bytes = block_on(FileFontLoader::new().fetch(url.as_str())).unwrap();
        assert_eq!(bytes, b"OTTO");
    }

    #[test]
    fn network_schemes_are_unsupported() {
        let err = block_on(FileFontLoader::new().fetch("https://example.com/f.woff2")).unwrap_err();
        assert!(matches!(err, FetchError::UnsupportedScheme(ref s) if s == "https"));
    }

    #[test]
    fn missing_files_are_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let loader = FileFontLoader::with_base_dir(dir.path());
        assert!(matches!(
            block_on(loader.fetch("missing.ttf")),
            Err(FetchError::Io(_))
        ));
    }
}

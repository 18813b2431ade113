use super::*;
use futures::executor::block_on;
use std::sync::atomic::{AtomicBool, Ordering};

/// Upload whose bytes must never be read.
struct Untouchable<'a> {
    name: &'static str,
    read: &'a AtomicBool,
}

impl FontUpload for Untouchable<'_> {
    fn file_name(&self) -> &str {
        self.name
    }

    async fn read_bytes(self) -> std::io::Result<Vec<u8>> {
        self.read.store(true, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

struct FailingLoader;

impl FontLoader for FailingLoader {
    async fn fetch(&self, _location: &str) -> std::result::Result<Vec<u8>, FetchError> {
        Err(FetchError::UnsupportedScheme("https".to_string()))
    }
}

#[test]
fn rejected_upload_is_never_read_and_clears_previous_font() {
    let mut session = uploaded_session("Old");
    let read = AtomicBool::new(false);

    let err = block_on(session.upload(Untouchable {
        name: "font.pdf",
        read: &read,
    }))
    .unwrap_err();
    assert!(matches!(err, Error::InvalidFontFile { .. }));
    assert_eq!(
        err.to_string(),
        "Please upload a valid font file (.ttf, .otf, .woff, .woff2), got `font.pdf`"
    );
    assert!(!read.load(Ordering::SeqCst));
    assert!(session.uploaded().is_none());
}

#[test]
fn accepted_upload_replaces_previous_font() {
    let mut session = uploaded_session("Old");
    let source = block_on(session.upload(InMemoryFontFile::new("MyFont.TTF", vec![1u8, 2, 3])))
        .unwrap()
        .clone();
    assert_eq!(source.family, "MyFont");
    assert_eq!(source.origin, FontOrigin::Uploaded);
    assert_eq!(source.data.as_deref(), Some(&[1u8, 2, 3][..]));
    assert_eq!(session.uploaded(), Some(&source));
}

#[test]
fn unreadable_disk_upload_clears_font() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = uploaded_session("Old");
    let err = block_on(session.upload(DiskFontFile::new(dir.path().join("missing.otf")))).unwrap_err();
    assert!(matches!(err, Error::FontRead { .. }));
    assert!(session.uploaded().is_none());
}

#[test]
fn disk_upload_reads_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Inter.woff2");
    std::fs::write(&path, b"wOF2").unwrap();
    let mut session = SessionState::new();
    let source = block_on(session.upload(DiskFontFile::new(&path))).unwrap();
    assert_eq!(source.family, "Inter");
}

#[test]
fn default_font_load_failure_is_recorded() {
    let mut session = SessionState::new();
    let err = block_on(session.load_default_font(&FailingLoader, "https://example.invalid/f.ttf", "Roboto"))
        .unwrap_err();
    assert!(matches!(err, Error::FontFetchFailed { .. }));
    assert!(matches!(session.default_font(), DefaultFont::Failed(_)));

    let candidates = resolve::resolve_candidates(&session, &ConvertOptions::default());
    assert_eq!(candidates[0].family, "Arial");
}

#[test]
fn default_font_loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Roboto-Regular.ttf"), [0u8, 1, 0, 0]).unwrap();
    let loader = FileFontLoader::with_base_dir(dir.path());

    let mut session = SessionState::new();
    block_on(session.load_default_font(&loader, "Roboto-Regular.ttf", "Roboto")).unwrap();
    let bundled = session.bundled_default().unwrap();
    assert_eq!(bundled.family, "Roboto");
    assert_eq!(bundled.origin, FontOrigin::BundledDefault);
}

#[test]
fn conversion_after_upload_uses_the_new_font() {
    let pipeline = Pipeline::new(ScriptedShaper::always(Script::Paths(1)), PolylineBounds);
    let mut session = SessionState::new().with_default_font_data("Roboto", vec![0u8; 4]);
    let req = RenderRequest::new("Hi", 16.0, "#000");

    let before = block_on(pipeline.convert(&req, &session)).unwrap();
    assert_eq!(before.attempts[0].family, "Roboto");

    block_on(session.upload(InMemoryFontFile::new("Custom.otf", vec![9u8; 4]))).unwrap();
    let after = block_on(pipeline.convert(&req, &session)).unwrap();
    assert_eq!(after.attempts[0].family, "Custom");

    session.clear_upload();
    let cleared = block_on(pipeline.convert(&req, &session)).unwrap();
    assert_eq!(cleared.attempts[0].family, "Roboto");
}

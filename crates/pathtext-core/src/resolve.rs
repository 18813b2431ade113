use crate::config::ConvertOptions;
use crate::model::FontSource;
use crate::session::SessionState;

/// Picks the font sources for one conversion, highest priority first.
///
/// An uploaded font shadows the bundled default; with neither available the configured remote
/// family is returned, so the list is never empty.
pub fn resolve_candidates(session: &SessionState, options: &ConvertOptions) -> Vec<FontSource> {
    if let Some(uploaded) = session.uploaded() {
        return vec![uploaded.clone()];
    }
    if let Some(bundled) = session.bundled_default() {
        return vec![bundled.clone()];
    }
    vec![FontSource::remote(
        options.remote_fallback_family.as_str(),
        options.remote_fallback_url.as_str(),
    )]
}

/// Family label written into the placeholder's `font-family` attribute.
pub fn resolved_family(candidates: &[FontSource], options: &ConvertOptions) -> String {
    candidates
        .first()
        .map(|c| c.family.clone())
        .unwrap_or_else(|| options.remote_fallback_family.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FontOrigin;
    use std::sync::Arc;

    #[test]
    fn uploaded_font_shadows_default() {
        let session = SessionState::new()
            .with_default_font_data("Roboto", vec![0u8; 4])
            .with_uploaded_font_data("MyFont", vec![1u8; 4]);
        let candidates = resolve_candidates(&session, &ConvertOptions::default());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].family, "MyFont");
        assert_eq!(candidates[0].origin, FontOrigin::Uploaded);
    }

    #[test]
    fn candidates_share_session_bytes() {
        let session = SessionState::new().with_default_font_data("Roboto", vec![7u8; 16]);
        let candidates = resolve_candidates(&session, &ConvertOptions::default());
        let held = session.bundled_default().unwrap().data.as_ref().unwrap();
        let shared = candidates[0].data.as_ref().unwrap();
        assert!(Arc::ptr_eq(held, shared));
    }

    #[test]
    fn empty_session_yields_remote_candidate() {
        let options = ConvertOptions::default();
        let candidates = resolve_candidates(&SessionState::new(), &options);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].family, "Arial");
        assert_eq!(
            candidates[0].origin,
            FontOrigin::Remote(options.remote_fallback_url.clone())
        );
        assert!(candidates[0].data.is_none());
        assert_eq!(resolved_family(&candidates, &options), "Arial");
    }
}

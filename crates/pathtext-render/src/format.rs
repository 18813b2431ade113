use std::fmt;

/// Container format of font data, detected from its leading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    TrueType,
    /// OpenType with CFF outlines (`OTTO`).
    OpenType,
    Collection,
    Woff,
    Woff2,
}

impl fmt::Display for FontFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FontFormat::TrueType => "TrueType",
            FontFormat::OpenType => "OpenType/CFF",
            FontFormat::Collection => "font collection",
            FontFormat::Woff => "WOFF",
            FontFormat::Woff2 => "WOFF2",
        })
    }
}

pub fn sniff(data: &[u8]) -> Option<FontFormat> {
    match data.get(..4)? {
        [0x00, 0x01, 0x00, 0x00] | b"true" => Some(FontFormat::TrueType),
        b"OTTO" => Some(FontFormat::OpenType),
        b"ttcf" => Some(FontFormat::Collection),
        b"wOFF" => Some(FontFormat::Woff),
        b"wOF2" => Some(FontFormat::Woff2),
        _ => None,
    }
}

/// Formats a declared MIME type admits. `None` for types this check does not know.
pub fn formats_for_mime(mime: &str) -> Option<&'static [FontFormat]> {
    use FontFormat::*;
    match mime.trim().to_ascii_lowercase().as_str() {
        "font/ttf" | "application/x-font-ttf" => Some(&[TrueType, Collection]),
        // OpenType files carry either outline flavor.
        "font/otf" | "application/x-font-opentype" => Some(&[OpenType, TrueType, Collection]),
        "font/woff" | "application/font-woff" => Some(&[Woff]),
        "font/woff2" => Some(&[Woff2]),
        _ => None,
    }
}

/// Whether data of `detected` format may be handed over as `mime`.
pub fn mime_admits(mime: &str, detected: FontFormat) -> bool {
    formats_for_mime(mime).is_none_or(|formats| formats.contains(&detected))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_leading_tags() {
        assert_eq!(sniff(&[0, 1, 0, 0, 9]), Some(FontFormat::TrueType));
        assert_eq!(sniff(b"OTTO...."), Some(FontFormat::OpenType));
        assert_eq!(sniff(b"wOF2...."), Some(FontFormat::Woff2));
        assert_eq!(sniff(b"%PDF-1.7"), None);
        assert_eq!(sniff(b"wO"), None);
    }

    #[test]
    fn mime_hypotheses_are_checked() {
        assert!(mime_admits("font/ttf", FontFormat::TrueType));
        assert!(!mime_admits("font/ttf", FontFormat::OpenType));
        assert!(mime_admits("font/otf", FontFormat::TrueType));
        assert!(!mime_admits("application/font-woff", FontFormat::Woff2));
        assert!(mime_admits("application/octet-stream", FontFormat::Woff));
    }
}

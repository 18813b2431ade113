use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_FAMILY: &str = "Roboto";
pub const REMOTE_FALLBACK_FAMILY: &str = "Arial";
pub const REMOTE_FALLBACK_URL: &str = "https://fonts.gstatic.com/s/opensans/v40/memSYaGs126MiZpBA-UvWbX2vVnXBbObj2OVZyOOSr4dVJWUgsjZ0B4taVIGxA.woff2";

/// MIME hypotheses tried, in order, when an uploaded font is handed over as an object URL.
pub const FONT_MIME_TYPES: [&str; 7] = [
    "font/ttf",
    "font/otf",
    "font/woff",
    "font/woff2",
    "application/font-woff",
    "application/x-font-ttf",
    "application/x-font-opentype",
];

/// What the conversion returns once every shaping attempt has failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerminalStage {
    /// Lay out built-in glyph outlines (A–Z, a–z, space).
    #[default]
    Synthetic,
    /// Return the `<text>` placeholder with a warning comment.
    Placeholder,
}

/// How results of overlapping conversion runs are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RunOrdering {
    /// Whatever run settles last is displayed, even if it was started earlier.
    #[default]
    LastSettledWins,
    /// A result older than the one on display is dropped.
    Sequenced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Family label used for the bundled default font.
    pub default_font_family: String,
    pub remote_fallback_family: String,
    pub remote_fallback_url: String,
    pub mime_types: Vec<String>,
    pub crop_padding: f64,
    /// Fractional digits the shaping collaborator keeps in emitted path data.
    pub path_decimals: u8,
    pub terminal_stage: TerminalStage,
    pub run_ordering: RunOrdering,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            default_font_family: DEFAULT_FONT_FAMILY.to_string(),
            remote_fallback_family: REMOTE_FALLBACK_FAMILY.to_string(),
            remote_fallback_url: REMOTE_FALLBACK_URL.to_string(),
            mime_types: FONT_MIME_TYPES.iter().map(|m| m.to_string()).collect(),
            crop_padding: 2.0,
            path_decimals: 2,
            terminal_stage: TerminalStage::Synthetic,
            run_ordering: RunOrdering::LastSettledWins,
        }
    }
}

impl ConvertOptions {
    /// Parses options from JSON, filling unspecified fields with defaults.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn with_terminal_stage(mut self, stage: TerminalStage) -> Self {
        self.terminal_stage = stage;
        self
    }

    pub fn with_run_ordering(mut self, ordering: RunOrdering) -> Self {
        self.run_ordering = ordering;
        self
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages the assistant understands. Pattern tables and suggestion lists
/// are keyed on this; anything unrecognized degrades to [`Language::En`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Te,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    /// Parses a language tag. Unknown or empty tags silently fall back to the
    /// default language rather than failing.
    pub fn from_tag(tag: &str) -> Language {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            "hi" => Language::Hi,
            "te" => Language::Te,
            _ => Language::DEFAULT,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Te => "te",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::DEFAULT
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

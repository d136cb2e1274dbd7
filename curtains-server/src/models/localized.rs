//! Bilingual display text
//!
//! The storefront renders English and Arabic side by side, so every
//! localized field carries exactly those two keys. Unknown language keys
//! are rejected on decode instead of being carried along silently.

use serde::{Deserialize, Serialize};

/// Display text in English and Arabic. Either side may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedText {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// English-only text, Arabic left empty
    pub fn en_only(en: impl Into<String>) -> Self {
        Self::new(en, "")
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ar.is_empty()
    }
}

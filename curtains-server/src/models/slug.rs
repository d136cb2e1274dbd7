//! Product slug validation
//!
//! Slug format: lowercase alphanumeric words joined by hyphens

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use super::ValidationError;

/// Maximum length for product slugs
const MAX_SLUG_LEN: usize = 96;

/// Starts with alphanumeric, then alphanumerics and hyphens
static SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("invalid slug regex"));

/// URL-safe product identifier, the public lookup key for a product
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Create a new slug, validating its format.
    ///
    /// # Example
    /// ```
    /// use curtains_server::models::Slug;
    ///
    /// assert!(Slug::new("curtain-model-1").is_ok());
    /// assert!(Slug::new("Curtain Model").is_err());
    /// assert!(Slug::new("-leading-dash").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "slug" });
        }

        if s.len() > MAX_SLUG_LEN {
            return Err(ValidationError::TooLong {
                field: "slug",
                max: MAX_SLUG_LEN,
            });
        }

        if !SLUG_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "slug",
                reason: "must be lowercase alphanumeric with hyphens, starting with alphanumeric",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Slug {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Slug::new(&raw).map_err(serde::de::Error::custom)
    }
}

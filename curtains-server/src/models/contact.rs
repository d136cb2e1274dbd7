//! Contact-form submissions

use serde::{Deserialize, Serialize};

/// Collection holding [`ContactMessage`] documents
pub const CONTACT_COLLECTION: &str = "contactmessage";

/// Inbound contact-form submission. Write-only: nothing reads these back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub phone: String,
    pub message: String,
    /// Page or campaign the message came from
    #[serde(default)]
    pub source: Option<String>,
}

//! Static site configuration served to the storefront
//!
//! Brand identity, contact channels and the catalog enumerations the
//! frontend uses to build its navigation and gallery tabs.

use serde::Serialize;

use crate::models::{Category, GalleryFilter};

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d115868.2872060351!2d55.17128!3d25.07501!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3e5f4348c1382c2d%3A0xdeb32a40ca331c0!2sBusiness%20Bay%20-%20Dubai!5e0!3m2!1sen!2sae!4v1700000000000";

#[derive(Debug, Clone, Serialize)]
pub struct Brand {
    pub name_en: &'static str,
    pub name_ar: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactDetails {
    pub address_en: &'static str,
    pub address_ar: &'static str,
    pub phone: &'static str,
    /// WhatsApp number, digits only for wa.me links
    pub whatsapp: &'static str,
    pub instagram: &'static str,
    pub tiktok: &'static str,
    pub map_embed: &'static str,
}

/// Everything `GET /api/config` returns
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    pub brand: Brand,
    pub contact: ContactDetails,
    pub categories: [Category; 5],
    pub gallery_filters: [GalleryFilter; 5],
}

impl SiteConfig {
    pub fn current() -> Self {
        Self {
            brand: Brand {
                name_en: "Premium Curtains",
                name_ar: "ستائر فاخرة",
            },
            contact: ContactDetails {
                address_en: "Business Bay, Dubai, UAE",
                address_ar: "الخليج التجاري، دبي، الإمارات",
                phone: "+971 55 123 4567",
                whatsapp: "+971551234567",
                instagram: "https://instagram.com/yourbrand",
                tiktok: "https://www.tiktok.com/@yourbrand",
                map_embed: MAP_EMBED,
            },
            categories: Category::ALL,
            gallery_filters: GalleryFilter::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enumerations_serialize_as_names() {
        let value = serde_json::to_value(SiteConfig::current()).unwrap();
        assert_eq!(
            value["categories"],
            json!([
                "Blackout Curtains",
                "Sheer Curtains",
                "Motorized Curtains",
                "Curtain Accessories",
                "Track Systems"
            ])
        );
        assert_eq!(
            value["gallery_filters"],
            json!(["living", "bedrooms", "majlis", "offices", "custom"])
        );
    }

    #[test]
    fn top_level_field_order() {
        let text = serde_json::to_string(&SiteConfig::current()).unwrap();
        let brand = text.find("\"brand\"").unwrap();
        let contact = text.find("\"contact\"").unwrap();
        let categories = text.find("\"categories\"").unwrap();
        let filters = text.find("\"gallery_filters\"").unwrap();
        assert!(brand < contact && contact < categories && categories < filters);
    }
}

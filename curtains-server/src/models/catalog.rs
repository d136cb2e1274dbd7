//! Catalog entities: products, gallery items and their closed enumerations
//!
//! Collection names follow the lowercase entity name.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{LocalizedText, Slug};

/// Collection holding [`Product`] documents
pub const PRODUCT_COLLECTION: &str = "product";

/// Collection holding [`GalleryItem`] documents
pub const GALLERY_COLLECTION: &str = "galleryitem";

/// Product category, serialized as its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Blackout Curtains")]
    Blackout,
    #[serde(rename = "Sheer Curtains")]
    Sheer,
    #[serde(rename = "Motorized Curtains")]
    Motorized,
    #[serde(rename = "Curtain Accessories")]
    Accessories,
    #[serde(rename = "Track Systems")]
    TrackSystems,
}

impl Category {
    /// All categories in storefront display order
    pub const ALL: [Category; 5] = [
        Category::Blackout,
        Category::Sheer,
        Category::Motorized,
        Category::Accessories,
        Category::TrackSystems,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blackout => "Blackout Curtains",
            Self::Sheer => "Sheer Curtains",
            Self::Motorized => "Motorized Curtains",
            Self::Accessories => "Curtain Accessories",
            Self::TrackSystems => "Track Systems",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery filter, serialized lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryFilter {
    Living,
    Bedrooms,
    Majlis,
    Offices,
    Custom,
}

impl GalleryFilter {
    /// All filters in gallery tab order
    pub const ALL: [GalleryFilter; 5] = [
        GalleryFilter::Living,
        GalleryFilter::Bedrooms,
        GalleryFilter::Majlis,
        GalleryFilter::Offices,
        GalleryFilter::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Living => "living",
            Self::Bedrooms => "bedrooms",
            Self::Majlis => "majlis",
            Self::Offices => "offices",
            Self::Custom => "custom",
        }
    }

    /// Capitalized label shown as the default item title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Living => "Living",
            Self::Bedrooms => "Bedrooms",
            Self::Majlis => "Majlis",
            Self::Offices => "Offices",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for GalleryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub slug: Slug,
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    pub category: Category,
    /// Primary image URL
    pub image: String,
    /// Additional image URLs, in display order
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// Photo of a finished project, shown on the gallery page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub category: GalleryFilter,
    pub image: String,
    #[serde(default)]
    pub title: LocalizedText,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_serializes_as_display_name() {
        let json = serde_json::to_value(Category::Accessories).unwrap();
        assert_eq!(json, json!("Curtain Accessories"));

        for category in Category::ALL {
            let round: Category = serde_json::from_value(json!(category.as_str())).unwrap();
            assert_eq!(round, category);
        }
    }

    #[test]
    fn gallery_filter_is_lowercase() {
        assert_eq!(serde_json::to_value(GalleryFilter::Majlis).unwrap(), json!("majlis"));
        let round: GalleryFilter = serde_json::from_value(json!("offices")).unwrap();
        assert_eq!(round, GalleryFilter::Offices);
        assert!(serde_json::from_value::<GalleryFilter>(json!("Offices")).is_err());
        assert_eq!(GalleryFilter::Bedrooms.label(), "Bedrooms");
    }

    #[test]
    fn product_defaults_optional_fields() {
        let product: Product = serde_json::from_value(json!({
            "slug": "sheer-white",
            "title": {"en": "Sheer White", "ar": ""},
            "category": "Sheer Curtains",
            "image": "https://example.com/sheer.jpg"
        }))
        .unwrap();

        assert!(product.description.is_empty());
        assert!(product.gallery.is_empty());
        assert_eq!(product.category, Category::Sheer);
    }

    #[test]
    fn product_rejects_unknown_category() {
        let result = serde_json::from_value::<Product>(json!({
            "slug": "velvet",
            "title": {"en": "Velvet"},
            "category": "Velvet Curtains",
            "image": "x"
        }));
        assert!(result.is_err());
    }
}

//! Domain models
//!
//! Typed records for everything the service writes. Reads are served as
//! stored documents, so these types describe the shape writers guarantee.

pub mod validation;
pub mod slug;
pub mod localized;
pub mod catalog;
pub mod contact;

pub use validation::ValidationError;
pub use slug::Slug;
pub use localized::LocalizedText;
pub use catalog::{Category, GalleryFilter, GalleryItem, Product, GALLERY_COLLECTION, PRODUCT_COLLECTION};
pub use contact::{ContactMessage, CONTACT_COLLECTION};

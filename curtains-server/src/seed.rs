//! Demo content for empty catalogs
//!
//! Runs once at startup, before the listener is bound. A collection that
//! already holds documents is left untouched. Failures are reported in the
//! returned [`SeedReport`] and never stop the service from starting.

use serde::Serialize;

use crate::models::{
    Category, GalleryFilter, GalleryItem, LocalizedText, Product, Slug, ValidationError,
    GALLERY_COLLECTION, PRODUCT_COLLECTION,
};
use crate::store::{Store, StoreError};

/// Number of demo products
pub const DEMO_PRODUCT_COUNT: usize = 10;

/// Demo gallery items per gallery filter
pub const GALLERY_ITEMS_PER_FILTER: usize = 4;

/// Images each product gallery cycles through
const PRODUCT_IMAGES: [&str; 5] = [
    "https://images.unsplash.com/photo-1524758631624-e2822e304c36?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1505692952047-1a78307da8f2?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1499951360447-b19be8fe80f5?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1519710164239-da123dc03ef4?q=80&w=1400&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1501045661006-fcebe0257c3f?q=80&w=1400&auto=format&fit=crop",
];

/// Images per product (primary image first)
const PRODUCT_GALLERY_LEN: usize = 3;

const PRODUCT_DESCRIPTION_EN: &str =
    "Premium handcrafted curtains with elegant drape and tailored finish.";
const PRODUCT_DESCRIPTION_AR: &str = "ستائر فاخرة مصنوعة بعناية بملمس أنيق وتفاصيل متقنة.";

const GALLERY_IMAGES: [(GalleryFilter, &str); 5] = [
    (
        GalleryFilter::Living,
        "https://images.unsplash.com/photo-1505691938895-1758d7feb511?q=80&w=1400&auto=format&fit=crop",
    ),
    (
        GalleryFilter::Bedrooms,
        "https://images.unsplash.com/photo-1505691723518-36a6dd1f0472?q=80&w=1400&auto=format&fit=crop",
    ),
    (
        GalleryFilter::Majlis,
        "https://images.unsplash.com/photo-1484101403633-562f891dc89a?q=80&w=1400&auto=format&fit=crop",
    ),
    (
        GalleryFilter::Offices,
        "https://images.unsplash.com/photo-1538688423619-a81d3f23454b?q=80&w=1400&auto=format&fit=crop",
    ),
    (
        GalleryFilter::Custom,
        "https://images.unsplash.com/photo-1497366216548-37526070297c?q=80&w=1400&auto=format&fit=crop",
    ),
];

/// Result of seeding one collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Collection was empty and the demo set was written
    Seeded { inserted: usize },

    /// Collection already had documents
    Skipped { existing: u64 },

    /// Store unavailable or a write failed. Earlier inserts are kept.
    Failed { reason: String },
}

impl SeedOutcome {
    fn failed(err: impl std::fmt::Display) -> Self {
        Self::Failed {
            reason: err.to_string(),
        }
    }
}

/// Outcomes for both seeded collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub products: SeedOutcome,
    pub gallery: SeedOutcome,
}

/// Seed both catalog collections if they are empty.
pub async fn run(store: &Store) -> SeedReport {
    let products = match demo_products() {
        Ok(products) => seed_collection(store, PRODUCT_COLLECTION, &products).await,
        Err(e) => SeedOutcome::failed(e),
    };
    log_outcome(PRODUCT_COLLECTION, &products);

    let gallery = seed_collection(store, GALLERY_COLLECTION, &demo_gallery()).await;
    log_outcome(GALLERY_COLLECTION, &gallery);

    SeedReport { products, gallery }
}

async fn seed_collection<T>(store: &Store, collection: &str, records: &[T]) -> SeedOutcome
where
    T: Serialize + Sync,
{
    match insert_if_empty(store, collection, records).await {
        Ok(outcome) => outcome,
        Err(e) => SeedOutcome::failed(e),
    }
}

async fn insert_if_empty<T>(
    store: &Store,
    collection: &str,
    records: &[T],
) -> Result<SeedOutcome, StoreError>
where
    T: Serialize + Sync,
{
    let existing = store.count_documents(collection).await?;
    if existing > 0 {
        return Ok(SeedOutcome::Skipped { existing });
    }

    for record in records {
        store.insert(collection, record).await?;
    }

    Ok(SeedOutcome::Seeded {
        inserted: records.len(),
    })
}

fn log_outcome(collection: &str, outcome: &SeedOutcome) {
    match outcome {
        SeedOutcome::Seeded { inserted } => {
            tracing::info!(collection, count = inserted, "Seeded demo documents")
        }
        SeedOutcome::Skipped { existing } => {
            tracing::debug!(collection, count = existing, "Collection not empty, seeding skipped")
        }
        SeedOutcome::Failed { reason } => {
            tracing::warn!(collection, %reason, "Seeding failed, continuing without demo data")
        }
    }
}

/// The fixed demo product set.
///
/// Product `i` (1-based) takes category `i % 5`, primary image `i % 5` and
/// a three-image gallery starting at the primary image.
pub fn demo_products() -> Result<Vec<Product>, ValidationError> {
    (1..=DEMO_PRODUCT_COUNT)
        .map(|i| {
            let gallery = (0..PRODUCT_GALLERY_LEN)
                .map(|j| PRODUCT_IMAGES[(i + j) % PRODUCT_IMAGES.len()].to_owned())
                .collect();

            Ok(Product {
                slug: Slug::new(&format!("curtain-model-{i}"))?,
                title: LocalizedText::new(format!("Curtain Model {i}"), format!("طراز ستارة {i}")),
                description: LocalizedText::new(PRODUCT_DESCRIPTION_EN, PRODUCT_DESCRIPTION_AR),
                category: Category::ALL[i % Category::ALL.len()],
                image: PRODUCT_IMAGES[i % PRODUCT_IMAGES.len()].to_owned(),
                gallery,
            })
        })
        .collect()
}

/// The fixed demo gallery: four items per filter, titled with the filter label.
pub fn demo_gallery() -> Vec<GalleryItem> {
    GALLERY_IMAGES
        .iter()
        .flat_map(|&(category, image)| {
            (0..GALLERY_ITEMS_PER_FILTER).map(move |_| GalleryItem {
                category,
                image: image.to_owned(),
                title: LocalizedText::en_only(category.label()),
            })
        })
        .collect()
}

//! Product catalog endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use mongodb::bson::doc;
use serde_json::Value;

use crate::http::documents::{to_response_json, to_response_list};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::PRODUCT_COLLECTION;

/// GET /api/products - every product, store order
async fn list_products(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Value>>, ApiError> {
    let products = state.store.get_documents(PRODUCT_COLLECTION).await?;
    Ok(Json(to_response_list(products)))
}

/// GET /api/products/{slug} - a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let product = state
        .store
        .find_one(PRODUCT_COLLECTION, doc! { "slug": slug.as_str() })
        .await?
        .ok_or(ApiError::NotFound { resource: "Product" })?;

    Ok(Json(to_response_json(product)))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/{slug}", get(get_product))
}

#[cfg(test)]
mod tests {
    use crate::http::test_support::{app_with, get, memory_app};
    use crate::store::testing::FailingStore;
    use crate::store::Store;
    use axum::http::StatusCode;

    #[tokio::test]
    async fn lists_seeded_products_with_string_ids() {
        let (app, _) = memory_app().await;
        let (status, body) = get(app, "/api/products").await;

        assert_eq!(status, StatusCode::OK);
        let products = body.as_array().unwrap();
        assert_eq!(products.len(), 10);
        for product in products {
            let id = product["_id"].as_str().unwrap();
            assert_eq!(id.len(), 24);
        }
        assert_eq!(products[0]["slug"], "curtain-model-1");
        assert_eq!(products[0]["title"]["en"], "Curtain Model 1");
    }

    #[tokio::test]
    async fn every_listed_slug_resolves_to_itself() {
        let (app, _) = memory_app().await;
        let (_, listing) = get(app.clone(), "/api/products").await;

        for product in listing.as_array().unwrap() {
            let slug = product["slug"].as_str().unwrap();
            let (status, found) = get(app.clone(), &format!("/api/products/{slug}")).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(&found, product);
        }
    }

    #[tokio::test]
    async fn missing_slug_is_404() {
        let (app, _) = memory_app().await;
        let (status, body) = get(app, "/api/products/curtain-model-99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Product not found");
    }

    #[tokio::test]
    async fn store_failure_is_500_with_error_text() {
        let app = app_with(Store::new(FailingStore::new("server selection timeout")));

        let (status, body) = get(app.clone(), "/api/products").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "server selection timeout");

        let (status, _) = get(app, "/api/products/curtain-model-1").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unavailable_store_is_500() {
        let (status, body) = get(app_with(Store::unavailable()), "/api/products").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "document store is not configured");
    }
}

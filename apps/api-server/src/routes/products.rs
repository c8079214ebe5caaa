//! # Product Routes
//!
//! ```text
//! GET  /api/products        → 200 [Product]
//! GET  /api/products/{id}   → 200 Product | 404 {"error": "Product not found"}
//! POST /api/products        → 201 Product | 400 {"error": "Name and price are required"}
//! PUT  /api/products/{id}   → 200 Product | 404 | 400 (unreadable body)
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use devops_core::validation::validate_new_product;
use devops_core::{CreateProductRequest, Product, ProductPatch, ValidationError};

use crate::error::ApiError;
use crate::routes::create_payload;
use crate::AppState;

/// Product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/", get(list_products).post(create_product))
        .route("/api/products/{id}", get(get_product).put(update_product))
}

fn product_id(id: Result<Path<u64>, PathRejection>) -> Result<u64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::not_found("Product"))
}

async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store.products().list().await)
}

async fn get_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(id)?;

    state
        .store
        .products()
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product"))
}

/// Creates a product from `{"name", "price", "stock"?}`.
async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let request = create_payload(payload)?;

    let new_product = validate_new_product(request)?;
    let product = state.store.products().create(new_product).await;

    info!(id = product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Applies a partial update.
///
/// The id is resolved before the body so that an unknown product is a 404
/// whatever the payload looks like.
async fn update_product(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(id)?;
    let products = state.store.products();

    if products.get(id).await.is_none() {
        return Err(ApiError::not_found("Product"));
    }

    let patch = payload
        .map(|Json(patch)| patch)
        .map_err(|rejection| ValidationError::MalformedBody {
            reason: rejection.body_text(),
        })?;

    let product = products.update(id, patch).await?;

    info!(id, "Product updated");
    Ok(Json(product))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{seeded_router, send, send_raw};

    #[tokio::test]
    async fn test_list_products() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/products/", None).await;

        assert_eq!(res.status, StatusCode::OK);
        let products = res.json();
        let products = products.as_array().unwrap();
        assert_eq!(products.len(), 3);
        for product in products {
            for field in ["id", "name", "price", "stock"] {
                assert!(product.get(field).is_some(), "missing {field}");
            }
        }
    }

    #[tokio::test]
    async fn test_get_product_by_id() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/products/1", None).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(
            res.json(),
            json!({ "id": 1, "name": "Laptop", "price": 999.99, "stock": 10 })
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent_product() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/products/999", None).await;

        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.json()["error"], "Product not found");
    }

    #[tokio::test]
    async fn test_create_product() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::POST,
            "/api/products/",
            Some(json!({ "name": "Test Product", "price": 19.99, "stock": 100 })),
        )
        .await;

        assert_eq!(res.status, StatusCode::CREATED);
        let body = res.json();
        assert_eq!(body["id"], 4);
        assert_eq!(body["name"], "Test Product");
        assert_eq!(body["price"], 19.99);
        assert_eq!(body["stock"], 100);
    }

    #[tokio::test]
    async fn test_create_product_defaults_stock() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::POST,
            "/api/products",
            Some(json!({ "name": "Cable", "price": 4.5 })),
        )
        .await;

        assert_eq!(res.status, StatusCode::CREATED);
        assert_eq!(res.json()["stock"], 0);
    }

    #[tokio::test]
    async fn test_create_product_missing_price() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::POST,
            "/api/products/",
            Some(json!({ "name": "Cable" })),
        )
        .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json()["error"], "Name and price are required");
    }

    #[tokio::test]
    async fn test_create_product_wrong_field_types() {
        let router = seeded_router();
        for body in [
            json!({ "name": "Cable", "price": 4.5, "stock": 2.5 }),
            json!({ "name": "Cable", "price": "9.99" }),
        ] {
            let res = send(&router, Method::POST, "/api/products/", Some(body)).await;

            assert_eq!(res.status, StatusCode::BAD_REQUEST);
            let body = res.json();
            assert_eq!(body["code"], "VALIDATION_ERROR");
            let error = body["error"].as_str().unwrap();
            assert!(error.starts_with("Invalid JSON body"), "{error}");
        }

        let list = send(&router, Method::GET, "/api/products/", None).await;
        assert_eq!(list.json().as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_update_product() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::PUT,
            "/api/products/1",
            Some(json!({ "price": 899.99, "stock": 15 })),
        )
        .await;

        assert_eq!(res.status, StatusCode::OK);
        let body = res.json();
        assert_eq!(body["price"], 899.99);
        assert_eq!(body["stock"], 15);
        assert_eq!(body["name"], "Laptop");
    }

    #[tokio::test]
    async fn test_update_nonexistent_product() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::PUT,
            "/api/products/999",
            Some(json!({ "price": 99.99 })),
        )
        .await;

        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.json()["error"], "Product not found");
    }

    #[tokio::test]
    async fn test_update_with_unreadable_body() {
        let router = seeded_router();
        let res = send_raw(
            &router,
            Method::PUT,
            "/api/products/1",
            Some(("application/json", "{not json".to_string())),
        )
        .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json()["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_product_crud_workflow() {
        let router = seeded_router();

        let created = send(
            &router,
            Method::POST,
            "/api/products/",
            Some(json!({ "name": "Workflow Product", "price": 49.99, "stock": 20 })),
        )
        .await;
        assert_eq!(created.status, StatusCode::CREATED);
        let id = created.json()["id"].as_u64().unwrap();

        let fetched = send(&router, Method::GET, &format!("/api/products/{id}"), None).await;
        assert_eq!(fetched.status, StatusCode::OK);

        let updated = send(
            &router,
            Method::PUT,
            &format!("/api/products/{id}"),
            Some(json!({ "price": 39.99, "stock": 15 })),
        )
        .await;
        assert_eq!(updated.status, StatusCode::OK);

        let body = updated.json();
        assert_eq!(body["price"], 39.99);
        assert_eq!(body["stock"], 15);
        assert_eq!(body["name"], "Workflow Product");
    }
}

//! Product API handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use kasir_core::validation::validate_product;
use kasir_core::{Product, ProductInput};

use crate::error::ApiResult;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list).post(create))
        .route("/api/products/{id}", get(get_by_id).put(update).delete(delete))
}

/// GET /api/products - All products
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.db.products().list().await?))
}

/// POST /api/products - Create a product
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(input) = payload?;
    validate_product(&input)?;

    let product = state.db.products().create(&input).await?;
    info!(id = product.id, "Product created via API");

    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/products/{id} - Get product by ID
async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Product>> {
    Ok(Json(state.db.products().get_by_id(id).await?))
}

/// PUT /api/products/{id} - Replace a product
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Json(input) = payload?;
    validate_product(&input)?;

    Ok(Json(state.db.products().update(id, &input).await?))
}

/// DELETE /api/products/{id}
async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.db.products().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{get, post, send, test_app};
    use axum::http::Method;

    #[tokio::test]
    async fn test_product_lifecycle() {
        let (app, _db) = test_app().await;

        let (status, created) = post(
            &app,
            "/api/products",
            r#"{"nama": "Indomie Godog", "harga": 3500, "stok": 10}"#,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["nama"], "Indomie Godog");

        let (status, fetched) = get(&app, &format!("/api/products/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/api/products/{id}"),
            Some(r#"{"nama": "Indomie Goreng", "harga": 3000, "stok": 8}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["harga"], 3000);

        let (status, list) = get(&app, "/api/products").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, Method::DELETE, &format!("/api/products/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = get(&app, &format!("/api/products/{id}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("not found"));
    }

    #[tokio::test]
    async fn test_invalid_product_rejected() {
        let (app, _db) = test_app().await;

        let (status, body) = post(&app, "/api/products", r#"{"nama": "", "harga": 1000}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "nama is required");

        let (status, body) = post(&app, "/api/products", r#"{"nama": "Kecap", "harga": -1}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "harga must not be negative");

        let (status, _) = post(&app, "/api/products", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let (app, _db) = test_app().await;

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/products/404",
            Some(r#"{"nama": "Kecap", "harga": 1, "stok": 1}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

//! Category API handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use kasir_core::validation::validate_category;
use kasir_core::{Category, CategoryInput};

use crate::error::ApiResult;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/categories", get(list).post(create))
        .route("/api/categories/{id}", get(get_by_id).put(update).delete(delete))
}

async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.db.categories().list().await?))
}

async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let Json(input) = payload?;
    validate_category(&input)?;

    let category = state.db.categories().create(&input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Category>> {
    Ok(Json(state.db.categories().get_by_id(id).await?))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<CategoryInput>, JsonRejection>,
) -> ApiResult<Json<Category>> {
    let Json(input) = payload?;
    validate_category(&input)?;

    Ok(Json(state.db.categories().update(id, &input).await?))
}

async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<StatusCode> {
    state.db.categories().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

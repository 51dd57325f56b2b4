//! Transaction API handlers.
//!
//! The inbound body is passed to the recorder untouched: a missing or zero
//! `total` and a missing `date` are filled in there, and line items are not
//! validated.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use kasir_core::Transaction;

use crate::error::ApiResult;
use crate::AppState;

/// Response wrapper for a recorded transaction.
#[derive(Debug, Serialize)]
pub struct Created<T> {
    pub status: &'static str,
    pub message: &'static str,
    pub data: T,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/transactions", post(create))
        .route("/api/transactions/{id}", get(get_by_id))
}

/// POST /api/transactions - Record a sale
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Transaction>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Created<Transaction>>)> {
    let Json(mut transaction) = payload?;

    state.db.transactions().create(&mut transaction).await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            status: "success",
            message: "Transaction created successfully",
            data: transaction,
        }),
    ))
}

/// GET /api/transactions/{id} - Transaction with its line items
async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Json<Transaction>> {
    Ok(Json(state.db.transactions().get_by_id(id).await?))
}

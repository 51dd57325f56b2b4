//! Daily report handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;
use tracing::debug;

use kasir_core::report::parse_report_date;
use kasir_core::DailyReport;

use crate::error::ApiResult;
use crate::AppState;

/// Query string for `GET /api/report`.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// `YYYY-MM-DD`; today when absent
    date: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/report", get(for_date))
        .route("/api/report/hari-ini", get(today))
}

/// GET /api/report/hari-ini - Today's report (server local time)
async fn today(State(state): State<AppState>) -> ApiResult<Json<DailyReport>> {
    Ok(Json(state.db.reports().today().await?))
}

/// GET /api/report?date=YYYY-MM-DD
async fn for_date(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<Json<DailyReport>> {
    let Query(query) = query?;

    let date = match query.date.as_deref() {
        Some(raw) if !raw.trim().is_empty() => parse_report_date(raw)?,
        _ => Local::now().date_naive(),
    };
    debug!(%date, "Report requested");

    Ok(Json(state.db.reports().daily(date).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{get, post, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_report_shape() {
        let (app, _db) = test_app().await;

        let (status, body) = get(&app, "/api/report/hari-ini").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "total_revenue": 0,
                "total_transaksi": 0,
                "produk_terlaris": {"nama": "", "qty_terjual": 0}
            })
        );
    }

    #[tokio::test]
    async fn test_report_for_date() {
        let (app, _db) = test_app().await;

        let (_, product) = post(
            &app,
            "/api/products",
            r#"{"nama": "Vit 1000ml", "harga": 3000, "stok": 40}"#,
        )
        .await;
        let product_id = product["id"].as_i64().unwrap();

        for (date, qty) in [("2024-05-01T08:00:00", 2), ("2024-05-01T23:59:59", 3), ("2024-05-02T00:00:00", 7)] {
            let body = json!({
                "date": date,
                "details": [{"product_id": product_id, "quantity": qty, "subtotal": qty * 3000}]
            });
            let (status, _) = post(&app, "/api/transactions", &body.to_string()).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let (status, body) = get(&app, "/api/report?date=2024-05-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "total_revenue": 15000,
                "total_transaksi": 2,
                "produk_terlaris": {"nama": "Vit 1000ml", "qty_terjual": 5}
            })
        );
    }

    #[tokio::test]
    async fn test_today_includes_undated_transaction() {
        let (app, _db) = test_app().await;

        post(&app, "/api/transactions", r#"{"total": 2500}"#).await;

        let (status, body) = get(&app, "/api/report").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_revenue"], 2500);
        assert_eq!(body["total_transaksi"], 1);
    }

    #[tokio::test]
    async fn test_bad_date() {
        let (app, _db) = test_app().await;

        let (status, body) = get(&app, "/api/report?date=01-05-2024").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("YYYY-MM-DD"));
    }
}

//! # Report Repository
//!
//! Daily sales aggregation: revenue, transaction count and the
//! best-selling product for one calendar day.
//!
//! ## Query Plan
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ReportRepository::for_window                         │
//! │                                                                         │
//! │  DayWindow (D)  →  [D 00:00:00, D+1 00:00:00)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN  (one read snapshot for both queries)                           │
//! │       │                                                                 │
//! │       ├── transactions in window                                       │
//! │       │      └── SUM(total_amount), COUNT(id)                          │
//! │       │                                                                 │
//! │       ├── details ⋈ transactions ⋈ products in window                  │
//! │       │      └── GROUP BY product, top SUM(quantity)                   │
//! │       │          ties → lowest product id                              │
//! │       ▼                                                                 │
//! │  COMMIT                                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Line items whose product no longer exists still count toward revenue
//! but never become the best seller.

use chrono::{Local, NaiveDate};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::{BestSeller, DailyReport, DayWindow};

/// Repository for computing sales reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Report for the current local calendar day.
    pub async fn today(&self) -> DbResult<DailyReport> {
        self.daily(Local::now().date_naive()).await
    }

    /// Report for a calendar date.
    pub async fn daily(&self, date: NaiveDate) -> DbResult<DailyReport> {
        self.for_window(DayWindow::for_date(date)).await
    }

    /// Aggregates every transaction whose date falls inside `window`.
    ///
    /// The window is half-open, `[D 00:00:00, D+1 00:00:00)`, so a sale
    /// stamped at `23:59:59.999` belongs to D and one at midnight belongs
    /// to D+1. Stored dates carry fractional seconds, which an inclusive
    /// `23:59:59` upper bound would miss.
    pub async fn for_window(&self, window: DayWindow) -> DbResult<DailyReport> {
        let start = window.start();
        let end = window.next_day_start();

        debug!(date = %window.date(), "Computing daily report");

        let mut db_tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let (total_revenue, total_transactions): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_amount), 0), COUNT(id)
            FROM transactions
            WHERE date >= ?1 AND date < ?2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&mut *db_tx)
        .await?;

        let best_seller: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT p.name, SUM(td.quantity) AS total_qty
            FROM transaction_details td
            INNER JOIN transactions t ON t.id = td.transaction_id
            INNER JOIN products p ON p.id = td.product_id
            WHERE t.date >= ?1 AND t.date < ?2
            GROUP BY p.id, p.name
            ORDER BY total_qty DESC, p.id ASC
            LIMIT 1
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_optional(&mut *db_tx)
        .await?;

        db_tx.commit().await.map_err(DbError::transaction)?;

        let report = DailyReport {
            total_revenue,
            total_transactions,
            best_seller: best_seller.map(|(name, quantity_sold)| BestSeller {
                name,
                quantity_sold,
            }),
        };

        debug!(
            date = %window.date(),
            until = %window.end(),
            revenue = %report.revenue(),
            transactions = report.total_transactions,
            "Daily report computed"
        );
        Ok(report)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

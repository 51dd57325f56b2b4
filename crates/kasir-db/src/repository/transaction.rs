//! # Transaction Repository
//!
//! Records completed sales: one header row plus its line items, written as
//! a single unit of work.
//!
//! ## Recording Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    TransactionRepository::create                        │
//! │                                                                         │
//! │  total == 0 ?  ──yes──► total = Σ details.subtotal                     │
//! │       │                     └── overflow ──► DbError::Domain           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN                                                                 │
//! │       │                                                                 │
//! │       ├── date unset ? ──► date = now (local)                          │
//! │       │                                                                 │
//! │       ├── INSERT transactions (date, total_amount) RETURNING id        │
//! │       │                                                                 │
//! │       ├── every detail.transaction_id = id                             │
//! │       │                                                                 │
//! │       ├── INSERT transaction_details  (one row per line item)          │
//! │       │        │                                                        │
//! │       │        └── any failure ──► ROLLBACK, nothing persisted         │
//! │       ▼                                                                 │
//! │  COMMIT                                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product existence, quantities and stock are not checked here.

use chrono::{Local, NaiveDateTime};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use kasir_core::{Transaction, TransactionDetail};

/// Repository for recording and reading sales transactions.
///
/// ## Usage
/// ```rust,ignore
/// let repo = TransactionRepository::new(pool);
///
/// let mut tx = Transaction { details: vec![...], ..Default::default() };
/// repo.create(&mut tx).await?;
/// assert!(tx.id > 0);
/// ```
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Persists a transaction and its line items atomically.
    ///
    /// On success `tx` carries the assigned id, the effective date and
    /// total, and every detail has its own id and the parent's
    /// `transaction_id`. On failure nothing is persisted.
    pub async fn create(&self, tx: &mut Transaction) -> DbResult<()> {
        if tx.fill_missing_total()? {
            debug!(total = %tx.total(), "Computed total from line items");
        }

        let mut db_tx = self.pool.begin().await.map_err(DbError::transaction)?;

        let date = tx.fill_missing_date(Local::now().naive_local());

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO transactions (date, total_amount)
            VALUES (?1, ?2)
            RETURNING id
            "#,
        )
        .bind(date)
        .bind(tx.total)
        .fetch_one(&mut *db_tx)
        .await?;

        tx.assign_id(id);

        for detail in &mut tx.details {
            let result = sqlx::query(
                r#"
                INSERT INTO transaction_details (transaction_id, product_id, quantity, subtotal)
                VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(detail.transaction_id)
            .bind(detail.product_id)
            .bind(detail.quantity)
            .bind(detail.subtotal)
            .execute(&mut *db_tx)
            .await?;

            detail.id = result.last_insert_rowid();
        }

        // Dropping db_tx on any early return above rolls back
        db_tx.commit().await.map_err(DbError::transaction)?;

        info!(
            id = id,
            total = %tx.total(),
            items = tx.details.len(),
            "Transaction recorded"
        );
        Ok(())
    }

    /// Loads a transaction with its line items.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Transaction> {
        let header: Option<(i64, NaiveDateTime, i64)> = sqlx::query_as(
            r#"
            SELECT id, date, total_amount
            FROM transactions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let (id, date, total) = header.ok_or_else(|| DbError::not_found("Transaction", id))?;

        let details = sqlx::query_as::<_, TransactionDetail>(
            r#"
            SELECT id, transaction_id, product_id, quantity, subtotal
            FROM transaction_details
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        debug!(id = id, items = details.len(), "Loaded transaction");

        Ok(Transaction {
            id,
            date: Some(date),
            total,
            details,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::{at, detail, record, test_db};

    async fn count(db: &crate::Database, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_ids() {
        let db = test_db().await;
        let repo = db.transactions();

        let mut tx = Transaction {
            details: vec![detail(1, 2, 7000), detail(2, 1, 3000)],
            ..Default::default()
        };
        repo.create(&mut tx).await.unwrap();

        assert!(tx.id > 0);
        for d in &tx.details {
            assert_eq!(d.transaction_id, tx.id);
            assert!(d.id > 0);
        }
        assert_ne!(tx.details[0].id, tx.details[1].id);

        let stored = repo.get_by_id(tx.id).await.unwrap();
        assert_eq!(stored.details.len(), 2);
        assert_eq!(stored.details, tx.details);
    }

    #[tokio::test]
    async fn test_missing_total_is_sum_of_subtotals() {
        let db = test_db().await;
        let repo = db.transactions();

        let mut tx = Transaction {
            details: vec![detail(1, 1, 1000), detail(2, 1, 2500)],
            ..Default::default()
        };
        repo.create(&mut tx).await.unwrap();
        assert_eq!(tx.total, 3500);

        let stored = repo.get_by_id(tx.id).await.unwrap();
        assert_eq!(stored.total, 3500);
    }

    #[tokio::test]
    async fn test_explicit_total_is_kept() {
        let db = test_db().await;

        // Mismatch with the line items is stored as given
        let tx = record(&db, at(2024, 1, 15, 10, 0, 0), 999, vec![detail(1, 1, 3500)]).await;
        assert_eq!(tx.total, 999);

        let stored = db.transactions().get_by_id(tx.id).await.unwrap();
        assert_eq!(stored.total, 999);
    }

    #[tokio::test]
    async fn test_missing_date_defaults_to_now() {
        let db = test_db().await;
        let repo = db.transactions();

        let before = Local::now().naive_local();
        let mut tx = Transaction {
            details: vec![detail(1, 1, 1000)],
            ..Default::default()
        };
        repo.create(&mut tx).await.unwrap();
        let after = Local::now().naive_local();

        let date = tx.date.unwrap();
        assert!(date >= before && date <= after);

        let stored = repo.get_by_id(tx.id).await.unwrap();
        assert_eq!(stored.date, Some(date));
    }

    #[tokio::test]
    async fn test_explicit_date_is_kept() {
        let db = test_db().await;
        let date = at(2023, 12, 31, 23, 59, 59);

        let tx = record(&db, date, 1000, vec![]).await;

        let stored = db.transactions().get_by_id(tx.id).await.unwrap();
        assert_eq!(stored.date, Some(date));
    }

    #[tokio::test]
    async fn test_empty_details() {
        let db = test_db().await;
        let repo = db.transactions();

        let mut tx = Transaction::default();
        repo.create(&mut tx).await.unwrap();

        assert!(tx.id > 0);
        assert_eq!(tx.total, 0);
        assert_eq!(count(&db, "transactions").await, 1);
        assert_eq!(count(&db, "transaction_details").await, 0);
    }

    #[tokio::test]
    async fn test_supplied_transaction_id_is_overwritten() {
        let db = test_db().await;

        let mut line = detail(1, 1, 500);
        line.transaction_id = 424242;
        let tx = record(&db, at(2024, 1, 15, 9, 0, 0), 0, vec![line]).await;

        assert_eq!(tx.details[0].transaction_id, tx.id);
        let stored = db.transactions().get_by_id(tx.id).await.unwrap();
        assert_eq!(stored.details[0].transaction_id, tx.id);
    }

    #[tokio::test]
    async fn test_unknown_product_is_stored() {
        let db = test_db().await;

        let tx = record(&db, at(2024, 1, 15, 9, 0, 0), 0, vec![detail(9999, -2, 0)]).await;

        let stored = db.transactions().get_by_id(tx.id).await.unwrap();
        assert_eq!(stored.details[0].product_id, 9999);
        assert_eq!(stored.details[0].quantity, -2);
    }

    #[tokio::test]
    async fn test_failed_detail_rolls_back_everything() {
        let db = test_db().await;

        sqlx::query(
            r#"
            CREATE TRIGGER fail_detail BEFORE INSERT ON transaction_details
            WHEN NEW.product_id = -1
            BEGIN
                SELECT RAISE(ABORT, 'injected failure');
            END;
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let mut tx = Transaction {
            details: vec![detail(1, 1, 1000), detail(-1, 1, 1000)],
            ..Default::default()
        };
        let result = db.transactions().create(&mut tx).await;

        assert!(result.is_err());
        assert_eq!(count(&db, "transactions").await, 0);
        assert_eq!(count(&db, "transaction_details").await, 0);
    }

    #[tokio::test]
    async fn test_overflowing_total_is_rejected() {
        let db = test_db().await;

        let mut tx = Transaction {
            details: vec![detail(1, 1, i64::MAX), detail(2, 1, 1)],
            ..Default::default()
        };
        let err = db.transactions().create(&mut tx).await.unwrap_err();

        assert!(matches!(err, DbError::Domain(kasir_core::CoreError::TotalOverflow)));
        assert_eq!(tx.id, 0);
        assert_eq!(count(&db, "transactions").await, 0);
        assert_eq!(count(&db, "transaction_details").await, 0);
    }

    #[tokio::test]
    async fn test_get_missing_transaction() {
        let db = test_db().await;

        let err = db.transactions().get_by_id(77).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}

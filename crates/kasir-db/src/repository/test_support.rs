//! Shared fixtures for repository tests.

use chrono::{NaiveDate, NaiveDateTime};
use kasir_core::{ProductInput, Transaction, TransactionDetail};

use crate::pool::{Database, DbConfig};

pub async fn test_db() -> Database {
    Database::new(DbConfig::in_memory()).await.unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

pub fn detail(product_id: i64, quantity: i64, subtotal: i64) -> TransactionDetail {
    TransactionDetail {
        product_id,
        quantity,
        subtotal,
        ..Default::default()
    }
}

pub async fn add_product(db: &Database, name: &str, price: i64) -> i64 {
    db.products()
        .create(&ProductInput {
            name: name.to_string(),
            price,
            stock: 10,
        })
        .await
        .unwrap()
        .id
}

/// Records a transaction with an explicit date and total.
pub async fn record(
    db: &Database,
    date: NaiveDateTime,
    total: i64,
    details: Vec<TransactionDetail>,
) -> Transaction {
    let mut tx = Transaction {
        date: Some(date),
        total,
        details,
        ..Default::default()
    };
    db.transactions().create(&mut tx).await.unwrap();
    tx
}

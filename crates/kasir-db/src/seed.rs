//! # Default Catalog
//!
//! Starter categories and products for a fresh database. Each table is
//! seeded only while it is empty, so running the seeder twice is harmless.

use tracing::info;

use crate::error::DbResult;
use crate::pool::Database;
use kasir_core::{CategoryInput, ProductInput};

/// (name, description)
const CATEGORIES: &[(&str, &str)] = &[
    ("Makanan", "Makanan ringan dan berat"),
    ("Minuman", "Minuman kemasan"),
];

/// (name, price, stock)
const PRODUCTS: &[(&str, i64, i64)] = &[
    ("Indomie Godog", 3500, 10),
    ("Vit 1000ml", 3000, 40),
    ("Kecap", 12000, 20),
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
}

/// Inserts the default catalog into empty tables.
pub async fn seed_default_catalog(db: &Database) -> DbResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    if db.categories().count().await? == 0 {
        for (name, description) in CATEGORIES {
            db.categories()
                .create(&CategoryInput {
                    name: (*name).to_string(),
                    description: Some((*description).to_string()),
                })
                .await?;
            summary.categories += 1;
        }
    }

    if db.products().count().await? == 0 {
        for (name, price, stock) in PRODUCTS {
            db.products()
                .create(&ProductInput {
                    name: (*name).to_string(),
                    price: *price,
                    stock: *stock,
                })
                .await?;
            summary.products += 1;
        }
    }

    info!(
        categories = summary.categories,
        products = summary.products,
        "Default catalog seeded"
    );
    Ok(summary)
}

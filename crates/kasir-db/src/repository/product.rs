//! # Product Repository
//!
//! CRUD for the product catalog.
//!
//! Products are referenced by transaction line items only by id, so
//! deleting a product never touches recorded sales. Those line items
//! simply stop contributing to the best-seller ranking.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use kasir_core::{Product, ProductInput};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo.create(&ProductInput { name: "Kecap".into(), price: 12000, stock: 20 }).await?;
/// let same = repo.get_by_id(product.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Lists all products ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Product found
    /// * `Err(DbError::NotFound)` - No product with that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, stock
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Inserts a product and returns it with its assigned id.
    pub async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, price, stock
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .fetch_one(&self.pool)
        .await?;

        info!(id = product.id, name = %product.name, price = %product.price(), "Product created");
        Ok(product)
    }

    /// Replaces every writable field of a product.
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?1, price = ?2, stock = ?3
            WHERE id = ?4
            RETURNING id, name, price, stock
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Product", id))?;

        info!(id = id, "Product updated");
        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        info!(id = id, "Product deleted");
        Ok(())
    }

    /// Number of products in the catalog.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

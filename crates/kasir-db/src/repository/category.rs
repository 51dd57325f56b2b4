//! # Category Repository
//!
//! CRUD for product categories. Categories are a flat list; products do
//! not reference them.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{DbError, DbResult};
use kasir_core::{Category, CategoryInput};

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CategoryRepository { pool }
    }

    /// Lists all categories ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Category> {
        sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("Category", id))
    }

    pub async fn create(&self, input: &CategoryInput) -> DbResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description)
            VALUES (?1, ?2)
            RETURNING id, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.pool)
        .await?;

        info!(id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub async fn update(&self, id: i64, input: &CategoryInput) -> DbResult<Category> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET name = ?1, description = ?2
            WHERE id = ?3
            RETURNING id, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Category", id))?;

        info!(id = id, "Category updated");
        Ok(category)
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        info!(id = id, "Category deleted");
        Ok(())
    }

    /// Number of categories.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support::test_db;

    #[tokio::test]
    async fn test_category_crud() {
        let db = test_db().await;
        let repo = db.categories();

        let created = repo
            .create(&CategoryInput {
                name: "Makanan".to_string(),
                description: Some("Makanan ringan dan berat".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), created);

        let updated = repo
            .update(
                created.id,
                &CategoryInput {
                    name: "Minuman".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Minuman");
        assert_eq!(updated.description, None);
        assert_eq!(repo.list().await.unwrap(), vec![updated]);

        repo.delete(created.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_category() {
        let db = test_db().await;

        let err = db.categories().get_by_id(3).await.unwrap_err();
        assert_eq!(err.to_string(), "Category not found: 3");
    }
}

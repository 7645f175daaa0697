//! Categories repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        category::{Category, CategoryInput},
        sort::Sort,
    },
};

/// Persistence operations on categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self, sort: Sort) -> AppResult<Vec<Category>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>>;
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;
    async fn create(&self, data: &CategoryInput) -> AppResult<Category>;
    async fn update(&self, id: i32, data: &CategoryInput) -> AppResult<Option<Category>>;
    /// Returns false when no row matched
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct CategoriesRepository {
    pool: Pool<Postgres>,
}

impl CategoriesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryStore for CategoriesRepository {
    async fn list(&self, sort: Sort) -> AppResult<Vec<Category>> {
        let query = format!(
            "SELECT category_id, category_name, description FROM categories ORDER BY {}",
            sort.order_by()
        );
        let rows = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>(
            "SELECT category_id, category_name, description FROM categories WHERE category_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM categories WHERE category_name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create(&self, data: &CategoryInput) -> AppResult<Category> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (category_name, description)
            VALUES ($1, $2)
            RETURNING category_id, category_name, description
            "#,
        )
        .bind(&data.category_name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, data: &CategoryInput) -> AppResult<Option<Category>> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET category_name = $1, description = $2
            WHERE category_id = $3
            RETURNING category_id, category_name, description
            "#,
        )
        .bind(&data.category_name)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

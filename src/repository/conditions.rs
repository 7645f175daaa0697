//! Equipment conditions repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        condition::{Condition, ConditionInput},
        sort::Sort,
    },
};

/// Persistence operations on equipment conditions
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConditionStore: Send + Sync {
    async fn list(&self, sort: Sort) -> AppResult<Vec<Condition>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Option<Condition>>;
    async fn exists_by_name(&self, name: &str) -> AppResult<bool>;
    async fn create(&self, data: &ConditionInput) -> AppResult<Condition>;
    async fn update(&self, id: i32, data: &ConditionInput) -> AppResult<Option<Condition>>;
    /// Returns false when no row matched
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct ConditionsRepository {
    pool: Pool<Postgres>,
}

impl ConditionsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConditionStore for ConditionsRepository {
    async fn list(&self, sort: Sort) -> AppResult<Vec<Condition>> {
        let query = format!(
            "SELECT condition_id, condition_name FROM equipment_conditions ORDER BY {}",
            sort.order_by()
        );
        let rows = sqlx::query_as::<_, Condition>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<Condition>> {
        let row = sqlx::query_as::<_, Condition>(
            "SELECT condition_id, condition_name FROM equipment_conditions WHERE condition_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM equipment_conditions WHERE condition_name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create(&self, data: &ConditionInput) -> AppResult<Condition> {
        let row = sqlx::query_as::<_, Condition>(
            r#"
            INSERT INTO equipment_conditions (condition_name)
            VALUES ($1)
            RETURNING condition_id, condition_name
            "#,
        )
        .bind(&data.condition_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, data: &ConditionInput) -> AppResult<Option<Condition>> {
        let row = sqlx::query_as::<_, Condition>(
            r#"
            UPDATE equipment_conditions SET condition_name = $1
            WHERE condition_id = $2
            RETURNING condition_id, condition_name
            "#,
        )
        .bind(&data.condition_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM equipment_conditions WHERE condition_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

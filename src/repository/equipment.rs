//! Sports equipment repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentFields, EquipmentRow},
        sort::Sort,
    },
};

/// Persistence operations on sports equipment
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EquipmentStore: Send + Sync {
    async fn list(&self, sort: Sort) -> AppResult<Vec<Equipment>>;
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Equipment>>;
    async fn exists_by_serial_number(&self, serial_number: &str) -> AppResult<bool>;
    async fn create(&self, id: Uuid, fields: &EquipmentFields) -> AppResult<Equipment>;
    async fn update(&self, id: Uuid, fields: &EquipmentFields) -> AppResult<Option<Equipment>>;
    /// Returns false when no row matched
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// SELECT over `source` (a table or CTE aliased `e`) with category and condition joined in
fn select_joined(source: &str) -> String {
    format!(
        r#"
        SELECT e.equipment_id, e.serial_number, e.equipment_name, e.quantity,
               e.last_check_date, e.end_of_service_date, e.description, e.created_at,
               c.category_id, c.category_name, c.description AS category_description,
               s.condition_id, s.condition_name
        FROM {} e
        JOIN categories c ON c.category_id = e.category_id
        JOIN equipment_conditions s ON s.condition_id = e.condition_id
        "#,
        source
    )
}

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EquipmentStore for EquipmentRepository {
    async fn list(&self, sort: Sort) -> AppResult<Vec<Equipment>> {
        let query = format!("{} ORDER BY {}", select_joined("sports_equipment"), sort.order_by());
        let rows = sqlx::query_as::<_, EquipmentRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Equipment::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Equipment>> {
        let query = format!("{} WHERE e.equipment_id = $1", select_joined("sports_equipment"));
        let row = sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Equipment::from))
    }

    async fn exists_by_serial_number(&self, serial_number: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sports_equipment WHERE serial_number = $1)",
        )
        .bind(serial_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn create(&self, id: Uuid, fields: &EquipmentFields) -> AppResult<Equipment> {
        let query = format!(
            r#"
            WITH inserted AS (
                INSERT INTO sports_equipment (
                    equipment_id, serial_number, equipment_name, quantity,
                    last_check_date, end_of_service_date, description,
                    category_id, condition_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
            )
            {}
            "#,
            select_joined("inserted")
        );
        let row = sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(id)
            .bind(&fields.serial_number)
            .bind(&fields.equipment_name)
            .bind(fields.quantity)
            .bind(fields.last_check_date)
            .bind(fields.end_of_service_date)
            .bind(&fields.description)
            .bind(fields.category_id)
            .bind(fields.condition_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn update(&self, id: Uuid, fields: &EquipmentFields) -> AppResult<Option<Equipment>> {
        let query = format!(
            r#"
            WITH updated AS (
                UPDATE sports_equipment SET
                    serial_number = $2,
                    equipment_name = $3,
                    quantity = $4,
                    last_check_date = $5,
                    end_of_service_date = $6,
                    description = $7,
                    category_id = $8,
                    condition_id = $9
                WHERE equipment_id = $1
                RETURNING *
            )
            {}
            "#,
            select_joined("updated")
        );
        let row = sqlx::query_as::<_, EquipmentRow>(&query)
            .bind(id)
            .bind(&fields.serial_number)
            .bind(&fields.equipment_name)
            .bind(fields.quantity)
            .bind(fields.last_check_date)
            .bind(fields.end_of_service_date)
            .bind(&fields.description)
            .bind(fields.category_id)
            .bind(fields.condition_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Equipment::from))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sports_equipment WHERE equipment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

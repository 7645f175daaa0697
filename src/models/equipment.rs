//! Sports equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{category::Category, condition::Condition, sort::SortFields};

/// Equipment record, with its category and condition resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub equipment_id: Uuid,
    /// Unique serial number
    pub serial_number: String,
    pub equipment_name: String,
    /// Number of units
    pub quantity: i32,
    pub last_check_date: Option<NaiveDate>,
    pub end_of_service_date: NaiveDate,
    pub description: Option<String>,
    pub category: Category,
    pub condition: Condition,
    pub created_at: DateTime<Utc>,
}

/// Flat row of `sports_equipment` joined with its category and condition
#[derive(Debug, FromRow)]
pub struct EquipmentRow {
    pub equipment_id: Uuid,
    pub serial_number: String,
    pub equipment_name: String,
    pub quantity: i32,
    pub last_check_date: Option<NaiveDate>,
    pub end_of_service_date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub category_id: i32,
    pub category_name: String,
    pub category_description: Option<String>,
    pub condition_id: i32,
    pub condition_name: String,
}

impl From<EquipmentRow> for Equipment {
    fn from(row: EquipmentRow) -> Self {
        Self {
            equipment_id: row.equipment_id,
            serial_number: row.serial_number,
            equipment_name: row.equipment_name,
            quantity: row.quantity,
            last_check_date: row.last_check_date,
            end_of_service_date: row.end_of_service_date,
            description: row.description,
            category: Category {
                category_id: row.category_id,
                category_name: row.category_name,
                description: row.category_description,
            },
            condition: Condition {
                condition_id: row.condition_id,
                condition_name: row.condition_name,
            },
            created_at: row.created_at,
        }
    }
}

/// Id-only category reference in a write payload: `{ "categoryId": 1 }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRef {
    pub category_id: Option<i32>,
}

/// Id-only condition reference in a write payload: `{ "conditionId": 1 }`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRef {
    pub condition_id: Option<i32>,
}

/// Create / update equipment request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentInput {
    #[serde(default)]
    #[validate(length(max = 50, message = "Serial number must not exceed 50 characters"))]
    pub serial_number: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Equipment name must not exceed 100 characters"))]
    pub equipment_name: String,
    #[validate(range(min = 0, message = "Quantity must be greater than or equal to 0"))]
    pub quantity: Option<i32>,
    pub last_check_date: Option<NaiveDate>,
    pub end_of_service_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub category: Option<CategoryRef>,
    pub condition: Option<ConditionRef>,
}

impl EquipmentInput {
    pub fn category_id(&self) -> Option<i32> {
        self.category.and_then(|c| c.category_id)
    }

    pub fn condition_id(&self) -> Option<i32> {
        self.condition.and_then(|c| c.condition_id)
    }
}

/// Validated column values written to `sports_equipment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentFields {
    pub serial_number: String,
    pub equipment_name: String,
    pub quantity: i32,
    pub last_check_date: Option<NaiveDate>,
    pub end_of_service_date: NaiveDate,
    pub description: Option<String>,
    pub category_id: i32,
    pub condition_id: i32,
}

pub const EQUIPMENT_SORT_FIELDS: SortFields = SortFields {
    default_field: "serialNumber",
    fields: &[
        ("serialNumber", "e.serial_number"),
        ("equipmentName", "e.equipment_name"),
        ("quantity", "e.quantity"),
        ("lastCheckDate", "e.last_check_date"),
        ("endOfServiceDate", "e.end_of_service_date"),
        ("createdAt", "e.created_at"),
        ("category.categoryName", "c.category_name"),
        ("condition.conditionName", "s.condition_name"),
    ],
};

/// Whether an end-of-service date falls on or before `today`
pub fn is_expired_or_today(end_of_service: Option<NaiveDate>, today: NaiveDate) -> bool {
    end_of_service.is_some_and(|date| date <= today)
}

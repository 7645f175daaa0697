//! Equipment category model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::sort::SortFields;

/// Category record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i32,
    /// Unique category name
    pub category_name: String,
    pub description: Option<String>,
}

/// Create / update category request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    #[serde(default)]
    #[validate(length(max = 100, message = "Category name must not exceed 100 characters"))]
    pub category_name: String,
    pub description: Option<String>,
}

pub const CATEGORY_SORT_FIELDS: SortFields = SortFields {
    default_field: "categoryName",
    fields: &[
        ("categoryName", "category_name"),
        ("categoryId", "category_id"),
        ("description", "description"),
    ],
};

//! Equipment condition model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::sort::SortFields;

/// Condition record (e.g. "in working order", "needs repair")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub condition_id: i32,
    pub condition_name: String,
}

/// Create / update condition request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConditionInput {
    #[serde(default)]
    #[validate(length(max = 100, message = "Condition name must not exceed 100 characters"))]
    pub condition_name: String,
}

pub const CONDITION_SORT_FIELDS: SortFields = SortFields {
    default_field: "conditionName",
    fields: &[
        ("conditionName", "condition_name"),
        ("conditionId", "condition_id"),
    ],
};

//! Server-side collection sorting (`sortBy` / `sortDir` query parameters)

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// Sort direction, parsed case-insensitively from `ASC` / `DESC`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl FromStr for SortDirection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            other => Err(AppError::BadRequest(format!(
                "Invalid sort direction '{}': expected ASC or DESC",
                other
            ))),
        }
    }
}

/// Sort query parameters shared by every collection endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SortQuery {
    /// Field to sort by (API field name, e.g. `serialNumber`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// ASC or DESC (default ASC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
}

/// Whitelist of sortable API fields and the SQL columns they map to
#[derive(Debug)]
pub struct SortFields {
    pub default_field: &'static str,
    pub fields: &'static [(&'static str, &'static str)],
}

impl SortFields {
    fn column(&self, field: &str) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, column)| *column)
    }
}

/// A validated ORDER BY clause: the column always comes from a whitelist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl Sort {
    pub fn order_by(&self) -> String {
        format!("{} {}", self.column, self.direction.as_sql())
    }
}

impl SortQuery {
    pub fn new(sort_by: &str, direction: SortDirection) -> Self {
        Self {
            sort_by: Some(sort_by.to_string()),
            sort_dir: Some(direction.to_string()),
        }
    }

    /// Resolve the query against a resource's sortable fields
    pub fn resolve(&self, fields: &SortFields) -> AppResult<Sort> {
        let field = self
            .sort_by
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(fields.default_field);

        let column = fields
            .column(field)
            .ok_or_else(|| AppError::BadRequest(format!("Cannot sort by '{}'", field)))?;

        let direction = match self.sort_dir.as_deref() {
            Some(dir) if !dir.trim().is_empty() => dir.parse()?,
            _ => SortDirection::Asc,
        };

        Ok(Sort { column, direction })
    }
}

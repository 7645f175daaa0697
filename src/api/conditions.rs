//! Equipment condition endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::AppJson;
use crate::{
    error::AppResult,
    models::{
        condition::{Condition, ConditionInput},
        sort::SortQuery,
    },
};

/// List conditions
#[utoipa::path(
    get,
    path = "/conditions",
    tag = "conditions",
    params(SortQuery),
    responses(
        (status = 200, description = "Condition list", body = Vec<Condition>),
        (status = 400, description = "Invalid sort parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_conditions(
    State(state): State<crate::AppState>,
    Query(sort): Query<SortQuery>,
) -> AppResult<Json<Vec<Condition>>> {
    let conditions = state.services.conditions.list(&sort).await?;
    Ok(Json(conditions))
}

/// Get condition by ID
#[utoipa::path(
    get,
    path = "/conditions/{id}",
    tag = "conditions",
    params(("id" = i32, Path, description = "Condition ID")),
    responses(
        (status = 200, description = "Condition details", body = Condition),
        (status = 404, description = "Condition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_condition(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Condition>> {
    let condition = state.services.conditions.get_by_id(id).await?;
    Ok(Json(condition))
}

/// Create condition
#[utoipa::path(
    post,
    path = "/conditions",
    tag = "conditions",
    request_body = ConditionInput,
    responses(
        (status = 201, description = "Condition created", body = Condition),
        (status = 400, description = "Invalid or duplicate name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_condition(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<ConditionInput>,
) -> AppResult<(StatusCode, Json<Condition>)> {
    let condition = state.services.conditions.create(&data).await?;
    Ok((StatusCode::CREATED, Json(condition)))
}

/// Update condition
#[utoipa::path(
    put,
    path = "/conditions/{id}",
    tag = "conditions",
    params(("id" = i32, Path, description = "Condition ID")),
    request_body = ConditionInput,
    responses(
        (status = 200, description = "Condition updated", body = Condition),
        (status = 404, description = "Condition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_condition(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    AppJson(data): AppJson<ConditionInput>,
) -> AppResult<Json<Condition>> {
    let condition = state.services.conditions.update(id, &data).await?;
    Ok(Json(condition))
}

/// Delete condition
#[utoipa::path(
    delete,
    path = "/conditions/{id}",
    tag = "conditions",
    params(("id" = i32, Path, description = "Condition ID")),
    responses(
        (status = 204, description = "Condition deleted"),
        (status = 404, description = "Condition not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Condition still referenced by equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_condition(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.conditions.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

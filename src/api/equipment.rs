//! Sports equipment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use super::AppJson;
use crate::{
    error::AppResult,
    models::{
        equipment::{Equipment, EquipmentInput},
        sort::SortQuery,
    },
};

/// List all equipment
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(SortQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Equipment>),
        (status = 400, description = "Invalid sort parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(sort): Query<SortQuery>,
) -> AppResult<Json<Vec<Equipment>>> {
    let equipment = state.services.equipment.list(&sort).await?;
    Ok(Json(equipment))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = Equipment),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = EquipmentInput,
    responses(
        (status = 201, description = "Equipment created", body = Equipment),
        (status = 400, description = "Invalid payload or duplicate serial number", body = crate::error::ErrorResponse),
        (status = 404, description = "Category or condition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<EquipmentInput>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    request_body = EquipmentInput,
    responses(
        (status = 200, description = "Equipment updated", body = Equipment),
        (status = 400, description = "Invalid payload or duplicate serial number", body = crate::error::ErrorResponse),
        (status = 404, description = "Equipment, category or condition not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    AppJson(data): AppJson<EquipmentInput>,
) -> AppResult<Json<Equipment>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(equipment))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = Uuid, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! Category endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::AppJson;
use crate::{
    error::AppResult,
    models::{
        category::{Category, CategoryInput},
        sort::SortQuery,
    },
};

/// List categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    params(SortQuery),
    responses(
        (status = 200, description = "Category list", body = Vec<Category>),
        (status = 400, description = "Invalid sort parameters", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
    Query(sort): Query<SortQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.categories.list(&sort).await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.get_by_id(id).await?;
    Ok(Json(category))
}

/// Create category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Invalid or duplicate name", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<CategoryInput>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = state.services.categories.create(&data).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Update category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    AppJson(data): AppJson<CategoryInput>,
) -> AppResult<Json<Category>> {
    let category = state.services.categories.update(id, &data).await?;
    Ok(Json(category))
}

/// Delete category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Category still referenced by equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.categories.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

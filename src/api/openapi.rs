//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{categories, conditions, equipment, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Equipment Tracker API",
        version = "0.1.0",
        description = "Sports equipment inventory REST API"
    ),
    servers(
        (url = "/api", description = "REST API")
    ),
    paths(
        health::health_check,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Conditions
        conditions::list_conditions,
        conditions::get_condition,
        conditions::create_condition,
        conditions::update_condition,
        conditions::delete_condition,
    ),
    components(
        schemas(
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentInput,
            crate::models::equipment::CategoryRef,
            crate::models::equipment::ConditionRef,
            crate::models::category::Category,
            crate::models::category::CategoryInput,
            crate::models::condition::Condition,
            crate::models::condition::ConditionInput,
            crate::models::sort::SortDirection,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "equipment", description = "Sports equipment inventory"),
        (name = "categories", description = "Equipment categories"),
        (name = "conditions", description = "Equipment conditions")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

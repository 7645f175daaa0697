//! API handlers for the equipment tracker REST endpoints

pub mod categories;
pub mod conditions;
pub mod equipment;
pub mod health;
pub mod openapi;

use axum::{extract::FromRequest, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections are `ErrorResponse` 400s
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_check))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list_equipment).post(equipment::create_equipment),
        )
        .route(
            "/equipment/:id",
            get(equipment::get_equipment)
                .put(equipment::update_equipment)
                .delete(equipment::delete_equipment),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/:id",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        // Conditions
        .route(
            "/conditions",
            get(conditions::list_conditions).post(conditions::create_condition),
        )
        .route(
            "/conditions/:id",
            get(conditions::get_condition)
                .put(conditions::update_condition)
                .delete(conditions::delete_condition),
        )
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
    };
    use chrono::{NaiveDate, Utc};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::{
        models::{Category, Condition, Equipment},
        repository::{
            categories::MockCategoryStore, conditions::MockConditionStore,
            equipment::MockEquipmentStore,
        },
        services::{
            categories::CategoriesService, conditions::ConditionsService,
            equipment::EquipmentService, Services,
        },
    };

    fn app(
        equipment: MockEquipmentStore,
        categories: MockCategoryStore,
        conditions: MockConditionStore,
    ) -> Router {
        let equipment = Arc::new(equipment);
        let categories = Arc::new(categories);
        let conditions = Arc::new(conditions);
        let services = Services {
            categories: CategoriesService::new(categories.clone()),
            conditions: ConditionsService::new(conditions.clone()),
            equipment: EquipmentService::new(equipment, categories, conditions),
        };
        create_router(AppState {
            services: Arc::new(services),
        })
    }

    fn sample_equipment(id: Uuid) -> Equipment {
        Equipment {
            equipment_id: id,
            serial_number: "SN123".to_string(),
            equipment_name: "Ball".to_string(),
            quantity: 10,
            last_check_date: None,
            end_of_service_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            description: None,
            category: Category {
                category_id: 1,
                category_name: "Sport".to_string(),
                description: None,
            },
            condition: Condition {
                condition_id: 2,
                condition_name: "Good".to_string(),
            },
            created_at: Utc::now(),
        }
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn health_reports_version() {
        let app = app(
            MockEquipmentStore::new(),
            MockCategoryStore::new(),
            MockConditionStore::new(),
        );
        let request = Request::get("/api/health").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn equipment_list_uses_sort_parameters() {
        let mut equipment = MockEquipmentStore::new();
        equipment
            .expect_list()
            .withf(|sort| sort.order_by() == "e.equipment_name DESC")
            .returning(|_| Ok(vec![sample_equipment(Uuid::nil())]));
        let app = app(equipment, MockCategoryStore::new(), MockConditionStore::new());

        let request = Request::get("/api/equipment?sortBy=equipmentName&sortDir=DESC")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body[0]["serialNumber"], "SN123");
        assert_eq!(body[0]["category"]["categoryName"], "Sport");
        assert_eq!(body[0]["condition"]["conditionId"], 2);
        assert!(body[0]["lastCheckDate"].is_null());
    }

    #[tokio::test]
    async fn equipment_list_rejects_unknown_sort_field() {
        let app = app(
            MockEquipmentStore::new(),
            MockCategoryStore::new(),
            MockConditionStore::new(),
        );
        let request = Request::get("/api/equipment?sortBy=password")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn equipment_create_without_category_is_bad_request() {
        let app = app(
            MockEquipmentStore::new(),
            MockCategoryStore::new(),
            MockConditionStore::new(),
        );
        let request = Request::post("/api/equipment")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({
                    "serialNumber": "SN1",
                    "equipmentName": "Ball",
                    "quantity": 1,
                    "endOfServiceDate": "2030-01-01",
                    "condition": { "conditionId": 1 }
                })
                .to_string(),
            ))
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request_with_error_body() {
        let app = app(
            MockEquipmentStore::new(),
            MockCategoryStore::new(),
            MockConditionStore::new(),
        );
        let request = Request::post("/api/equipment")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "serialNumber": "SN1", "quantity": "abc" }).to_string(),
            ))
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "BadValue");
        assert!(body["message"].as_str().is_some_and(|m| m.contains("quantity")));
    }

    #[tokio::test]
    async fn equipment_get_missing_is_not_found() {
        let mut equipment = MockEquipmentStore::new();
        equipment.expect_get_by_id().returning(|_| Ok(None));
        let app = app(equipment, MockCategoryStore::new(), MockConditionStore::new());

        let request = Request::get(format!("/api/equipment/{}", Uuid::new_v4()))
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"], "NoSuchRecord");
    }

    #[tokio::test]
    async fn category_create_returns_created() {
        let mut categories = MockCategoryStore::new();
        categories.expect_exists_by_name().returning(|_| Ok(false));
        categories.expect_create().returning(|data| {
            Ok(Category {
                category_id: 1,
                category_name: data.category_name.clone(),
                description: data.description.clone(),
            })
        });
        let app = app(MockEquipmentStore::new(), categories, MockConditionStore::new());

        let request = Request::post("/api/categories")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "categoryName": "Sport" }).to_string()))
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        assert_eq!(body["categoryId"], 1);
        assert_eq!(body["categoryName"], "Sport");
    }

    #[tokio::test]
    async fn category_list_returns_all() {
        let mut categories = MockCategoryStore::new();
        categories
            .expect_list()
            .withf(|sort| sort.order_by() == "category_name ASC")
            .returning(|_| {
                Ok(vec![
                    Category {
                        category_id: 1,
                        category_name: "Sport".to_string(),
                        description: None,
                    },
                    Category {
                        category_id: 2,
                        category_name: "Tourism".to_string(),
                        description: None,
                    },
                ])
            });
        let app = app(MockEquipmentStore::new(), categories, MockConditionStore::new());

        let request = Request::get("/api/categories").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn condition_update_and_delete() {
        let mut conditions = MockConditionStore::new();
        conditions.expect_get_by_id().returning(|id| {
            Ok(Some(Condition {
                condition_id: id,
                condition_name: "Good".to_string(),
            }))
        });
        conditions.expect_exists_by_name().returning(|_| Ok(false));
        conditions.expect_update().returning(|id, data| {
            Ok(Some(Condition {
                condition_id: id,
                condition_name: data.condition_name.clone(),
            }))
        });
        conditions.expect_delete().returning(|_| Ok(true));
        let app = app(MockEquipmentStore::new(), MockCategoryStore::new(), conditions);

        let request = Request::put("/api/conditions/1")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "conditionName": "Worn" }).to_string()))
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["conditionName"], "Worn");

        let request = Request::delete("/api/conditions/1")
            .body(Body::empty())
            .expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}

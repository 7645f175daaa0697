//! REST client used by the admin pages

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{PanelError, PanelResult};
use crate::{
    error::ErrorResponse,
    models::{
        Category, CategoryInput, Condition, ConditionInput, Equipment, EquipmentInput, SortQuery,
    },
};

/// CRUD calls against `/api/equipment`, `/api/categories` and `/api/conditions`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn list_equipment(&self, sort: SortQuery) -> PanelResult<Vec<Equipment>>;
    async fn get_equipment(&self, id: Uuid) -> PanelResult<Equipment>;
    async fn create_equipment(&self, payload: &EquipmentInput) -> PanelResult<Equipment>;
    async fn update_equipment(&self, id: Uuid, payload: &EquipmentInput) -> PanelResult<Equipment>;
    async fn delete_equipment(&self, id: Uuid) -> PanelResult<()>;

    async fn list_categories(&self, sort: SortQuery) -> PanelResult<Vec<Category>>;
    async fn get_category(&self, id: i32) -> PanelResult<Category>;
    async fn create_category(&self, payload: &CategoryInput) -> PanelResult<Category>;
    async fn update_category(&self, id: i32, payload: &CategoryInput) -> PanelResult<Category>;
    async fn delete_category(&self, id: i32) -> PanelResult<()>;

    async fn list_conditions(&self, sort: SortQuery) -> PanelResult<Vec<Condition>>;
    async fn get_condition(&self, id: i32) -> PanelResult<Condition>;
    async fn create_condition(&self, payload: &ConditionInput) -> PanelResult<Condition>;
    async fn update_condition(&self, id: i32, payload: &ConditionInput) -> PanelResult<Condition>;
    async fn delete_condition(&self, id: i32) -> PanelResult<()>;
}

/// Message for a failed response: the server's text when it sent any, else `fallback`
pub fn error_message(body: &str, fallback: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return fallback.to_string();
    }
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) if !err.message.is_empty() => err.message,
        _ => body.to_string(),
    }
}

/// [`ApiClient`] over HTTP with reqwest
#[derive(Clone)]
pub struct HttpApiClient {
    http: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn execute(&self, request: RequestBuilder, fallback: &str) -> PanelResult<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed");
            PanelError::Request(format!("{}: {}", fallback, e))
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, "Server rejected request");
        Err(PanelError::Request(error_message(&body, fallback)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &str,
    ) -> PanelResult<T> {
        self.execute(request, fallback)
            .await?
            .json::<T>()
            .await
            .map_err(|e| PanelError::Request(format!("{}: {}", fallback, e)))
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn list_equipment(&self, sort: SortQuery) -> PanelResult<Vec<Equipment>> {
        let request = self.http.get(self.url("equipment")).query(&sort);
        self.fetch(request, "Failed to load equipment").await
    }

    async fn get_equipment(&self, id: Uuid) -> PanelResult<Equipment> {
        let request = self.http.get(self.url(&format!("equipment/{}", id)));
        self.fetch(request, "Failed to load equipment").await
    }

    async fn create_equipment(&self, payload: &EquipmentInput) -> PanelResult<Equipment> {
        let request = self.http.post(self.url("equipment")).json(payload);
        self.fetch(request, "Failed to save equipment").await
    }

    async fn update_equipment(&self, id: Uuid, payload: &EquipmentInput) -> PanelResult<Equipment> {
        let request = self
            .http
            .put(self.url(&format!("equipment/{}", id)))
            .json(payload);
        self.fetch(request, "Failed to save equipment").await
    }

    async fn delete_equipment(&self, id: Uuid) -> PanelResult<()> {
        let request = self.http.delete(self.url(&format!("equipment/{}", id)));
        self.execute(request, "Failed to delete equipment").await?;
        Ok(())
    }

    async fn list_categories(&self, sort: SortQuery) -> PanelResult<Vec<Category>> {
        let request = self.http.get(self.url("categories")).query(&sort);
        self.fetch(request, "Failed to load categories").await
    }

    async fn get_category(&self, id: i32) -> PanelResult<Category> {
        let request = self.http.get(self.url(&format!("categories/{}", id)));
        self.fetch(request, "Failed to load category").await
    }

    async fn create_category(&self, payload: &CategoryInput) -> PanelResult<Category> {
        let request = self.http.post(self.url("categories")).json(payload);
        self.fetch(request, "Failed to save category").await
    }

    async fn update_category(&self, id: i32, payload: &CategoryInput) -> PanelResult<Category> {
        let request = self
            .http
            .put(self.url(&format!("categories/{}", id)))
            .json(payload);
        self.fetch(request, "Failed to save category").await
    }

    async fn delete_category(&self, id: i32) -> PanelResult<()> {
        let request = self.http.delete(self.url(&format!("categories/{}", id)));
        self.execute(request, "Failed to delete category").await?;
        Ok(())
    }

    async fn list_conditions(&self, sort: SortQuery) -> PanelResult<Vec<Condition>> {
        let request = self.http.get(self.url("conditions")).query(&sort);
        self.fetch(request, "Failed to load conditions").await
    }

    async fn get_condition(&self, id: i32) -> PanelResult<Condition> {
        let request = self.http.get(self.url(&format!("conditions/{}", id)));
        self.fetch(request, "Failed to load condition").await
    }

    async fn create_condition(&self, payload: &ConditionInput) -> PanelResult<Condition> {
        let request = self.http.post(self.url("conditions")).json(payload);
        self.fetch(request, "Failed to save condition").await
    }

    async fn update_condition(&self, id: i32, payload: &ConditionInput) -> PanelResult<Condition> {
        let request = self
            .http
            .put(self.url(&format!("conditions/{}", id)))
            .json(payload);
        self.fetch(request, "Failed to save condition").await
    }

    async fn delete_condition(&self, id: i32) -> PanelResult<()> {
        let request = self.http.delete(self.url(&format!("conditions/{}", id)));
        self.execute(request, "Failed to delete condition").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::{get, post, put},
        Json, Router,
    };
    use serde_json::json;

    use super::*;
    use crate::models::SortDirection;

    async fn list_equipment(
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<Vec<Equipment>>) {
        let sorted = params.get("sortBy").map(String::as_str) == Some("serialNumber")
            && params.get("sortDir").map(String::as_str) == Some("ASC");
        if sorted {
            (StatusCode::OK, Json(Vec::new()))
        } else {
            (StatusCode::BAD_REQUEST, Json(Vec::new()))
        }
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/api/equipment", get(list_equipment))
            .route(
                "/api/categories/:id",
                put(|| async { (StatusCode::BAD_REQUEST, "Category name must be unique") })
                    .delete(|Path(id): Path<i32>| async move {
                        (
                            StatusCode::CONFLICT,
                            Json(json!({
                                "code": 4,
                                "error": "Duplicate",
                                "message": format!("Category {} is still referenced by equipment", id)
                            })),
                        )
                    }),
            )
            .route(
                "/api/conditions",
                post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{}/", addr)
    }

    #[test]
    fn test_error_message_prefers_server_text() {
        assert_eq!(error_message("", "Fallback"), "Fallback");
        assert_eq!(error_message("  \n", "Fallback"), "Fallback");
        assert_eq!(error_message("Plain text", "Fallback"), "Plain text");
        assert_eq!(
            error_message(r#"{"code":2,"error":"BadValue","message":"Bad quantity"}"#, "Fallback"),
            "Bad quantity"
        );
    }

    #[tokio::test]
    async fn test_list_sends_sort_parameters() {
        let client = HttpApiClient::new(spawn_server().await);
        let equipment = client
            .list_equipment(SortQuery::new("serialNumber", SortDirection::Asc))
            .await
            .expect("list");
        assert!(equipment.is_empty());
    }

    #[tokio::test]
    async fn test_non_ok_surfaces_body_text() {
        let client = HttpApiClient::new(spawn_server().await);

        let err = client
            .update_category(1, &CategoryInput::default())
            .await
            .unwrap_err();
        assert_eq!(err, PanelError::Request("Category name must be unique".into()));

        let err = client.delete_category(7).await.unwrap_err();
        assert_eq!(
            err,
            PanelError::Request("Category 7 is still referenced by equipment".into())
        );
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_fallback() {
        let client = HttpApiClient::new(spawn_server().await);
        let err = client
            .create_condition(&ConditionInput::default())
            .await
            .unwrap_err();
        assert_eq!(err, PanelError::Request("Failed to save condition".into()));
    }
}

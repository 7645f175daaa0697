//! Equipment conditions service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        condition::{Condition, ConditionInput, CONDITION_SORT_FIELDS},
        sort::SortQuery,
    },
    repository::ConditionStore,
};

#[derive(Clone)]
pub struct ConditionsService {
    store: Arc<dyn ConditionStore>,
}

impl ConditionsService {
    pub fn new(store: Arc<dyn ConditionStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self, sort: &SortQuery) -> AppResult<Vec<Condition>> {
        let sort = sort.resolve(&CONDITION_SORT_FIELDS)?;
        self.store.list(sort).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Condition> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Condition {} not found", id)))
    }

    pub async fn create(&self, data: &ConditionInput) -> AppResult<Condition> {
        let data = normalize(data)?;
        if self.store.exists_by_name(&data.condition_name).await? {
            return Err(AppError::BadRequest("Condition name must be unique".to_string()));
        }
        let condition = self.store.create(&data).await?;
        tracing::info!(condition_id = condition.condition_id, "Condition created");
        Ok(condition)
    }

    pub async fn update(&self, id: i32, data: &ConditionInput) -> AppResult<Condition> {
        let data = normalize(data)?;
        let existing = self.get_by_id(id).await?;

        if existing.condition_name != data.condition_name
            && self.store.exists_by_name(&data.condition_name).await?
        {
            return Err(AppError::BadRequest("Condition name must be unique".to_string()));
        }

        let condition = self
            .store
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Condition {} not found", id)))?;
        tracing::info!(condition_id = id, "Condition updated");
        Ok(condition)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound(format!("Condition {} not found", id)));
        }
        tracing::info!(condition_id = id, "Condition deleted");
        Ok(())
    }
}

fn normalize(data: &ConditionInput) -> AppResult<ConditionInput> {
    let data = ConditionInput {
        condition_name: data.condition_name.trim().to_string(),
    };
    if data.condition_name.is_empty() {
        return Err(AppError::Validation("Condition name cannot be empty".to_string()));
    }
    data.validate()?;
    Ok(data)
}

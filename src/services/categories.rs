//! Categories service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        category::{Category, CategoryInput, CATEGORY_SORT_FIELDS},
        sort::SortQuery,
    },
    repository::CategoryStore,
};

#[derive(Clone)]
pub struct CategoriesService {
    store: Arc<dyn CategoryStore>,
}

impl CategoriesService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// List categories, sorted by the requested field
    pub async fn list(&self, sort: &SortQuery) -> AppResult<Vec<Category>> {
        let sort = sort.resolve(&CATEGORY_SORT_FIELDS)?;
        self.store.list(sort).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Category> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Create a category (name must be unique)
    pub async fn create(&self, data: &CategoryInput) -> AppResult<Category> {
        let data = normalize(data)?;
        if self.store.exists_by_name(&data.category_name).await? {
            return Err(AppError::BadRequest("Category name must be unique".to_string()));
        }
        let category = self.store.create(&data).await?;
        tracing::info!(category_id = category.category_id, "Category created");
        Ok(category)
    }

    /// Replace a category's name and description
    pub async fn update(&self, id: i32, data: &CategoryInput) -> AppResult<Category> {
        let data = normalize(data)?;
        let existing = self.get_by_id(id).await?;

        // Uniqueness only needs re-checking when the name actually changes
        if existing.category_name != data.category_name
            && self.store.exists_by_name(&data.category_name).await?
        {
            return Err(AppError::BadRequest("Category name must be unique".to_string()));
        }

        let category = self
            .store
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
        tracing::info!(category_id = id, "Category updated");
        Ok(category)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.store.delete(id).await? {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }
}

fn normalize(data: &CategoryInput) -> AppResult<CategoryInput> {
    let data = CategoryInput {
        category_name: data.category_name.trim().to_string(),
        description: data.description.clone(),
    };
    if data.category_name.is_empty() {
        return Err(AppError::Validation("Category name cannot be empty".to_string()));
    }
    data.validate()?;
    Ok(data)
}

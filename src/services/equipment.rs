//! Sports equipment service

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{Equipment, EquipmentFields, EquipmentInput, EQUIPMENT_SORT_FIELDS},
        sort::SortQuery,
    },
    repository::{CategoryStore, ConditionStore, EquipmentStore},
};

#[derive(Clone)]
pub struct EquipmentService {
    equipment: Arc<dyn EquipmentStore>,
    categories: Arc<dyn CategoryStore>,
    conditions: Arc<dyn ConditionStore>,
}

impl EquipmentService {
    pub fn new(
        equipment: Arc<dyn EquipmentStore>,
        categories: Arc<dyn CategoryStore>,
        conditions: Arc<dyn ConditionStore>,
    ) -> Self {
        Self {
            equipment,
            categories,
            conditions,
        }
    }

    pub async fn list(&self, sort: &SortQuery) -> AppResult<Vec<Equipment>> {
        let sort = sort.resolve(&EQUIPMENT_SORT_FIELDS)?;
        self.equipment.list(sort).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Equipment> {
        self.equipment
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Create equipment; the referenced category and condition must exist
    pub async fn create(&self, data: &EquipmentInput) -> AppResult<Equipment> {
        let fields = validate(data)?;
        self.ensure_references(&fields).await?;

        if self
            .equipment
            .exists_by_serial_number(&fields.serial_number)
            .await?
        {
            return Err(AppError::BadRequest("Serial number must be unique".to_string()));
        }

        let id = Uuid::new_v4();
        tracing::debug!(equipment_id = %id, serial_number = %fields.serial_number, "Creating equipment");
        let equipment = self.equipment.create(id, &fields).await?;
        tracing::info!(equipment_id = %equipment.equipment_id, "Equipment created");
        Ok(equipment)
    }

    /// Replace every mutable field of existing equipment, references included
    pub async fn update(&self, id: Uuid, data: &EquipmentInput) -> AppResult<Equipment> {
        let fields = validate(data)?;
        let existing = self.get_by_id(id).await?;
        self.ensure_references(&fields).await?;

        if existing.serial_number != fields.serial_number
            && self
                .equipment
                .exists_by_serial_number(&fields.serial_number)
                .await?
        {
            return Err(AppError::BadRequest("Serial number must be unique".to_string()));
        }

        let equipment = self
            .equipment
            .update(id, &fields)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;
        tracing::info!(equipment_id = %id, "Equipment updated");
        Ok(equipment)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.equipment.delete(id).await? {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        tracing::info!(equipment_id = %id, "Equipment deleted");
        Ok(())
    }

    async fn ensure_references(&self, fields: &EquipmentFields) -> AppResult<()> {
        if self.categories.get_by_id(fields.category_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Category {} not found",
                fields.category_id
            )));
        }
        if self.conditions.get_by_id(fields.condition_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Condition {} not found",
                fields.condition_id
            )));
        }
        Ok(())
    }
}

/// Check a write payload and turn it into column values
fn validate(data: &EquipmentInput) -> AppResult<EquipmentFields> {
    let category_id = data
        .category_id()
        .ok_or_else(|| AppError::BadRequest("Category ID is required".to_string()))?;
    let condition_id = data
        .condition_id()
        .ok_or_else(|| AppError::BadRequest("Condition ID is required".to_string()))?;

    let serial_number = data.serial_number.trim().to_string();
    if serial_number.is_empty() {
        return Err(AppError::Validation("Serial number cannot be empty".to_string()));
    }
    let equipment_name = data.equipment_name.trim().to_string();
    if equipment_name.is_empty() {
        return Err(AppError::Validation("Equipment name cannot be empty".to_string()));
    }
    data.validate()?;

    let quantity = data.quantity.ok_or_else(|| {
        AppError::Validation("Quantity must be greater than or equal to 0".to_string())
    })?;
    let end_of_service_date = data.end_of_service_date.ok_or_else(|| {
        AppError::Validation("End of service date is required".to_string())
    })?;

    Ok(EquipmentFields {
        serial_number,
        equipment_name,
        quantity,
        last_check_date: data.last_check_date,
        end_of_service_date,
        description: data.description.clone(),
        category_id,
        condition_id,
    })
}

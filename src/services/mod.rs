//! Business logic services

pub mod categories;
pub mod conditions;
pub mod equipment;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub categories: categories::CategoriesService,
    pub conditions: conditions::ConditionsService,
    pub equipment: equipment::EquipmentService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: &Repository) -> Self {
        Self {
            categories: categories::CategoriesService::new(repository.categories.clone()),
            conditions: conditions::ConditionsService::new(repository.conditions.clone()),
            equipment: equipment::EquipmentService::new(
                repository.equipment.clone(),
                repository.categories.clone(),
                repository.conditions.clone(),
            ),
        }
    }
}

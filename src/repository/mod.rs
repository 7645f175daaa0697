//! Repository layer for database operations

pub mod categories;
pub mod conditions;
pub mod equipment;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub use categories::CategoryStore;
pub use conditions::ConditionStore;
pub use equipment::EquipmentStore;

/// Per-table stores sharing one connection pool
#[derive(Clone)]
pub struct Repository {
    pub categories: Arc<dyn CategoryStore>,
    pub conditions: Arc<dyn ConditionStore>,
    pub equipment: Arc<dyn EquipmentStore>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            categories: Arc::new(categories::CategoriesRepository::new(pool.clone())),
            conditions: Arc::new(conditions::ConditionsRepository::new(pool.clone())),
            equipment: Arc::new(equipment::EquipmentRepository::new(pool)),
        }
    }
}

//! Data models for the equipment tracker

pub mod category;
pub mod condition;
pub mod equipment;
pub mod sort;

// Re-export commonly used types
pub use category::{Category, CategoryInput};
pub use condition::{Condition, ConditionInput};
pub use equipment::{CategoryRef, ConditionRef, Equipment, EquipmentFields, EquipmentInput};
pub use sort::{Sort, SortDirection, SortQuery};

//! Form state: text fields as the user sees them, plus a hidden record id
//!
//! An empty hidden id means the form creates a record; otherwise submitting
//! updates the record with that id.

use chrono::NaiveDate;
use uuid::Uuid;

use super::{PanelError, PanelResult};
use crate::models::{
    Category, CategoryInput, CategoryRef, Condition, ConditionInput, ConditionRef, Equipment,
    EquipmentInput,
};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields correctly";
pub const CATEGORY_NAME_REQUIRED: &str = "Category name is required";
pub const CONDITION_NAME_REQUIRED: &str = "Condition name is required";

/// Value for a date input: the `YYYY-MM-DD` portion only
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn parse_hidden_id<T: std::str::FromStr>(value: &str) -> PanelResult<Option<T>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| PanelError::Validation(format!("Invalid record id '{}'", value)))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentForm {
    /// Hidden id field
    pub equipment_id: String,
    pub serial_number: String,
    pub equipment_name: String,
    pub quantity: String,
    pub last_check_date: String,
    pub end_of_service_date: String,
    pub description: String,
    /// Selected value of the category picker
    pub category_id: String,
    /// Selected value of the condition picker
    pub condition_id: String,
}

impl EquipmentForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn fill(&mut self, equipment: &Equipment) {
        *self = Self {
            equipment_id: equipment.equipment_id.to_string(),
            serial_number: equipment.serial_number.clone(),
            equipment_name: equipment.equipment_name.clone(),
            quantity: equipment.quantity.to_string(),
            last_check_date: date_input_value(equipment.last_check_date),
            end_of_service_date: date_input_value(Some(equipment.end_of_service_date)),
            description: equipment.description.clone().unwrap_or_default(),
            category_id: equipment.category.category_id.to_string(),
            condition_id: equipment.condition.condition_id.to_string(),
        };
    }

    pub fn editing_id(&self) -> PanelResult<Option<Uuid>> {
        parse_hidden_id(&self.equipment_id)
    }

    /// Validate the fields and build the write payload
    pub fn to_payload(&self) -> PanelResult<EquipmentInput> {
        let invalid = || PanelError::Validation(REQUIRED_FIELDS_MESSAGE.to_string());

        let serial_number = self.serial_number.trim();
        let equipment_name = self.equipment_name.trim();
        if serial_number.is_empty() || equipment_name.is_empty() {
            return Err(invalid());
        }

        let category_id: i32 = self.category_id.trim().parse().map_err(|_| invalid())?;
        let condition_id: i32 = self.condition_id.trim().parse().map_err(|_| invalid())?;
        let quantity: i32 = self.quantity.trim().parse().map_err(|_| invalid())?;
        if quantity < 0 {
            return Err(invalid());
        }
        let end_of_service_date = parse_date_input(&self.end_of_service_date).ok_or_else(invalid)?;

        let last_check_date = if self.last_check_date.trim().is_empty() {
            None
        } else {
            Some(parse_date_input(&self.last_check_date).ok_or_else(invalid)?)
        };

        Ok(EquipmentInput {
            serial_number: serial_number.to_string(),
            equipment_name: equipment_name.to_string(),
            quantity: Some(quantity),
            last_check_date,
            end_of_service_date: Some(end_of_service_date),
            description: Some(self.description.trim().to_string()),
            category: Some(CategoryRef {
                category_id: Some(category_id),
            }),
            condition: Some(ConditionRef {
                condition_id: Some(condition_id),
            }),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub category_id: String,
    pub category_name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn fill(&mut self, category: &Category) {
        *self = Self {
            category_id: category.category_id.to_string(),
            category_name: category.category_name.clone(),
            description: category.description.clone().unwrap_or_default(),
        };
    }

    pub fn editing_id(&self) -> PanelResult<Option<i32>> {
        parse_hidden_id(&self.category_id)
    }

    pub fn to_payload(&self) -> PanelResult<CategoryInput> {
        let category_name = self.category_name.trim();
        if category_name.is_empty() {
            return Err(PanelError::Validation(CATEGORY_NAME_REQUIRED.to_string()));
        }
        Ok(CategoryInput {
            category_name: category_name.to_string(),
            description: Some(self.description.trim().to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionForm {
    pub condition_id: String,
    pub condition_name: String,
}

impl ConditionForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn fill(&mut self, condition: &Condition) {
        *self = Self {
            condition_id: condition.condition_id.to_string(),
            condition_name: condition.condition_name.clone(),
        };
    }

    pub fn editing_id(&self) -> PanelResult<Option<i32>> {
        parse_hidden_id(&self.condition_id)
    }

    pub fn to_payload(&self) -> PanelResult<ConditionInput> {
        let condition_name = self.condition_name.trim();
        if condition_name.is_empty() {
            return Err(PanelError::Validation(CONDITION_NAME_REQUIRED.to_string()));
        }
        Ok(ConditionInput {
            condition_name: condition_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> EquipmentForm {
        EquipmentForm {
            equipment_id: String::new(),
            serial_number: " SN1 ".into(),
            equipment_name: "Ball".into(),
            quantity: "4".into(),
            last_check_date: String::new(),
            end_of_service_date: "2027-05-01".into(),
            description: "  spare ".into(),
            category_id: "1".into(),
            condition_id: "2".into(),
        }
    }

    #[test]
    fn test_payload_has_id_only_references() {
        let payload = filled().to_payload().unwrap();
        assert_eq!(payload.serial_number, "SN1");
        assert_eq!(payload.description.as_deref(), Some("spare"));
        assert_eq!(payload.last_check_date, None);
        assert_eq!(payload.category_id(), Some(1));
        assert_eq!(payload.condition_id(), Some(2));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], serde_json::json!({ "categoryId": 1 }));
        assert!(json["lastCheckDate"].is_null());
    }

    #[test]
    fn test_each_required_field_blocks_payload() {
        let breakers: [fn(&mut EquipmentForm); 7] = [
            |f| f.serial_number = "  ".into(),
            |f| f.equipment_name.clear(),
            |f| f.category_id.clear(),
            |f| f.condition_id.clear(),
            |f| f.quantity = "-1".into(),
            |f| f.quantity = "many".into(),
            |f| f.end_of_service_date.clear(),
        ];
        for breaker in breakers {
            let mut form = filled();
            breaker(&mut form);
            assert_eq!(
                form.to_payload(),
                Err(PanelError::Validation(REQUIRED_FIELDS_MESSAGE.into()))
            );
        }
    }

    #[test]
    fn test_date_inputs_are_truncated_to_date_portion() {
        let mut form = filled();
        form.end_of_service_date = "2027-05-01T00:00:00".into();
        form.last_check_date = "2024-01-02".into();
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.end_of_service_date, NaiveDate::from_ymd_opt(2027, 5, 1));
        assert_eq!(payload.last_check_date, NaiveDate::from_ymd_opt(2024, 1, 2));
    }

    #[test]
    fn test_clear_resets_hidden_id() {
        let mut form = filled();
        form.equipment_id = Uuid::new_v4().to_string();
        assert!(form.editing_id().unwrap().is_some());

        form.clear();
        assert_eq!(form, EquipmentForm::default());
        assert_eq!(form.editing_id().unwrap(), None);
    }

    #[test]
    fn test_category_and_condition_names_required() {
        let form = CategoryForm {
            category_name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(
            form.to_payload(),
            Err(PanelError::Validation(CATEGORY_NAME_REQUIRED.into()))
        );
        assert_eq!(
            ConditionForm::default().to_payload(),
            Err(PanelError::Validation(CONDITION_NAME_REQUIRED.into()))
        );
    }

    #[test]
    fn test_category_fill_round_trips_hidden_id() {
        let mut form = CategoryForm::default();
        form.fill(&Category {
            category_id: 12,
            category_name: "Sport".into(),
            description: None,
        });
        assert_eq!(form.editing_id().unwrap(), Some(12));
        assert_eq!(form.description, "");
    }
}

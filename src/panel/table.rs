//! Table and select-control rendering

use chrono::{
    format::{Item, StrftimeItems},
    NaiveDate,
};

use crate::models::{Category, Condition, Equipment};

/// Per-row control, carrying the id of the record it acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction<Id> {
    Edit(Id),
    Delete(Id),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow<Id> {
    pub cells: Vec<String>,
    pub actions: [RowAction<Id>; 2],
}

impl<Id: Copy> TableRow<Id> {
    fn new(id: Id, cells: Vec<String>) -> Self {
        Self {
            cells,
            actions: [RowAction::Edit(id), RowAction::Delete(id)],
        }
    }
}

/// A table body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<Id> {
    rows: Vec<TableRow<Id>>,
}

impl<Id> Default for Table<Id> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<Id> Table<Id> {
    /// Clear the body and append the given rows in order
    pub fn replace_rows(&mut self, rows: impl IntoIterator<Item = TableRow<Id>>) {
        self.rows.clear();
        self.rows.extend(rows);
    }

    pub fn rows(&self) -> &[TableRow<Id>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Pattern used to render dates in tables; always a valid strftime pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat(String);

impl Default for DateFormat {
    fn default() -> Self {
        Self(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl DateFormat {
    /// Use `pattern`, or the default when it does not parse
    pub fn new(pattern: &str) -> Self {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            tracing::warn!(pattern, "Invalid date format, using {}", DEFAULT_DATE_FORMAT);
            return Self::default();
        }
        Self(pattern.to_string())
    }

    pub fn render(&self, date: Option<NaiveDate>) -> String {
        date.map(|d| d.format(&self.0).to_string()).unwrap_or_default()
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

pub fn equipment_row(equipment: &Equipment, dates: &DateFormat) -> TableRow<uuid::Uuid> {
    TableRow::new(
        equipment.equipment_id,
        vec![
            equipment.serial_number.clone(),
            equipment.equipment_name.clone(),
            equipment.category.category_name.clone(),
            equipment.condition.condition_name.clone(),
            equipment.quantity.to_string(),
            dates.render(equipment.last_check_date),
            dates.render(Some(equipment.end_of_service_date)),
            text(equipment.description.as_deref()),
        ],
    )
}

pub fn category_row(category: &Category) -> TableRow<i32> {
    TableRow::new(
        category.category_id,
        vec![
            category.category_name.clone(),
            text(category.description.as_deref()),
        ],
    )
}

pub fn condition_row(condition: &Condition) -> TableRow<i32> {
    TableRow::new(condition.condition_id, vec![condition.condition_name.clone()])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// A `<select>` control: a placeholder option followed by one option per record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
}

impl SelectControl {
    pub fn repopulate(
        &mut self,
        placeholder: &str,
        options: impl IntoIterator<Item = (String, String)>,
    ) {
        self.options.clear();
        self.options.push(SelectOption {
            value: String::new(),
            label: placeholder.to_string(),
        });
        self.options.extend(
            options
                .into_iter()
                .map(|(value, label)| SelectOption { value, label }),
        );
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn contains(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

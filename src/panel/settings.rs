//! Settings page: category and condition dictionaries, each edited in a modal

use super::{
    client::ApiClient,
    form::{CategoryForm, ConditionForm},
    table::{category_row, condition_row, Table},
    ui::PanelUi,
    PanelResult, Visibility,
};
use crate::models::{SortDirection, SortQuery};

pub const DELETE_CATEGORY_PROMPT: &str = "Delete category?";
pub const DELETE_CONDITION_PROMPT: &str = "Delete condition?";

/// A modal dialog wrapping one form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal<F> {
    pub title: &'static str,
    pub visibility: Visibility,
    pub form: F,
}

impl<F: Default> Modal<F> {
    fn open(&mut self, title: &'static str, form: F) {
        self.title = title;
        self.form = form;
        self.visibility = Visibility::Shown;
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Hidden;
    }
}

pub struct SettingsPage<C, U> {
    client: C,
    ui: U,
    pub categories: Table<i32>,
    pub conditions: Table<i32>,
    pub category_modal: Modal<CategoryForm>,
    pub condition_modal: Modal<ConditionForm>,
}

impl<C: ApiClient, U: PanelUi> SettingsPage<C, U> {
    pub fn new(client: C, ui: U) -> Self {
        Self {
            client,
            ui,
            categories: Table::default(),
            conditions: Table::default(),
            category_modal: Modal::default(),
            condition_modal: Modal::default(),
        }
    }

    fn report(&self, result: PanelResult<()>) {
        if let Err(err) = result {
            self.ui.notify(err.into());
        }
    }

    /// Page load: both tables, each failure notified on its own
    pub async fn load(&mut self) {
        let result = self.reload_categories().await;
        self.report(result);
        let result = self.reload_conditions().await;
        self.report(result);
    }

    pub async fn reload_categories(&mut self) -> PanelResult<()> {
        let categories = self
            .client
            .list_categories(SortQuery::new("categoryName", SortDirection::Asc))
            .await?;
        self.categories
            .replace_rows(categories.iter().map(category_row));
        Ok(())
    }

    pub async fn reload_conditions(&mut self) -> PanelResult<()> {
        let conditions = self
            .client
            .list_conditions(SortQuery::new("conditionName", SortDirection::Asc))
            .await?;
        self.conditions
            .replace_rows(conditions.iter().map(condition_row));
        Ok(())
    }

    // Categories

    pub fn open_create_category(&mut self) {
        self.category_modal
            .open("Add category", CategoryForm::default());
    }

    pub async fn edit_category(&mut self, id: i32) {
        match self.client.get_category(id).await {
            Ok(category) => {
                let mut form = CategoryForm::default();
                form.fill(&category);
                self.category_modal.open("Edit category", form);
            }
            Err(err) => self.ui.notify(err.into()),
        }
    }

    pub async fn submit_category(&mut self) {
        let result = self.try_submit_category().await;
        self.report(result);
    }

    async fn try_submit_category(&mut self) -> PanelResult<()> {
        let form = &self.category_modal.form;
        let payload = form.to_payload()?;
        match form.editing_id()? {
            Some(id) => {
                self.client.update_category(id, &payload).await?;
            }
            None => {
                self.client.create_category(&payload).await?;
            }
        }
        tracing::debug!(category = %payload.category_name, "Category saved");

        self.category_modal.close();
        self.reload_categories().await
    }

    pub async fn delete_category(&mut self, id: i32) {
        if !self.ui.confirm(DELETE_CATEGORY_PROMPT) {
            return;
        }
        let result = match self.client.delete_category(id).await {
            Ok(()) => self.reload_categories().await,
            Err(err) => Err(err),
        };
        self.report(result);
    }

    // Conditions

    pub fn open_create_condition(&mut self) {
        self.condition_modal
            .open("Add condition", ConditionForm::default());
    }

    pub async fn edit_condition(&mut self, id: i32) {
        match self.client.get_condition(id).await {
            Ok(condition) => {
                let mut form = ConditionForm::default();
                form.fill(&condition);
                self.condition_modal.open("Edit condition", form);
            }
            Err(err) => self.ui.notify(err.into()),
        }
    }

    pub async fn submit_condition(&mut self) {
        let result = self.try_submit_condition().await;
        self.report(result);
    }

    async fn try_submit_condition(&mut self) -> PanelResult<()> {
        let form = &self.condition_modal.form;
        let payload = form.to_payload()?;
        match form.editing_id()? {
            Some(id) => {
                self.client.update_condition(id, &payload).await?;
            }
            None => {
                self.client.create_condition(&payload).await?;
            }
        }
        tracing::debug!(condition = %payload.condition_name, "Condition saved");

        self.condition_modal.close();
        self.reload_conditions().await
    }

    pub async fn delete_condition(&mut self, id: i32) {
        if !self.ui.confirm(DELETE_CONDITION_PROMPT) {
            return;
        }
        let result = match self.client.delete_condition(id).await {
            Ok(()) => self.reload_conditions().await,
            Err(err) => Err(err),
        };
        self.report(result);
    }
}

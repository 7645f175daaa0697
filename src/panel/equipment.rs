//! Equipment page: inventory table, category/condition pickers and the
//! collapsible create/edit form

use uuid::Uuid;

use super::{
    client::ApiClient,
    form::EquipmentForm,
    table::{equipment_row, DateFormat, SelectControl, Table},
    ui::PanelUi,
    PanelResult, Visibility,
};
use crate::models::{SortDirection, SortQuery};

pub const CATEGORY_PLACEHOLDER: &str = "-- Select category --";
pub const CONDITION_PLACEHOLDER: &str = "-- Select condition --";
pub const DELETE_PROMPT: &str = "Delete equipment?";

pub struct EquipmentPage<C, U> {
    client: C,
    ui: U,
    dates: DateFormat,
    pub table: Table<Uuid>,
    pub category_select: SelectControl,
    pub condition_select: SelectControl,
    pub form: EquipmentForm,
    /// The collapse wrapping the form
    pub form_panel: Visibility,
}

impl<C: ApiClient, U: PanelUi> EquipmentPage<C, U> {
    pub fn new(client: C, ui: U) -> Self {
        Self {
            client,
            ui,
            dates: DateFormat::default(),
            table: Table::default(),
            category_select: SelectControl::default(),
            condition_select: SelectControl::default(),
            form: EquipmentForm::default(),
            form_panel: Visibility::Hidden,
        }
    }

    pub fn with_date_format(mut self, dates: DateFormat) -> Self {
        self.dates = dates;
        self
    }

    /// Page load: pickers first, then the table; stops at the first failure
    pub async fn load(&mut self) {
        if let Err(err) = self.try_load().await {
            self.ui.notify(err.into());
        }
    }

    async fn try_load(&mut self) -> PanelResult<()> {
        self.load_categories().await?;
        self.load_conditions().await?;
        self.reload_equipment().await
    }

    async fn load_categories(&mut self) -> PanelResult<()> {
        let categories = self
            .client
            .list_categories(SortQuery::new("categoryName", SortDirection::Asc))
            .await?;
        self.category_select.repopulate(
            CATEGORY_PLACEHOLDER,
            categories
                .into_iter()
                .map(|c| (c.category_id.to_string(), c.category_name)),
        );
        Ok(())
    }

    async fn load_conditions(&mut self) -> PanelResult<()> {
        let conditions = self
            .client
            .list_conditions(SortQuery::new("conditionName", SortDirection::Asc))
            .await?;
        self.condition_select.repopulate(
            CONDITION_PLACEHOLDER,
            conditions
                .into_iter()
                .map(|c| (c.condition_id.to_string(), c.condition_name)),
        );
        Ok(())
    }

    pub async fn reload_equipment(&mut self) -> PanelResult<()> {
        let equipment = self
            .client
            .list_equipment(SortQuery::new("serialNumber", SortDirection::Asc))
            .await?;
        let dates = &self.dates;
        self.table
            .replace_rows(equipment.iter().map(|eq| equipment_row(eq, dates)));
        Ok(())
    }

    /// Edit control: fetch the record into the form and open it
    pub async fn edit(&mut self, id: Uuid) {
        match self.client.get_equipment(id).await {
            Ok(equipment) => {
                self.form.fill(&equipment);
                self.form_panel = Visibility::Shown;
            }
            Err(err) => self.ui.notify(err.into()),
        }
    }

    /// Form submit: create when the hidden id is empty, update otherwise
    pub async fn submit(&mut self) {
        if let Err(err) = self.try_submit().await {
            self.ui.notify(err.into());
        }
    }

    async fn try_submit(&mut self) -> PanelResult<()> {
        let payload = self.form.to_payload()?;
        match self.form.editing_id()? {
            Some(id) => {
                self.client.update_equipment(id, &payload).await?;
                tracing::debug!(equipment_id = %id, "Equipment saved");
            }
            None => {
                let created = self.client.create_equipment(&payload).await?;
                tracing::debug!(equipment_id = %created.equipment_id, "Equipment created");
            }
        }

        self.form.clear();
        self.form_panel = Visibility::Hidden;
        self.reload_equipment().await
    }

    pub fn cancel(&mut self) {
        self.form.clear();
        self.form_panel = Visibility::Hidden;
    }

    /// Delete control: ask first, then delete and reload
    pub async fn delete(&mut self, id: Uuid) {
        if !self.ui.confirm(DELETE_PROMPT) {
            return;
        }
        let result = match self.client.delete_equipment(id).await {
            Ok(()) => self.reload_equipment().await,
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            self.ui.notify(err.into());
        }
    }
}

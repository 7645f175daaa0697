//! Admin panel page controllers
//!
//! Component-scoped models of the two admin pages: the equipment page
//! (table plus collapsible form) and the settings page (category and
//! condition tables with modal forms). Network access goes through
//! [`client::ApiClient`], user interaction through [`ui::PanelUi`].

pub mod client;
pub mod equipment;
pub mod form;
pub mod settings;
pub mod table;
pub mod ui;

use thiserror::Error;

pub use client::{ApiClient, HttpApiClient};
pub use equipment::EquipmentPage;
pub use settings::SettingsPage;
pub use ui::{Notice, PanelUi};

/// Failure surfaced to the user; the message is shown as-is
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// Form input rejected before any request was made
    #[error("{0}")]
    Validation(String),
    /// Network failure or non-OK response
    #[error("{0}")]
    Request(String),
}

pub type PanelResult<T> = Result<T, PanelError>;

/// Shown / hidden state of a Bootstrap collapse or modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

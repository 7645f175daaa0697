//! Equipment Tracker
//!
//! Inventory management for sports equipment: a REST JSON API over
//! PostgreSQL for equipment, categories and conditions, plus the admin
//! panel's page-controller logic that drives it.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod panel;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}

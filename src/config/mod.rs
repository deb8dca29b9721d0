//! Reference-data configuration for the Rental Agreement Engine.
//!
//! This module provides the [`ConfigLoader`] for reading the tool catalog,
//! holiday specifications, and application settings from YAML files, plus
//! the validated in-memory forms the engine consumes.

mod catalog;
mod loader;
mod types;

pub use catalog::ToolCatalog;
pub use loader::ConfigLoader;
pub use types::{
    CatalogConfig, HolidayConfig, HolidaysConfig, Settings, SettingsConfig, ToolConfig,
    ToolTypeConfig,
};

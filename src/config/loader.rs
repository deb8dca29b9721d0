//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tool
//! catalog, holiday specifications, and application settings from YAML
//! files.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use chrono::{Month, NaiveDate, Weekday};
use rust_decimal::Decimal;

use crate::calculation::RentalEngine;
use crate::calendar::{HolidayCalendar, HolidaySpec, WeekendRule};
use crate::error::{ConfigError, EngineResult};
use crate::models::{Tool, ToolType};

use super::catalog::ToolCatalog;
use super::types::{
    rounding_strategy_from_name, CatalogConfig, HolidayConfig, HolidaysConfig, Settings,
    SettingsConfig,
};

/// Loads and validates engine reference data.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/toolrental/
/// ├── catalog.yaml    # Tool types and tools
/// ├── holidays.yaml   # Holiday specifications
/// └── settings.yaml   # Weekend, rounding, locale (optional)
/// ```
///
/// `settings.yaml` may be absent, in which case the defaults apply.
///
/// # Example
///
/// ```no_run
/// use rental_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/toolrental")?;
/// println!("{} tools for rent", loader.catalog().tool_count());
///
/// let engine = loader.into_engine();
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct ConfigLoader {
    catalog: ToolCatalog,
    holiday_specs: Vec<HolidaySpec>,
    settings: Settings,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `catalog.yaml` or `holidays.yaml` is
    /// missing or malformed, if any holiday entry fails field validation,
    /// if a tool references an undefined type, or if `settings.yaml`
    /// contains an unusable value.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalog_config = Self::load_yaml::<CatalogConfig>(&path.join("catalog.yaml"))?;
        let catalog = build_catalog(catalog_config)?;

        let holidays_config = Self::load_yaml::<HolidaysConfig>(&path.join("holidays.yaml"))?;
        let holiday_specs = holidays_config
            .holidays
            .into_iter()
            .map(build_holiday_spec)
            .collect::<EngineResult<Vec<_>>>()?;

        // Settings are optional; the application runs on defaults without
        // the file, as the original point of sale did.
        let settings_path = path.join("settings.yaml");
        let settings = if settings_path.exists() {
            build_settings(Self::load_yaml::<SettingsConfig>(&settings_path)?)?
        } else {
            Settings::default()
        };

        Ok(Self {
            catalog,
            holiday_specs,
            settings,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        // Only a genuinely absent file reports as NotFound; permission or
        // encoding failures carry the underlying I/O message instead.
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::NotFound {
                path: path_str.clone(),
            },
            _ => ConfigError::Parse {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            ConfigError::Parse {
                path: path_str,
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Returns the loaded tool catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Returns the loaded holiday specifications.
    pub fn holiday_specs(&self) -> &[HolidaySpec] {
        &self.holiday_specs
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Consumes the loader and assembles a ready-to-use [`RentalEngine`].
    pub fn into_engine(self) -> RentalEngine {
        let calendar = HolidayCalendar::new(self.holiday_specs, self.settings.weekend.clone());
        RentalEngine::new(self.catalog, calendar, self.settings)
    }
}

/// Converts the raw catalog file into validated lookup tables.
fn build_catalog(config: CatalogConfig) -> EngineResult<ToolCatalog> {
    let mut tool_types = Vec::with_capacity(config.tool_types.len());
    for t in config.tool_types {
        if t.daily_charge < Decimal::ZERO {
            return Err(ConfigError::InvalidSetting {
                key: format!("tool_types.{}.daily_charge", t.name),
                message: format!("daily charge cannot be negative (got {})", t.daily_charge),
            }
            .into());
        }
        tool_types.push(ToolType {
            name: t.name,
            daily_charge: t.daily_charge,
            weekday_charge: t.weekday_charge,
            weekend_charge: t.weekend_charge,
            holiday_charge: t.holiday_charge,
        });
    }

    let tools = config
        .tools
        .into_iter()
        .map(|t| Tool {
            code: t.code,
            type_name: t.tool_type,
            brand: t.brand,
        })
        .collect();

    ToolCatalog::new(tools, tool_types)
}

/// Validates one holiday entry and converts it into the tagged spec.
fn build_holiday_spec(config: HolidayConfig) -> EngineResult<HolidaySpec> {
    let name = config.name.clone();
    let invalid = |message: String| ConfigError::InvalidHolidaySpec {
        name: name.clone(),
        message,
    };

    let month = Month::from_str(&config.month)
        .map_err(|_| invalid(format!("'{}' is not a valid month name", config.month)))?
        .number_from_month();

    match config.kind.as_str() {
        "fixed" => {
            let day = config
                .day
                .ok_or_else(|| invalid("fixed holiday is missing 'day'".to_string()))?;
            // Range check against the month's maximum length; 2000 is a
            // leap year, so February 29 passes here and is rejected per
            // non-leap year at resolution time.
            if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
                return Err(invalid(format!(
                    "day {} is out of range for {}",
                    day, config.month
                ))
                .into());
            }
            let adjust_weekend = config
                .adjust_weekend
                .ok_or_else(|| invalid("fixed holiday is missing 'adjust_weekend'".to_string()))?;
            Ok(HolidaySpec::Fixed {
                name: config.name,
                month,
                day,
                adjust_weekend,
            })
        }
        "floating" => {
            let weekday_name = config
                .weekday
                .ok_or_else(|| invalid("floating holiday is missing 'weekday'".to_string()))?;
            let weekday = Weekday::from_str(&weekday_name)
                .map_err(|_| invalid(format!("'{}' is not a valid day of the week", weekday_name)))?;
            let ordinal_week = config
                .ordinal_week
                .ok_or_else(|| invalid("floating holiday is missing 'ordinal_week'".to_string()))?;
            if !(1..=4).contains(&ordinal_week) {
                return Err(invalid(format!(
                    "ordinal_week {} is out of range (1-4)",
                    ordinal_week
                ))
                .into());
            }
            Ok(HolidaySpec::Floating {
                name: config.name,
                month,
                ordinal_week,
                weekday,
            })
        }
        other => Err(invalid(format!(
            "'{}' is not a valid holiday kind (fixed or floating)",
            other
        ))
        .into()),
    }
}

/// Validates the raw settings file, falling back to defaults per field.
fn build_settings(config: SettingsConfig) -> EngineResult<Settings> {
    let defaults = Settings::default();

    let weekend = match config.weekend_days {
        Some(names) if !names.is_empty() => {
            let mut days = Vec::with_capacity(names.len());
            for name in &names {
                let day = Weekday::from_str(name).map_err(|_| ConfigError::InvalidSetting {
                    key: "weekend_days".to_string(),
                    message: format!("'{}' is not a valid day of the week", name),
                })?;
                days.push(day);
            }
            // The first listed day starts the weekend and sets the fixed
            // holiday slide direction.
            let start = days[0];
            WeekendRule::new(days, start)
        }
        Some(_) => {
            return Err(ConfigError::InvalidSetting {
                key: "weekend_days".to_string(),
                message: "weekend day list cannot be empty".to_string(),
            }
            .into());
        }
        None => defaults.weekend,
    };

    let decimal_scale = match config.decimal_scale {
        Some(scale) if scale <= 28 => scale,
        Some(scale) => {
            return Err(ConfigError::InvalidSetting {
                key: "decimal_scale".to_string(),
                message: format!("scale {} exceeds the supported maximum of 28", scale),
            }
            .into());
        }
        None => defaults.decimal_scale,
    };

    let rounding = match config.rounding_mode {
        Some(name) => rounding_strategy_from_name(&name).ok_or(ConfigError::InvalidSetting {
            key: "rounding_mode".to_string(),
            message: format!("'{}' is not a recognized rounding mode", name),
        })?,
        None => defaults.rounding,
    };

    Ok(Settings {
        weekend,
        decimal_scale,
        rounding,
        locale: config.locale.unwrap_or(defaults.locale),
        date_format: config.date_format.unwrap_or(defaults.date_format),
    })
}

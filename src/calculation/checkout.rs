//! The checkout orchestrator.
//!
//! [`RentalEngine`] ties the catalog, the holiday calendar, and the charge
//! calculation together: validate inputs, look up the tool, classify the
//! rental window, compute the charges, and assemble the agreement. A single
//! pass with no retries; any failure aborts before a partial agreement
//! exists.

use chrono::NaiveDate;

use crate::calendar::HolidayCalendar;
use crate::config::{Settings, ToolCatalog};
use crate::error::{ConfigError, EngineResult, ValidationError};
use crate::models::RentalAgreement;

use super::charges::calculate_charges;

/// The rental agreement engine.
///
/// Holds the read-only reference data (catalog, calendar, settings) as
/// explicitly constructed values rather than ambient globals, so the engine
/// can be built against fixture data in tests.
///
/// # Example
///
/// ```no_run
/// use rental_engine::calculation::RentalEngine;
/// use rental_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/toolrental")?;
/// let engine = loader.into_engine();
///
/// let checkout_date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let agreement = engine.checkout("LADW", checkout_date, 3, 10)?;
/// assert_eq!(agreement.charge_days, 2);
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug)]
pub struct RentalEngine {
    catalog: ToolCatalog,
    calendar: HolidayCalendar,
    settings: Settings,
}

impl RentalEngine {
    /// Creates an engine from its reference-data parts.
    pub fn new(catalog: ToolCatalog, calendar: HolidayCalendar, settings: Settings) -> Self {
        Self {
            catalog,
            calendar,
            settings,
        }
    }

    /// Returns the tool catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Returns the application settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Completes a rental agreement.
    ///
    /// Validates the inputs, resolves the tool and its type, classifies the
    /// rental window starting at the checkout date (inclusive), and computes
    /// the charge breakdown.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::UnknownToolCode`] when the code is not in the
    ///   catalog
    /// - [`ValidationError::InvalidRentalDuration`] when `rental_days < 1`
    ///   or exceeds the supported day-counter range
    /// - [`ValidationError::InvalidDiscountPercent`] when the discount is
    ///   outside 0-100
    /// - [`ConfigError::UnknownToolType`] when the tool references a type
    ///   missing from the catalog (broken reference data)
    /// - a configuration error when a holiday spec fails to resolve for a
    ///   year the rental window touches
    pub fn checkout(
        &self,
        tool_code: &str,
        checkout_date: NaiveDate,
        rental_days: i64,
        discount_percent: i64,
    ) -> EngineResult<RentalAgreement> {
        if rental_days < 1 {
            return Err(ValidationError::InvalidRentalDuration { days: rental_days }.into());
        }
        // Checked narrowing: an i64 wider than the day counter is invalid
        // input, not a value to wrap.
        let day_count = u32::try_from(rental_days)
            .map_err(|_| ValidationError::InvalidRentalDuration { days: rental_days })?;
        let percent = u32::try_from(discount_percent)
            .ok()
            .filter(|p| *p <= 100)
            .ok_or(ValidationError::InvalidDiscountPercent {
                percent: discount_percent,
            })?;
        let tool = self
            .catalog
            .tool(tool_code)
            .ok_or_else(|| ValidationError::UnknownToolCode {
                code: tool_code.to_string(),
            })?;
        let tool_type = self
            .catalog
            .tool_type(&tool.type_name)
            .ok_or_else(|| ConfigError::UnknownToolType {
                tool_code: tool.code.clone(),
                type_name: tool.type_name.clone(),
            })?;

        let due_date = checkout_date + chrono::Duration::days(i64::from(day_count));

        let period = self.calendar.classify_period(checkout_date, day_count)?;
        let charges = calculate_charges(tool_type, &period, percent, &self.settings);

        Ok(RentalAgreement {
            tool: tool.clone(),
            tool_type: tool_type.clone(),
            checkout_date,
            due_date,
            rental_days: day_count,
            charge_days: charges.charge_days,
            pre_discount_charge: charges.pre_discount_charge,
            discount_percent: charges.discount_percent,
            discount_amount: charges.discount_amount,
            final_charge: charges.final_charge,
        })
    }
}

//! Configuration types.
//!
//! The `*Config` structs are the raw shapes deserialized from the YAML
//! files; month names, weekday names, and rounding-mode names stay strings
//! there and are validated into domain types by the loader. [`Settings`] is
//! the validated application configuration the engine consumes.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;

use crate::calendar::WeekendRule;

/// Catalog file structure (`catalog.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Tool type definitions.
    pub tool_types: Vec<ToolTypeConfig>,
    /// Tool definitions.
    pub tools: Vec<ToolConfig>,
}

/// A tool type entry in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolTypeConfig {
    /// The unique type name.
    pub name: String,
    /// The daily rental charge.
    pub daily_charge: Decimal,
    /// Whether weekdays are billable.
    pub weekday_charge: bool,
    /// Whether weekend days are billable.
    pub weekend_charge: bool,
    /// Whether holidays are billable.
    pub holiday_charge: bool,
}

/// A tool entry in the catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolConfig {
    /// The unique tool code.
    pub code: String,
    /// Name of the tool's type; must exist in `tool_types`.
    pub tool_type: String,
    /// The tool's brand.
    pub brand: String,
}

/// Holidays file structure (`holidays.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// Holiday entries.
    pub holidays: Vec<HolidayConfig>,
}

/// A holiday entry in the holidays file.
///
/// `kind` selects which of the remaining fields are required: fixed
/// holidays need `day` and `adjust_weekend`, floating holidays need
/// `weekday` and `ordinal_week`. The loader enforces this and converts the
/// entry into the tagged [`HolidaySpec`] sum type.
///
/// [`HolidaySpec`]: crate::calendar::HolidaySpec
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayConfig {
    /// The holiday name.
    pub name: String,
    /// "fixed" or "floating".
    pub kind: String,
    /// The month name (e.g., "July").
    pub month: String,
    /// Day of the month (fixed holidays).
    #[serde(default)]
    pub day: Option<u32>,
    /// Whether the holiday slides off a weekend (fixed holidays).
    #[serde(default)]
    pub adjust_weekend: Option<bool>,
    /// Day-of-week name (floating holidays).
    #[serde(default)]
    pub weekday: Option<String>,
    /// Which occurrence of the weekday, 1-4 (floating holidays).
    #[serde(default)]
    pub ordinal_week: Option<u8>,
}

/// Settings file structure (`settings.yaml`).
///
/// Every field is optional; missing fields fall back to the defaults in
/// [`Settings`]. The first listed weekend day is the weekend-start day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsConfig {
    /// Weekend day names, first one starting the weekend.
    #[serde(default)]
    pub weekend_days: Option<Vec<String>>,
    /// Decimal places for rounded amounts.
    #[serde(default)]
    pub decimal_scale: Option<u32>,
    /// Rounding mode name (e.g., "HALF_UP").
    #[serde(default)]
    pub rounding_mode: Option<String>,
    /// Locale tag for presentation layers.
    #[serde(default)]
    pub locale: Option<String>,
    /// chrono date format for display and input parsing.
    #[serde(default)]
    pub date_format: Option<String>,
}

/// Validated application settings.
///
/// # Example
///
/// ```
/// use rental_engine::config::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.decimal_scale, 2);
/// assert_eq!(settings.date_format, "%m/%d/%y");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// The configured weekend rule.
    pub weekend: WeekendRule,
    /// Decimal places for rounded amounts.
    pub decimal_scale: u32,
    /// The rounding strategy for the discount amount.
    pub rounding: RoundingStrategy,
    /// Locale tag for presentation layers.
    pub locale: String,
    /// chrono date format for display and input parsing.
    pub date_format: String,
}

impl Default for Settings {
    /// US defaults: Saturday+Sunday weekend, scale 2, half-up rounding,
    /// `MM/DD/YY` dates.
    fn default() -> Self {
        Self {
            weekend: WeekendRule::default(),
            decimal_scale: 2,
            rounding: RoundingStrategy::MidpointAwayFromZero,
            locale: "en-US".to_string(),
            date_format: "%m/%d/%y".to_string(),
        }
    }
}

/// Maps a configured rounding-mode name onto a decimal rounding strategy.
///
/// Accepts the conventional names case-insensitively; returns `None` for
/// anything unrecognized.
pub(crate) fn rounding_strategy_from_name(name: &str) -> Option<RoundingStrategy> {
    match name.to_uppercase().as_str() {
        "HALF_UP" => Some(RoundingStrategy::MidpointAwayFromZero),
        "HALF_DOWN" => Some(RoundingStrategy::MidpointTowardZero),
        "HALF_EVEN" => Some(RoundingStrategy::MidpointNearestEven),
        "UP" => Some(RoundingStrategy::AwayFromZero),
        "DOWN" => Some(RoundingStrategy::ToZero),
        "FLOOR" => Some(RoundingStrategy::ToNegativeInfinity),
        "CEILING" => Some(RoundingStrategy::ToPositiveInfinity),
        _ => None,
    }
}

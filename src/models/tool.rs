//! Tool and tool type models.
//!
//! Both types hold reference data: they are constructed once at catalog load
//! and never mutated afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable tool.
///
/// Identified by its tool code; the type name is a reference into the
/// tool-type table.
///
/// # Example
///
/// ```
/// use rental_engine::models::Tool;
///
/// let tool = Tool {
///     code: "LADW".to_string(),
///     type_name: "Ladder".to_string(),
///     brand: "Werner".to_string(),
/// };
/// assert_eq!(tool.code, "LADW");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The unique tool code (e.g., "LADW").
    pub code: String,
    /// The name of the tool's type (e.g., "Ladder").
    pub type_name: String,
    /// The tool's brand (e.g., "Werner").
    pub brand: String,
}

/// A category of tool with its pricing and billing rules.
///
/// The three billing flags decide which day kinds of a rental period count
/// toward the bill. A type with all three flags false is legal and simply
/// accrues zero charge days.
///
/// # Example
///
/// ```
/// use rental_engine::models::ToolType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ladder = ToolType {
///     name: "Ladder".to_string(),
///     daily_charge: Decimal::from_str("1.99").unwrap(),
///     weekday_charge: true,
///     weekend_charge: true,
///     holiday_charge: false,
/// };
/// assert!(!ladder.holiday_charge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolType {
    /// The unique type name (e.g., "Chainsaw").
    pub name: String,
    /// The daily rental charge.
    pub daily_charge: Decimal,
    /// Whether weekdays are billable for this type.
    pub weekday_charge: bool,
    /// Whether weekend days are billable for this type.
    pub weekend_charge: bool,
    /// Whether holidays are billable for this type.
    pub holiday_charge: bool,
}

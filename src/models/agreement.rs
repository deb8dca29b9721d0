//! Rental agreement result model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Tool, ToolType};

/// A completed rental agreement.
///
/// The immutable result of a successful checkout: the resolved tool and
/// type, the rental window, and the full charge breakdown. Instances are
/// only ever produced by [`RentalEngine::checkout`]; a failed checkout
/// produces no partial agreement.
///
/// The `discount_percent` field is the fraction form (0.00 through 1.00) of
/// the whole-number percentage supplied at checkout.
///
/// [`RentalEngine::checkout`]: crate::calculation::RentalEngine::checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// The rented tool.
    pub tool: Tool,
    /// The tool's type, with pricing and billing rules.
    pub tool_type: ToolType,
    /// The checkout date (first day of the rental window).
    pub checkout_date: NaiveDate,
    /// The due date: checkout date plus the rental day count.
    pub due_date: NaiveDate,
    /// The number of days in the rental.
    pub rental_days: u32,
    /// The number of billable days, per the tool type's billing flags.
    pub charge_days: u32,
    /// Daily charge times charge days, at full precision.
    pub pre_discount_charge: Decimal,
    /// The discount as a fraction (e.g., 0.10 for 10%).
    pub discount_percent: Decimal,
    /// The discount amount, rounded to the configured scale.
    pub discount_amount: Decimal,
    /// Pre-discount charge minus the rounded discount amount.
    pub final_charge: Decimal,
}

impl RentalAgreement {
    /// Renders the agreement as labeled display lines.
    ///
    /// Dates are formatted with the given chrono format string (the
    /// configured application date format). Used by presentation layers;
    /// no other formatting logic lives in the engine.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_engine::models::{RentalAgreement, Tool, ToolType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let agreement = RentalAgreement {
    ///     tool: Tool {
    ///         code: "LADW".to_string(),
    ///         type_name: "Ladder".to_string(),
    ///         brand: "Werner".to_string(),
    ///     },
    ///     tool_type: ToolType {
    ///         name: "Ladder".to_string(),
    ///         daily_charge: Decimal::from_str("1.99").unwrap(),
    ///         weekday_charge: true,
    ///         weekend_charge: true,
    ///         holiday_charge: false,
    ///     },
    ///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
    ///     due_date: NaiveDate::from_ymd_opt(2020, 7, 5).unwrap(),
    ///     rental_days: 3,
    ///     charge_days: 2,
    ///     pre_discount_charge: Decimal::from_str("3.98").unwrap(),
    ///     discount_percent: Decimal::from_str("0.10").unwrap(),
    ///     discount_amount: Decimal::from_str("0.40").unwrap(),
    ///     final_charge: Decimal::from_str("3.58").unwrap(),
    /// };
    ///
    /// let lines = agreement.display_lines("%m/%d/%y");
    /// assert_eq!(lines[0], "Tool code: LADW");
    /// assert_eq!(lines[5], "Due date: 07/05/20");
    /// ```
    pub fn display_lines(&self, date_format: &str) -> Vec<String> {
        vec![
            format!("Tool code: {}", self.tool.code),
            format!("Tool type: {}", self.tool.type_name),
            format!("Tool brand: {}", self.tool.brand),
            format!("Rental days: {}", self.rental_days),
            format!("Checkout date: {}", self.checkout_date.format(date_format)),
            format!("Due date: {}", self.due_date.format(date_format)),
            format!("Daily rental charge: ${}", self.tool_type.daily_charge),
            format!("Charge days: {}", self.charge_days),
            format!("Pre-discount charge: ${}", self.pre_discount_charge),
            format!(
                "Discount percent: {}%",
                (self.discount_percent * Decimal::ONE_HUNDRED).normalize()
            ),
            format!("Discount amount: ${}", self.discount_amount),
            format!("Final charge: ${}", self.final_charge),
        ]
    }
}

//! Charge-day counting and the monetary breakdown.

use rust_decimal::Decimal;

use crate::config::Settings;
use crate::models::{RentalPeriod, ToolType};

/// The monetary side of a rental agreement.
///
/// `pre_discount_charge` is kept at full precision; only the discount
/// amount is rounded (to the configured scale and mode), and the final
/// charge is the exact subtraction of the two. This matches the billing
/// behavior the engine replaces, where the rounding point is the discount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeBreakdown {
    /// The number of billable days.
    pub charge_days: u32,
    /// Daily charge times charge days, unrounded.
    pub pre_discount_charge: Decimal,
    /// The discount as a fraction (e.g., 0.25 for 25%).
    pub discount_percent: Decimal,
    /// The rounded discount amount, never more than the pre-discount charge.
    pub discount_amount: Decimal,
    /// Pre-discount charge minus the rounded discount amount.
    pub final_charge: Decimal,
}

/// Counts the billable days of a period for a tool type.
///
/// Each day-kind counter contributes only when the corresponding billing
/// flag is set. The result is never more than the period's total days, and
/// equals it exactly when all three flags are set.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::charge_days;
/// use rental_engine::models::{RentalPeriod, ToolType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let jackhammer = ToolType {
///     name: "Jackhammer".to_string(),
///     daily_charge: Decimal::from_str("2.99").unwrap(),
///     weekday_charge: true,
///     weekend_charge: false,
///     holiday_charge: false,
/// };
/// let period = RentalPeriod { weekdays: 3, weekend_days: 2, holidays: 1 };
/// assert_eq!(charge_days(&jackhammer, &period), 3);
/// ```
pub fn charge_days(tool_type: &ToolType, period: &RentalPeriod) -> u32 {
    let mut days = 0;
    if tool_type.weekday_charge {
        days += period.weekdays;
    }
    if tool_type.weekend_charge {
        days += period.weekend_days;
    }
    if tool_type.holiday_charge {
        days += period.holidays;
    }
    days
}

/// Computes the full charge breakdown for a classified period.
///
/// `discount_percent` is the validated whole-number percentage (0-100);
/// it is converted to an exact two-place decimal fraction before the
/// multiplication, and the discount amount is rounded with the configured
/// scale and rounding mode, capped at the pre-discount charge.
pub fn calculate_charges(
    tool_type: &ToolType,
    period: &RentalPeriod,
    discount_percent: u32,
    settings: &Settings,
) -> ChargeBreakdown {
    let days = charge_days(tool_type, period);
    let pre_discount_charge = tool_type.daily_charge * Decimal::from(days);

    let fraction = Decimal::new(i64::from(discount_percent), 2);
    // When the daily charge is finer than the scale, rounding a full (or
    // near-full) discount can push it past the unrounded charge; cap it so
    // the final charge never goes negative.
    let discount_amount = (pre_discount_charge * fraction)
        .round_dp_with_strategy(settings.decimal_scale, settings.rounding)
        .min(pre_discount_charge);

    ChargeBreakdown {
        charge_days: days,
        pre_discount_charge,
        discount_percent: fraction,
        discount_amount,
        final_charge: pre_discount_charge - discount_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn tool_type(daily: &str, weekday: bool, weekend: bool, holiday: bool) -> ToolType {
        ToolType {
            name: "Test".to_string(),
            daily_charge: dec(daily),
            weekday_charge: weekday,
            weekend_charge: weekend,
            holiday_charge: holiday,
        }
    }

    fn period(weekdays: u32, weekend_days: u32, holidays: u32) -> RentalPeriod {
        RentalPeriod {
            weekdays,
            weekend_days,
            holidays,
        }
    }

    // =========================================================================
    // charge_days
    // =========================================================================

    #[test]
    fn test_all_flags_set_bills_every_day() {
        let full = tool_type("1.00", true, true, true);
        let p = period(3, 2, 1);
        assert_eq!(charge_days(&full, &p), p.total_days());
    }

    #[test]
    fn test_no_flags_set_bills_nothing() {
        let free = tool_type("1.00", false, false, false);
        assert_eq!(charge_days(&free, &period(3, 2, 1)), 0);
    }

    #[test]
    fn test_weekday_only_billing() {
        let jackhammer = tool_type("2.99", true, false, false);
        assert_eq!(charge_days(&jackhammer, &period(6, 2, 1)), 6);
    }

    #[test]
    fn test_weekday_and_holiday_billing() {
        let chainsaw = tool_type("1.49", true, false, true);
        assert_eq!(charge_days(&chainsaw, &period(2, 2, 1)), 3);
    }

    #[test]
    fn test_charge_days_never_exceed_period_days() {
        let p = period(4, 2, 1);
        for weekday in [false, true] {
            for weekend in [false, true] {
                for holiday in [false, true] {
                    let t = tool_type("1.00", weekday, weekend, holiday);
                    assert!(charge_days(&t, &p) <= p.total_days());
                }
            }
        }
    }

    // =========================================================================
    // calculate_charges
    // =========================================================================

    #[test]
    fn test_breakdown_for_ladder_scenario() {
        // 2 charge days at 1.99, 10% discount
        let ladder = tool_type("1.99", true, true, false);
        let breakdown = calculate_charges(&ladder, &period(1, 1, 1), 10, &Settings::default());
        assert_eq!(breakdown.charge_days, 2);
        assert_eq!(breakdown.pre_discount_charge, dec("3.98"));
        assert_eq!(breakdown.discount_percent, dec("0.10"));
        assert_eq!(breakdown.discount_amount, dec("0.40"));
        assert_eq!(breakdown.final_charge, dec("3.58"));
    }

    #[test]
    fn test_zero_discount_leaves_charge_untouched() {
        let jackhammer = tool_type("2.99", true, false, false);
        let breakdown = calculate_charges(&jackhammer, &period(3, 2, 1), 0, &Settings::default());
        assert_eq!(breakdown.discount_amount, Decimal::ZERO);
        assert_eq!(breakdown.final_charge, breakdown.pre_discount_charge);
        assert_eq!(breakdown.final_charge, dec("8.97"));
    }

    #[test]
    fn test_full_discount_yields_zero_final_charge() {
        let ladder = tool_type("1.99", true, true, false);
        let breakdown = calculate_charges(&ladder, &period(3, 2, 0), 100, &Settings::default());
        assert_eq!(breakdown.discount_amount, breakdown.pre_discount_charge);
        assert_eq!(breakdown.final_charge, Decimal::ZERO);
    }

    #[test]
    fn test_discount_rounds_half_up_before_subtraction() {
        // 2.99 * 1 day * 50% = 1.495, rounded half-up to 1.50; the final
        // charge is the unrounded 2.99 minus that, 1.49. Pins the
        // round-then-subtract ordering.
        let jackhammer = tool_type("2.99", true, false, false);
        let breakdown = calculate_charges(&jackhammer, &period(1, 2, 1), 50, &Settings::default());
        assert_eq!(breakdown.charge_days, 1);
        assert_eq!(breakdown.pre_discount_charge, dec("2.99"));
        assert_eq!(breakdown.discount_amount, dec("1.50"));
        assert_eq!(breakdown.final_charge, dec("1.49"));
    }

    #[test]
    fn test_chainsaw_quarter_discount_rounding() {
        // 3 days at 1.49 = 4.47; 25% = 1.1175 -> 1.12; final 3.35
        let chainsaw = tool_type("1.49", true, false, true);
        let breakdown = calculate_charges(&chainsaw, &period(2, 2, 1), 25, &Settings::default());
        assert_eq!(breakdown.charge_days, 3);
        assert_eq!(breakdown.pre_discount_charge, dec("4.47"));
        assert_eq!(breakdown.discount_amount, dec("1.12"));
        assert_eq!(breakdown.final_charge, dec("3.35"));
    }

    #[test]
    fn test_full_discount_on_sub_scale_charge_never_goes_negative() {
        // 1.333 * 3 = 3.999; 100% of that rounds to 4.00, which would
        // overshoot the unrounded charge. The cap keeps the discount at
        // 3.999 and the final charge at zero.
        let odd = tool_type("1.333", true, true, true);
        let breakdown = calculate_charges(&odd, &period(3, 0, 0), 100, &Settings::default());
        assert_eq!(breakdown.discount_amount, dec("3.999"));
        assert_eq!(breakdown.final_charge, Decimal::ZERO);
    }

    #[test]
    fn test_zero_charge_days_all_amounts_zero() {
        let free = tool_type("9.99", false, false, false);
        let breakdown = calculate_charges(&free, &period(3, 2, 1), 50, &Settings::default());
        assert_eq!(breakdown.charge_days, 0);
        assert_eq!(breakdown.pre_discount_charge, Decimal::ZERO);
        assert_eq!(breakdown.discount_amount, Decimal::ZERO);
        assert_eq!(breakdown.final_charge, Decimal::ZERO);
    }

    #[test]
    fn test_three_decimal_daily_charge_keeps_full_precision() {
        // A daily charge finer than the scale: 1.333 * 3 = 3.999 stays
        // unrounded in pre_discount_charge and in the final subtraction.
        let odd = tool_type("1.333", true, true, true);
        let breakdown = calculate_charges(&odd, &period(3, 0, 0), 10, &Settings::default());
        assert_eq!(breakdown.pre_discount_charge, dec("3.999"));
        assert_eq!(breakdown.discount_amount, dec("0.40")); // 0.3999 -> 0.40
        assert_eq!(breakdown.final_charge, dec("3.599"));
    }
}

//! Holiday specifications and per-year resolution.
//!
//! Two kinds of holiday are supported. Fixed holidays sit on a specific
//! month/day each year, optionally sliding off a configured weekend day.
//! Floating holidays are defined as the Nth occurrence of a weekday within a
//! month (e.g., 3rd Monday) and never slide.

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EngineResult};

use super::calendar::WeekendRule;

/// A holiday definition, discriminated by kind.
///
/// Modeled as a sum type so that only the fields relevant to each kind
/// exist at all; there are no optional fields left unpopulated.
///
/// # Example
///
/// ```
/// use rental_engine::calendar::HolidaySpec;
/// use chrono::Weekday;
///
/// let independence_day = HolidaySpec::Fixed {
///     name: "Independence Day".to_string(),
///     month: 7,
///     day: 4,
///     adjust_weekend: true,
/// };
/// let labor_day = HolidaySpec::Floating {
///     name: "Labor Day".to_string(),
///     month: 9,
///     ordinal_week: 1,
///     weekday: Weekday::Mon,
/// };
/// assert_eq!(independence_day.name(), "Independence Day");
/// assert_eq!(labor_day.name(), "Labor Day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidaySpec {
    /// A holiday on a specific month/day each year.
    Fixed {
        /// The holiday name (e.g., "Independence Day").
        name: String,
        /// The month (1-12).
        month: u32,
        /// The day of the month.
        day: u32,
        /// Whether to slide the holiday off a weekend day.
        adjust_weekend: bool,
    },
    /// A holiday on the Nth occurrence of a weekday within a month.
    Floating {
        /// The holiday name (e.g., "Labor Day").
        name: String,
        /// The month (1-12).
        month: u32,
        /// Which occurrence of the weekday (1-4).
        ordinal_week: u8,
        /// The day of the week the holiday falls on.
        weekday: Weekday,
    },
}

impl HolidaySpec {
    /// Returns the holiday's name.
    pub fn name(&self) -> &str {
        match self {
            HolidaySpec::Fixed { name, .. } => name,
            HolidaySpec::Floating { name, .. } => name,
        }
    }

    /// Resolves the spec to its concrete date in the given year.
    ///
    /// Fixed holidays with `adjust_weekend` that land on a configured
    /// weekend day slide exactly one day: backward when they land on the
    /// weekend-start day, forward otherwise. No cascading is applied; a
    /// slid date is used as-is even if it collides with another holiday.
    /// Floating holidays never slide.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHolidaySpec`] when the spec does not
    /// resolve to an existing date in `year` (e.g., February 29 outside a
    /// leap year, or a 4th occurrence that a month does not contain).
    pub fn resolve(&self, year: i32, weekend: &WeekendRule) -> EngineResult<NaiveDate> {
        match *self {
            HolidaySpec::Fixed {
                ref name,
                month,
                day,
                adjust_weekend,
            } => {
                let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    ConfigError::InvalidHolidaySpec {
                        name: name.clone(),
                        message: format!("{}-{:02}-{:02} is not a valid date", year, month, day),
                    }
                })?;
                Ok(if adjust_weekend {
                    slide_off_weekend(date, weekend)
                } else {
                    date
                })
            }
            HolidaySpec::Floating {
                ref name,
                month,
                ordinal_week,
                weekday,
            } => NaiveDate::from_weekday_of_month_opt(year, month, weekday, ordinal_week)
                .ok_or_else(|| {
                    ConfigError::InvalidHolidaySpec {
                        name: name.clone(),
                        message: format!(
                            "occurrence {} of {} does not exist in {}-{:02}",
                            ordinal_week, weekday, year, month
                        ),
                    }
                    .into()
                }),
        }
    }
}

/// Applies the single-day weekend slide to a fixed holiday date.
fn slide_off_weekend(date: NaiveDate, weekend: &WeekendRule) -> NaiveDate {
    use chrono::Datelike;

    if !weekend.contains(date.weekday()) {
        return date;
    }
    if date.weekday() == weekend.start() {
        date - chrono::Duration::days(1)
    } else {
        date + chrono::Duration::days(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn independence_day(adjust: bool) -> HolidaySpec {
        HolidaySpec::Fixed {
            name: "Independence Day".to_string(),
            month: 7,
            day: 4,
            adjust_weekend: adjust,
        }
    }

    fn labor_day() -> HolidaySpec {
        HolidaySpec::Floating {
            name: "Labor Day".to_string(),
            month: 9,
            ordinal_week: 1,
            weekday: Weekday::Mon,
        }
    }

    // =========================================================================
    // Fixed holidays
    // =========================================================================

    #[test]
    fn test_fixed_holiday_on_a_weekday_does_not_move() {
        // 2023-07-04 is a Tuesday
        let date = independence_day(true)
            .resolve(2023, &WeekendRule::default())
            .unwrap();
        assert_eq!(date, ymd(2023, 7, 4));
    }

    #[test]
    fn test_fixed_holiday_on_weekend_start_slides_back() {
        // 2020-07-04 is a Saturday, the default weekend-start day
        let date = independence_day(true)
            .resolve(2020, &WeekendRule::default())
            .unwrap();
        assert_eq!(date, ymd(2020, 7, 3));
    }

    #[test]
    fn test_fixed_holiday_on_other_weekend_day_slides_forward() {
        // 2021-07-04 is a Sunday
        let date = independence_day(true)
            .resolve(2021, &WeekendRule::default())
            .unwrap();
        assert_eq!(date, ymd(2021, 7, 5));
    }

    #[test]
    fn test_fixed_holiday_without_adjust_stays_on_weekend() {
        let date = independence_day(false)
            .resolve(2020, &WeekendRule::default())
            .unwrap();
        assert_eq!(date, ymd(2020, 7, 4));
    }

    #[test]
    fn test_fixed_holiday_nonexistent_date_is_config_error() {
        let leap_only = HolidaySpec::Fixed {
            name: "Leap Day".to_string(),
            month: 2,
            day: 29,
            adjust_weekend: false,
        };
        // Fine on a leap year
        assert_eq!(
            leap_only.resolve(2024, &WeekendRule::default()).unwrap(),
            ymd(2024, 2, 29)
        );
        // A config error off one
        let err = leap_only.resolve(2023, &WeekendRule::default()).unwrap_err();
        assert!(err.to_string().contains("Leap Day"));
        assert!(err.to_string().contains("2023-02-29"));
    }

    // =========================================================================
    // Floating holidays
    // =========================================================================

    #[test]
    fn test_floating_holiday_first_monday_of_september() {
        let date = labor_day().resolve(2015, &WeekendRule::default()).unwrap();
        assert_eq!(date, ymd(2015, 9, 7));
    }

    #[test]
    fn test_floating_holiday_third_monday_matches_the_calendar() {
        let spec = HolidaySpec::Floating {
            name: "Third Monday".to_string(),
            month: 9,
            ordinal_week: 3,
            weekday: Weekday::Mon,
        };
        let date = spec.resolve(2024, &WeekendRule::default()).unwrap();
        assert_eq!(date, ymd(2024, 9, 16));
    }

    #[test]
    fn test_floating_holiday_never_slides_off_a_weekend() {
        // First Saturday of July 2023 is July 1, a weekend day; it stays put.
        let spec = HolidaySpec::Floating {
            name: "First Saturday".to_string(),
            month: 7,
            ordinal_week: 1,
            weekday: Weekday::Sat,
        };
        let date = spec.resolve(2023, &WeekendRule::default()).unwrap();
        assert_eq!(date, ymd(2023, 7, 1));
    }

    #[test]
    fn test_name_accessor_covers_both_kinds() {
        assert_eq!(independence_day(true).name(), "Independence Day");
        assert_eq!(labor_day().name(), "Labor Day");
    }

    #[test]
    fn test_spec_serialization_is_kind_tagged() {
        let json = serde_json::to_string(&independence_day(true)).unwrap();
        assert!(json.contains("\"kind\":\"fixed\""));
        assert!(json.contains("\"adjust_weekend\":true"));

        let back: HolidaySpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, independence_day(true));
    }
}

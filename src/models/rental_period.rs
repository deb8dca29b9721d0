//! Rental period model.
//!
//! A [`RentalPeriod`] is the classified form of a rental window: how many of
//! its days were weekdays, weekend days, and holidays.

use serde::{Deserialize, Serialize};

/// Day-kind counts for a rental window.
///
/// Produced by [`HolidayCalendar::classify_period`]; the three counters
/// partition the window, so they always sum to the rental day count.
///
/// [`HolidayCalendar::classify_period`]: crate::calendar::HolidayCalendar::classify_period
///
/// # Example
///
/// ```
/// use rental_engine::models::RentalPeriod;
///
/// let period = RentalPeriod {
///     weekdays: 3,
///     weekend_days: 2,
///     holidays: 0,
/// };
/// assert_eq!(period.total_days(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPeriod {
    /// Number of ordinary weekdays in the period.
    pub weekdays: u32,
    /// Number of weekend days in the period.
    pub weekend_days: u32,
    /// Number of holidays in the period.
    pub holidays: u32,
}

impl RentalPeriod {
    /// Returns the total number of days covered by the period.
    pub fn total_days(&self) -> u32 {
        self.weekdays + self.weekend_days + self.holidays
    }
}

//! Calendar and holiday classification for the Rental Agreement Engine.
//!
//! This module owns the holiday specifications, resolves them into concrete
//! dates per calendar year (with memoization), and classifies every day of a
//! rental window as weekday, weekend, or holiday.

mod calendar;
mod day_kind;
mod holiday_spec;

pub use calendar::{HolidayCalendar, WeekendRule};
pub use day_kind::DayKind;
pub use holiday_spec::HolidaySpec;

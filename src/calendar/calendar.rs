//! The holiday calendar: per-year holiday resolution, caching, and day
//! classification.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::RentalPeriod;

use super::day_kind::DayKind;
use super::holiday_spec::HolidaySpec;

/// The configured weekend: which weekdays count as weekend days, and which
/// of them starts the weekend.
///
/// The weekend-start day controls the slide direction for fixed holidays
/// with weekend adjustment: a holiday landing on the start day slides
/// backward (to the last preceding weekday), one landing on any other
/// weekend day slides forward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendRule {
    days: Vec<Weekday>,
    start: Weekday,
}

impl WeekendRule {
    /// Creates a weekend rule from the configured day set and start day.
    pub fn new(days: Vec<Weekday>, start: Weekday) -> Self {
        Self { days, start }
    }

    /// Returns true if the given weekday is a configured weekend day.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.days.contains(&weekday)
    }

    /// Returns the configured weekend-start day.
    pub fn start(&self) -> Weekday {
        self.start
    }
}

impl Default for WeekendRule {
    /// Saturday and Sunday, with Saturday starting the weekend.
    fn default() -> Self {
        Self {
            days: vec![Weekday::Sat, Weekday::Sun],
            start: Weekday::Sat,
        }
    }
}

/// Resolves holiday specifications per calendar year and classifies days.
///
/// Holiday dates for a year never change within a process run, so each
/// year's resolved set is computed once and memoized. The cache is the only
/// mutable state in the engine; it publishes an immutable snapshot per year
/// behind a read/write lock so the calendar can be shared across request
/// handlers.
///
/// # Example
///
/// ```
/// use rental_engine::calendar::{DayKind, HolidayCalendar, HolidaySpec, WeekendRule};
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::new(
///     vec![HolidaySpec::Fixed {
///         name: "Independence Day".to_string(),
///         month: 7,
///         day: 4,
///         adjust_weekend: true,
///     }],
///     WeekendRule::default(),
/// );
///
/// // 2020-07-04 is a Saturday, so the holiday slides to Friday the 3rd.
/// let friday = NaiveDate::from_ymd_opt(2020, 7, 3).unwrap();
/// assert_eq!(calendar.classify_day(friday).unwrap(), DayKind::Holiday);
/// ```
#[derive(Debug)]
pub struct HolidayCalendar {
    specs: Vec<HolidaySpec>,
    weekend: WeekendRule,
    // year -> resolved holiday dates, computed lazily and kept for the
    // process lifetime. Bounded by the number of distinct years queried.
    cache: RwLock<HashMap<i32, Arc<[NaiveDate]>>>,
}

impl HolidayCalendar {
    /// Creates a calendar from holiday specifications and a weekend rule.
    pub fn new(specs: Vec<HolidaySpec>, weekend: WeekendRule) -> Self {
        Self {
            specs,
            weekend,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the configured weekend rule.
    pub fn weekend(&self) -> &WeekendRule {
        &self.weekend
    }

    /// Returns the resolved holiday dates for a year, computing and caching
    /// them on first use.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if any spec fails to resolve for the
    /// year; nothing is cached in that case.
    pub fn holidays_for_year(&self, year: i32) -> EngineResult<Arc<[NaiveDate]>> {
        if let Some(holidays) = self
            .cache
            .read()
            .expect("holiday cache lock poisoned")
            .get(&year)
        {
            return Ok(Arc::clone(holidays));
        }

        let resolved: Arc<[NaiveDate]> = self
            .specs
            .iter()
            .map(|spec| spec.resolve(year, &self.weekend))
            .collect::<EngineResult<Vec<_>>>()?
            .into();

        // A concurrent racer may have inserted the same year already; both
        // computed the same dates, so either snapshot is fine.
        let mut cache = self.cache.write().expect("holiday cache lock poisoned");
        Ok(Arc::clone(
            cache.entry(year).or_insert(resolved),
        ))
    }

    /// Classifies a single day.
    ///
    /// Holiday takes priority over weekend: a resolved holiday that falls
    /// on a configured weekend day classifies as [`DayKind::Holiday`].
    pub fn classify_day(&self, date: NaiveDate) -> EngineResult<DayKind> {
        let holidays = self.holidays_for_year(date.year())?;
        Ok(classify(date, &holidays, &self.weekend))
    }

    /// Classifies each of `num_days` consecutive days starting at `start`
    /// (inclusive) and accumulates the day-kind counters.
    ///
    /// Every day of the window must be visited to determine its kind, so
    /// this is O(num_days); rental durations are small, human-entered
    /// numbers. The walk re-fetches the cached holiday set whenever it
    /// crosses into a new calendar year.
    pub fn classify_period(&self, start: NaiveDate, num_days: u32) -> EngineResult<RentalPeriod> {
        let mut weekdays = 0;
        let mut weekend_days = 0;
        let mut holidays = 0;

        let mut current = start;
        let mut current_year = start.year();
        let mut year_holidays = self.holidays_for_year(current_year)?;
        for _ in 0..num_days {
            match classify(current, &year_holidays, &self.weekend) {
                DayKind::Holiday => holidays += 1,
                DayKind::Weekend => weekend_days += 1,
                DayKind::Weekday => weekdays += 1,
            }
            current += chrono::Duration::days(1);
            if current.year() != current_year {
                current_year = current.year();
                year_holidays = self.holidays_for_year(current_year)?;
            }
        }

        Ok(RentalPeriod {
            weekdays,
            weekend_days,
            holidays,
        })
    }
}

/// Classifies one date against a year's resolved holidays and the weekend
/// rule. Holiday beats weekend beats weekday.
fn classify(date: NaiveDate, holidays: &[NaiveDate], weekend: &WeekendRule) -> DayKind {
    if holidays.contains(&date) {
        DayKind::Holiday
    } else if weekend.contains(date.weekday()) {
        DayKind::Weekend
    } else {
        DayKind::Weekday
    }
}

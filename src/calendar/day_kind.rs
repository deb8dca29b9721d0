//! Day classification kinds.

use serde::{Deserialize, Serialize};

/// The billing classification of a single calendar day.
///
/// Determines whether a day counts toward the bill for a given tool type.
/// Holiday takes precedence over weekend when a resolved holiday falls on a
/// configured weekend day.
///
/// # Example
///
/// ```
/// use rental_engine::calendar::DayKind;
///
/// let kind = DayKind::Holiday;
/// assert_eq!(format!("{:?}", kind), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// An ordinary weekday.
    Weekday,
    /// A configured weekend day (Saturday/Sunday by default).
    Weekend,
    /// A resolved holiday, regardless of which weekday it lands on.
    Holiday,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::Weekend => write!(f, "Weekend"),
            DayKind::Holiday => write!(f, "Holiday"),
        }
    }
}

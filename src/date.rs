use serde::{Deserialize, Serialize};

use crate::{CalendarError, Day, Month, MonthSelector, Weekday, is_leap_year, weekday_of};

/// A validated proleptic Gregorian calendar date.
/// Fields are ordered so the derived ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateFields", into = "DateFields")]
pub struct Date {
    year:  i32,
    month: Month,
    day:   Day,
}

/// Unvalidated wire shape of a [`Date`].
#[derive(Serialize, Deserialize)]
struct DateFields {
    year:  i32,
    month: i32,
    day:   i32,
}

impl Date {
    /// Creates a new date, validating the month and the day within it.
    ///
    /// # Errors
    /// Returns the month selector's error, or `CalendarError::InvalidDay` if
    /// the day does not exist in that month and year.
    pub fn new(year: i32, month: impl MonthSelector, day: i32) -> Result<Self, CalendarError> {
        let month = month.resolve_month()?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Day of the week this date falls on
    pub fn weekday(&self) -> Weekday {
        weekday_of(self.year, self.month, self.day)
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        self.month.days_in(self.year)
    }
}

impl TryFrom<DateFields> for Date {
    type Error = CalendarError;

    fn try_from(fields: DateFields) -> Result<Self, Self::Error> {
        Self::new(fields.year, fields.month, fields.day)
    }
}

impl From<Date> for DateFields {
    fn from(date: Date) -> Self {
        Self {
            year:  date.year,
            month: i32::from(date.month.get()),
            day:   i32::from(date.day.get()),
        }
    }
}

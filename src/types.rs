use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAY_NAMES, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH, MONTH_NAMES,
    MONTH_OFFSETS_COMMON, MONTH_OFFSETS_LEAP,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;
use tracing::debug;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        match NonZeroU8::new(value) {
            Some(non_zero) if value <= MAX_MONTH => Ok(Self(non_zero)),
            _ => Err(reject_month(i32::from(value))),
        }
    }

    /// Looks up a month by its English name, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonthName` if no month has that name.
    pub fn from_name(name: &str) -> Result<Self, CalendarError> {
        let Some((number, _)) = (JANUARY..=MAX_MONTH)
            .zip(MONTH_NAMES)
            .find(|(_, candidate)| candidate.eq_ignore_ascii_case(name))
        else {
            debug!(month_name = name, "rejected month name");
            return Err(CalendarError::InvalidMonthName(name.to_owned()));
        };
        Self::new(number)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }

    /// Number of days in this month for the given year
    pub const fn days_in(self, year: i32) -> u8 {
        if self.get() == FEBRUARY && is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.get() as usize]
        }
    }

    /// Days elapsed in the year before the first of this month, modulo 7
    pub const fn offset_in(self, year: i32) -> u8 {
        if is_leap_year(year) {
            MONTH_OFFSETS_LEAP[self.index()]
        } else {
            MONTH_OFFSETS_COMMON[self.index()]
        }
    }

    /// Zero-based position, for indexing the per-month tables
    const fn index(self) -> usize {
        (self.get() - JANUARY) as usize
    }
}

fn reject_month(value: i32) -> CalendarError {
    debug!(month = value, "rejected month number");
    CalendarError::InvalidMonth(value)
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for Month {
    type Error = CalendarError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| reject_month(value))
            .and_then(Self::new)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl FromStr for Month {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A day-of-month value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it lies in `1..=month.days_in(year)`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is out of range for the given year and month.
    pub fn new(value: i32, year: i32, month: Month) -> Result<Self, CalendarError> {
        u8::try_from(value)
            .ok()
            .filter(|&day| day <= month.days_in(year))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or_else(|| {
                debug!(year, month = month.get(), day = value, "rejected day of month");
                CalendarError::InvalidDay {
                    year,
                    month: month.get(),
                    day: value,
                }
            })
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate against a month without context, so accept 1..=31
        NonZeroU8::new(value)
            .filter(|day| day.get() <= MAX_DAY)
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                year:  0,
                month: 0,
                day:   i32::from(value),
            })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

/// Day of the week, numbered from Sunday = 0 to Saturday = 6.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order, starting with Sunday
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Maps any integer onto a weekday with floored modulo 7,
    /// so -1 is Saturday and 7 is Sunday again.
    pub const fn from_index(value: i64) -> Self {
        match value.rem_euclid(DAYS_PER_WEEK) {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }

    /// Returns the index in `0..=6`, Sunday being 0
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of the weekday
    pub const fn name(self) -> &'static str {
        DAY_NAMES[self as usize]
    }
}

/// Anything that can name a month: a [`Month`], its number, or its English name.
///
/// `None` stands for an absent name and never resolves.
pub trait MonthSelector {
    /// Resolves the selector to a validated month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for numbers outside 1-12 and
    /// `CalendarError::InvalidMonthName` for unknown or absent names.
    fn resolve_month(self) -> Result<Month, CalendarError>;
}

impl MonthSelector for Month {
    fn resolve_month(self) -> Result<Month, CalendarError> {
        Ok(self)
    }
}

impl MonthSelector for i32 {
    fn resolve_month(self) -> Result<Month, CalendarError> {
        Month::try_from(self)
    }
}

impl MonthSelector for &str {
    fn resolve_month(self) -> Result<Month, CalendarError> {
        Month::from_name(self)
    }
}

impl MonthSelector for &String {
    fn resolve_month(self) -> Result<Month, CalendarError> {
        Month::from_name(self)
    }
}

impl MonthSelector for String {
    fn resolve_month(self) -> Result<Month, CalendarError> {
        Month::from_name(&self)
    }
}

impl<T: MonthSelector> MonthSelector for Option<T> {
    fn resolve_month(self) -> Result<Month, CalendarError> {
        self.map_or_else(
            || {
                debug!("rejected absent month name");
                Err(CalendarError::InvalidMonthName(String::new()))
            },
            T::resolve_month,
        )
    }
}

// Helper functions

/// Proleptic Gregorian leap-year rule, applied to any year including 0 and negatives.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

//! Gregorian calendar facts by closed-form arithmetic.
//!
//! The typed functions here return [`CalendarError`] on bad input; the
//! [`sentinel`] module exposes the same operations with `-1` / `""` results.
#![doc = include_str!("../README.md")]

mod consts;
mod date;
mod prelude;
pub mod sentinel;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
use consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
pub use date::Date;
pub use types::{Day, Month, MonthSelector, Weekday, is_leap_year};

/// Error type for calendar queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month number outside 1-12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i32),

    /// Day of month outside the range for that month and year.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: i32 },

    /// Unrecognized month name. An absent name is reported as empty.
    #[error("Invalid month name: {0:?}")]
    InvalidMonthName(String),
}

/// Name of the weekday for any integer, wrapping with floored modulo 7.
pub fn name_of_day(day_value: i32) -> &'static str {
    Weekday::from_index(i64::from(day_value)).name()
}

/// Month number (1-12) for a case-insensitive English month name.
///
/// # Errors
/// Returns `CalendarError::InvalidMonthName` if the name is not a month.
pub fn month_number(name: &str) -> Result<u8, CalendarError> {
    Month::from_name(name).map(Month::get)
}

/// English name of the month numbered `month`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is outside 1-12.
pub fn month_name(month: i32) -> Result<&'static str, CalendarError> {
    Month::try_from(month).map(Month::name)
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns the selector's error if `month` does not resolve.
pub fn days_in_month(month: impl MonthSelector, year: i32) -> Result<u8, CalendarError> {
    Ok(month.resolve_month()?.days_in(year))
}

/// Weekday shift of the first of `month` relative to January 1st of `year`.
///
/// # Errors
/// Returns the selector's error if `month` does not resolve.
pub fn month_offset(month: impl MonthSelector, year: i32) -> Result<u8, CalendarError> {
    Ok(month.resolve_month()?.offset_in(year))
}

/// Day of the week `day_of_month` of `month` falls on in `year`.
///
/// # Errors
/// Returns the selector's error if `month` does not resolve, or
/// `CalendarError::InvalidDay` if the day does not exist in that month.
pub fn day_of_week(
    month: impl MonthSelector,
    day_of_month: i32,
    year: i32,
) -> Result<Weekday, CalendarError> {
    let month = month.resolve_month()?;
    let day = Day::new(day_of_month, year, month)?;
    Ok(weekday_of(year, month, day))
}

/// Weekday of an already validated date.
pub(crate) fn weekday_of(year: i32, month: Month, day: Day) -> Weekday {
    let elapsed = i64::from(month.offset_in(year)) + i64::from(day.get()) - 1;
    Weekday::from_index(i64::from(jan1_weekday(year).index()) + elapsed)
}

/// Weekday of January 1st:
/// `(n + ⌊(n-1)/4⌋ - ⌊(n-1)/100⌋ + ⌊(n-1)/400⌋) mod 7` with floored division.
pub(crate) fn jan1_weekday(year: i32) -> Weekday {
    let n = i64::from(year);
    let prior = n - 1;
    Weekday::from_index(
        n + prior.div_euclid(i64::from(LEAP_YEAR_CYCLE)) - prior.div_euclid(i64::from(CENTURY_CYCLE))
            + prior.div_euclid(i64::from(GREGORIAN_CYCLE)),
    )
}

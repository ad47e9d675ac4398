//! Sentinel-valued calendar queries.
//!
//! Same operations as the crate root, but failures come back as [`SENTINEL`]
//! (`-1`) for numbers and `""` for names. Numeric and named months share one
//! function through [`MonthSelector`]; `None::<&str>` stands for an absent name.

use crate::{MonthSelector, SENTINEL};

/// True for proleptic Gregorian leap years
pub const fn is_leap_year(year: i32) -> bool {
    crate::is_leap_year(year)
}

/// Weekday name for any integer, 0 being Sunday, wrapping in both directions
pub fn name_of_day(day_value: i32) -> &'static str {
    crate::name_of_day(day_value)
}

/// Month number 1-12 for a case-insensitive name, or -1 for an unknown or absent name
pub fn month_number<'a>(name: impl Into<Option<&'a str>>) -> i32 {
    name.into()
        .resolve_month()
        .map_or(SENTINEL, |month| i32::from(month.get()))
}

/// Month name for 1-12, or `""`
pub fn month_name(month: i32) -> &'static str {
    crate::month_name(month).unwrap_or_default()
}

/// Days in the month, or -1 for an invalid month number or name
pub fn days_in_month(month: impl MonthSelector, year: i32) -> i32 {
    crate::days_in_month(month, year).map_or(SENTINEL, i32::from)
}

/// Month offset 0-6, or -1 for an invalid month
pub fn month_offset(month: impl MonthSelector, year: i32) -> i32 {
    crate::month_offset(month, year).map_or(SENTINEL, i32::from)
}

/// Weekday index 0-6 (Sunday = 0), or -1 for an invalid month or day
pub fn day_of_week(month: impl MonthSelector, day_of_month: i32, year: i32) -> i32 {
    crate::day_of_week(month, day_of_month, year).map_or(SENTINEL, |day| i32::from(day.index()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_map_to_sentinels() {
        assert_eq!(month_number(""), SENTINEL);
        assert_eq!(month_number(None::<&str>), SENTINEL);
        assert_eq!(month_number(Some("March")), 3);
        assert_eq!(month_name(-1), "");
        assert_eq!(days_in_month(0, 2024), SENTINEL);
        assert_eq!(days_in_month(None::<&str>, 2024), SENTINEL);
        assert_eq!(month_offset(13, 2024), SENTINEL);
        assert_eq!(month_offset("", 2024), SENTINEL);
        assert_eq!(day_of_week(1, 32, 2024), SENTINEL);
        assert_eq!(day_of_week(None::<&str>, 1, 2024), SENTINEL);
    }

    #[test]
    fn test_invalid_name_roundtrips_to_sentinel() {
        assert_eq!(month_number(month_name(SENTINEL)), SENTINEL);
    }

    #[test]
    fn test_successes_pass_through() {
        assert!(is_leap_year(2024));
        assert_eq!(name_of_day(3), "Wednesday");
        assert_eq!(month_number("mAy"), 5);
        assert_eq!(month_name(5), "May");
        assert_eq!(days_in_month("May", 2024), 31);
        assert_eq!(month_offset(5, 2024), 2);
        assert_eq!(day_of_week("May", 1, 2024), 3);
    }
}

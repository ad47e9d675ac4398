/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Longest month length, the context-free upper bound for a day
pub const MAX_DAY: u8 = 31;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Number of days in a week
pub const DAYS_PER_WEEK: i64 = 7;

/// Returned by the `sentinel` API in place of an error
pub const SENTINEL: i32 = -1;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names, index 0 is January
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, index 0 is Sunday
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Weekday shift of the first of each month relative to January 1st in a
/// common year, index 0 is January
pub const MONTH_OFFSETS_COMMON: [u8; 12] = month_offsets(false);

/// Weekday shift of the first of each month relative to January 1st in a
/// leap year, index 0 is January
pub const MONTH_OFFSETS_LEAP: [u8; 12] = month_offsets(true);

/// Cumulative days before each month, reduced modulo 7.
#[allow(clippy::cast_possible_truncation)]
const fn month_offsets(leap: bool) -> [u8; 12] {
    let mut offsets = [0u8; 12];
    let mut elapsed: u16 = 0;
    let mut month = JANUARY as usize;
    while month <= MAX_MONTH as usize {
        offsets[month - 1] = (elapsed % DAYS_PER_WEEK as u16) as u8;
        elapsed += DAYS_IN_MONTH[month] as u16;
        if leap && month == FEBRUARY as usize {
            elapsed += 1;
        }
        month += 1;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_offsets_common_table() {
        assert_eq!(MONTH_OFFSETS_COMMON, [0, 3, 3, 6, 1, 4, 6, 2, 5, 0, 3, 5]);
    }

    #[test]
    fn test_month_offsets_leap_table() {
        assert_eq!(MONTH_OFFSETS_LEAP, [0, 3, 4, 0, 2, 5, 0, 3, 6, 1, 4, 6]);
    }

    #[test]
    fn test_days_in_month_sum_to_common_year() {
        let total: u16 = DAYS_IN_MONTH.iter().map(|&d| u16::from(d)).sum();
        assert_eq!(total, 365);
    }
}

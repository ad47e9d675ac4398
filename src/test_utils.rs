use crate::{Date, Month};

pub fn month(value: u8) -> Month {
    Month::new(value).unwrap()
}

pub fn date(year: i32, month: i32, day: i32) -> Date {
    Date::new(year, month, day).unwrap()
}

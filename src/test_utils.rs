//! Builders shared by unit tests.

use chrono::{DateTime, FixedOffset, NaiveDate};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Noon UTC on the given Gregorian day, as a fixed-offset instant.
pub fn noon_utc(year: i32, month: u32, day: u32) -> DateTime<FixedOffset> {
    date(year, month, day).and_hms_opt(12, 0, 0).unwrap().and_utc().fixed_offset()
}

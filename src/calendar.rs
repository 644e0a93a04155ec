//! Epoch-anchored cycle arithmetic between Gregorian and Javanese dates.
//!
//! All positions are counted in whole days from [`ANCHOR`]. The pasaran and
//! wuku follow directly from that offset; the Javanese year, month and day
//! are found by walking whole years of the windu pattern away from the
//! anchor year.

use crate::consts::{
    ANCHOR, DINA_CYCLE, KABISAT_YEAR_DAYS, PASARAN_CALIBRATION, WASTU_YEAR_DAYS, WINDU_CYCLE,
    WINDU_DAYS, WUKU_CALIBRATION, WUKU_WEEK_CALIBRATION,
};
use crate::error::ConvertError;
use crate::types::{Dina, Pasaran, Taun, Wuku, Wulan};
use chrono::{Datelike, NaiveDate};
use tracing::trace;

/// Calendar fields derived from a single Gregorian day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Reckoning {
    pub day:     u8,
    pub dina:    Dina,
    pub pasaran: Pasaran,
    pub wulan:   Wulan,
    pub year:    i32,
    pub taun:    Taun,
    pub wuku:    Wuku,
    pub neptu:   u8,
}

/// Position of `year` within the windu, relative to the anchor year.
pub fn windu_phase(year: i32) -> usize {
    (i64::from(year) - i64::from(ANCHOR.year)).rem_euclid(WINDU_CYCLE) as usize
}

/// Number of days in Javanese `year` (354 or 355).
pub fn year_length(year: i32) -> u16 {
    ANCHOR.windu_pattern[windu_phase(year)]
}

/// Whether Javanese `year` is kabisat (355 days).
pub fn is_kabisat(year: i32) -> bool {
    year_length(year) != WASTU_YEAR_DAYS
}

/// Month lengths of a year, Sura first.
pub fn month_lengths(kabisat: bool) -> [u16; 12] {
    Wulan::ALL.map(|wulan| wulan.length(kabisat))
}

/// Signed whole-day distance from the anchor date to `date`.
pub(crate) fn days_from_anchor(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(ANCHOR.days_from_ce)
}

/// Derives every Javanese field of a Gregorian day.
pub(crate) fn reckon(date: NaiveDate) -> Reckoning {
    let delta = days_from_anchor(date);

    let dina = Dina::wrapping(i64::from(date.weekday().num_days_from_sunday()));
    let pasaran = Pasaran::wrapping(PASARAN_CALIBRATION + delta);
    let wuku_weeks = (delta + WUKU_WEEK_CALIBRATION).div_euclid(DINA_CYCLE);
    let wuku = Wuku::wrapping(WUKU_CALIBRATION + wuku_weeks);

    let mut running = i64::from(ANCHOR.day_of_year) + delta;
    let mut year = ANCHOR.year;
    let mut phase = 0_usize;
    loop {
        let length = i64::from(ANCHOR.windu_pattern[phase]);
        if running > length {
            running -= length;
            year += 1;
            phase = (phase + 1) % ANCHOR.windu_pattern.len();
        } else if running <= 0 {
            phase = (phase + ANCHOR.windu_pattern.len() - 1) % ANCHOR.windu_pattern.len();
            year -= 1;
            running += i64::from(ANCHOR.windu_pattern[phase]);
        } else {
            break;
        }
    }
    trace!(%date, delta, year, day_of_year = running, "resolved javanese year");

    let kabisat = ANCHOR.windu_pattern[phase] == KABISAT_YEAR_DAYS;
    let mut wulan = Wulan::Sura;
    for (candidate, length) in Wulan::ALL.into_iter().zip(month_lengths(kabisat)) {
        wulan = candidate;
        if running <= i64::from(length) {
            break;
        }
        running -= i64::from(length);
    }

    Reckoning {
        day: running as u8,
        dina,
        pasaran,
        wulan,
        year,
        taun: Taun::ALL[phase],
        wuku,
        neptu: dina.neptu() + pasaran.neptu(),
    }
}

/// Gregorian date of Javanese `day` `wulan` `year`.
///
/// `day` is not checked against the month length; an overlong day simply
/// runs into the following month.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` if the result is not a representable
/// Gregorian date.
pub fn to_gregorian(year: i32, wulan: Wulan, day: u8) -> Result<NaiveDate, ConvertError> {
    // Whole windus first, then the leading years of the last one.
    let years = i64::from(year) - i64::from(ANCHOR.year);
    let phase = years.rem_euclid(WINDU_CYCLE) as usize;
    let mut total = years.div_euclid(WINDU_CYCLE) * WINDU_DAYS
        + ANCHOR.windu_pattern[..phase]
            .iter()
            .map(|&length| i64::from(length))
            .sum::<i64>();

    total += month_lengths(is_kabisat(year))[..wulan.index()]
        .iter()
        .map(|&length| i64::from(length))
        .sum::<i64>();
    total += i64::from(day);

    let offset = total - i64::from(ANCHOR.day_of_year);
    let out_of_range = || ConvertError::OutOfRange { year, wulan, day };
    let days_from_ce =
        i32::try_from(i64::from(ANCHOR.days_from_ce) + offset).map_err(|_| out_of_range())?;
    NaiveDate::from_num_days_from_ce_opt(days_from_ce).ok_or_else(out_of_range)
}

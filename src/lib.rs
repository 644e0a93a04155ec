//! Conversion between Gregorian instants and the Javanese calendar.
//!
//! A [`JavaneseDate`] is built from any `chrono` instant and carries every
//! derived field at once: the weton (dina and pasaran), the lunar day, month
//! and year, the windu year name, the wuku, the neptu, the solar season
//! (mongso) and the period of the day (wektu).
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tanggalan::{Dina, JavaneseDate, Pasaran, Wulan};
//!
//! let date = JavaneseDate::new(Utc.with_ymd_and_hms(2022, 1, 1, 12, 0, 0).unwrap());
//! assert_eq!(date.dina(), Dina::Setu);
//! assert_eq!(date.pasaran(), Pasaran::Pahing);
//! assert_eq!((date.day(), date.wulan(), date.year()), (28, Wulan::Jumadilawal, 1955));
//! assert_eq!(date.format("D P, dd M yyyy"), "Setu Pahing, 28 Jumadilawal 1955");
//! ```

mod calendar;
mod consts;
mod error;
mod layout;
mod prelude;
mod season;
mod types;
mod weton;

#[cfg(test)]
mod test_utils;

pub use calendar::{is_kabisat, month_lengths, to_gregorian, windu_phase, year_length};
pub use consts::*;
pub use error::{ConvertError, ParseError, UnknownNameError, WetonError};
pub use season::{mongso, wektu};
pub use types::{Dina, Mongso, Pasaran, Taun, Wektu, Wuku, Wulan};
pub use weton::Weton;

use crate::prelude::*;
use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDateTime, NaiveTime, TimeZone, Timelike,
};
use serde::{Deserialize, Serialize};

/// A Gregorian instant together with its Javanese reckoning.
///
/// Every field is derived from the instant when the value is built; the
/// calendar date follows the instant's own wall clock, so the same moment
/// seen from different offsets can fall on different Javanese days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{dina} {pasaran}, {day} {wulan} {year} Ja, {wektu}")]
#[serde(from = "RawJavaneseDate")]
pub struct JavaneseDate {
    gregorian: DateTime<FixedOffset>,
    day:       u8,
    dina:      Dina,
    pasaran:   Pasaran,
    wulan:     Wulan,
    year:      i32,
    taun:      Taun,
    wuku:      Wuku,
    neptu:     u8,
    mongso:    Mongso,
    wektu:     Wektu,
}

/// Serialized form read back by `Deserialize`; derived fields are recomputed.
#[derive(Deserialize)]
struct RawJavaneseDate {
    gregorian: DateTime<FixedOffset>,
}

impl From<RawJavaneseDate> for JavaneseDate {
    fn from(raw: RawJavaneseDate) -> Self {
        Self::new(raw.gregorian)
    }
}

impl JavaneseDate {
    /// Reckons the Javanese fields of `instant`, keeping its offset.
    pub fn new<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        let gregorian = instant.fixed_offset();
        let reckoning = calendar::reckon(gregorian.date_naive());

        Self {
            gregorian,
            day: reckoning.day,
            dina: reckoning.dina,
            pasaran: reckoning.pasaran,
            wulan: reckoning.wulan,
            year: reckoning.year,
            taun: reckoning.taun,
            wuku: reckoning.wuku,
            neptu: reckoning.neptu,
            mongso: season::mongso(gregorian.month(), gregorian.day()),
            wektu: season::wektu(gregorian.hour(), gregorian.minute()),
        }
    }

    /// The current moment in the local time zone.
    pub fn now() -> Self {
        Self::new(Local::now())
    }

    /// Builds the date at `time` on Javanese `day` `wulan` `year`, read in
    /// `offset`.
    ///
    /// # Errors
    /// Returns `ConvertError::OutOfRange` if the day has no Gregorian
    /// counterpart.
    pub fn from_javanese(
        year: i32,
        wulan: Wulan,
        day: u8,
        time: NaiveTime,
        offset: FixedOffset,
    ) -> Result<Self, ConvertError> {
        let naive = to_gregorian(year, wulan, day)?.and_time(time);
        let instant = naive
            .and_local_timezone(offset)
            .single()
            .ok_or(ConvertError::OutOfRange { year, wulan, day })?;
        Ok(Self::new(instant))
    }

    /// Parses `value` against `layout`. See [`format`](Self::format) for the
    /// tokens; `MS`, `WK`, `T`, `W` and `N` are only rendered and match as
    /// literal text here. Without a `Z` token the local time zone is used.
    ///
    /// # Errors
    /// Returns `ParseError` if the value does not match the layout, a
    /// required field is missing or invalid, or a captured dina or pasaran
    /// name disagrees with the resulting date.
    pub fn parse_from_str(value: &str, layout: &str) -> Result<Self, ParseError> {
        layout::parse(value, layout)
    }

    /// Renders the date through `layout`, replacing whole-word tokens:
    /// `yyyy`, `mm`, `m`, `dd`, `d`, `HH`, `MM`, `SS`, `Z`, `M` (month name),
    /// `D` (dina), `P` (pasaran), `N` (neptu), `W` (wuku), `T` (windu year),
    /// `MS` (mongso) and `WK` (wektu). Other text is copied unchanged.
    pub fn format(&self, layout: &str) -> String {
        layout::render(self, layout)
    }

    /// The underlying Gregorian instant
    pub fn gregorian(&self) -> DateTime<FixedOffset> {
        self.gregorian
    }

    /// Day of the Javanese month, 1-30
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn dina(&self) -> Dina {
        self.dina
    }

    pub fn pasaran(&self) -> Pasaran {
        self.pasaran
    }

    pub fn weton(&self) -> Weton {
        Weton::new(self.dina, self.pasaran)
    }

    pub fn wulan(&self) -> Wulan {
        self.wulan
    }

    /// Javanese year number
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Name of the year within the windu
    pub fn taun(&self) -> Taun {
        self.taun
    }

    pub fn wuku(&self) -> Wuku {
        self.wuku
    }

    /// Combined dina and pasaran weight, 7-18
    pub fn neptu(&self) -> u8 {
        self.neptu
    }

    pub fn mongso(&self) -> Mongso {
        self.mongso
    }

    pub fn wektu(&self) -> Wektu {
        self.wektu
    }

    pub fn hour(&self) -> u32 {
        self.gregorian.hour()
    }

    pub fn minute(&self) -> u32 {
        self.gregorian.minute()
    }

    pub fn second(&self) -> u32 {
        self.gregorian.second()
    }

    /// Whether the Javanese year has 355 days
    pub fn is_kabisat(&self) -> bool {
        calendar::is_kabisat(self.year)
    }

    pub fn year_length(&self) -> u16 {
        calendar::year_length(self.year)
    }
}

impl From<NaiveDateTime> for JavaneseDate {
    /// Reads a naive date-time as UTC.
    fn from(naive: NaiveDateTime) -> Self {
        Self::new(naive.and_utc())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for JavaneseDate {
    fn from(instant: DateTime<Tz>) -> Self {
        Self::new(instant)
    }
}

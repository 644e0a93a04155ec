use crate::consts::{DINA_CYCLE, PASARAN_CYCLE, WETON_CYCLE};
use crate::error::{ConvertError, WetonError};
use crate::prelude::*;
use crate::types::{Dina, Pasaran};
use crate::JavaneseDate;
use chrono::TimeDelta;
use std::str::FromStr;
use tracing::debug;

/// A day's combined position in the week and the pasaran cycle.
/// The pair repeats every 35 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{dina} {pasaran}")]
pub struct Weton {
    pub dina:    Dina,
    pub pasaran: Pasaran,
}

impl Weton {
    pub const fn new(dina: Dina, pasaran: Pasaran) -> Self {
        Self { dina, pasaran }
    }

    /// Sum of the dina and pasaran weights, always within 7..=18
    pub const fn neptu(self) -> u8 {
        self.dina.neptu() + self.pasaran.neptu()
    }

    /// Days from a day with this weton to the next day with `target`.
    /// Always in `1..=35`; a target equal to `self` is a full cycle away.
    pub fn days_until(self, target: Self) -> i64 {
        let current_dina = self.dina.index() as i64;
        let current_pasaran = self.pasaran.index() as i64;

        let mut days = (target.dina.index() as i64 - current_dina).rem_euclid(DINA_CYCLE);
        if days <= 0 {
            days += DINA_CYCLE;
        }
        // 7 and 5 are coprime, so one of the first five matching weekdays hits
        while days < WETON_CYCLE
            && (current_pasaran + days).rem_euclid(PASARAN_CYCLE) != target.pasaran.index() as i64
        {
            days += DINA_CYCLE;
        }
        days
    }
}

impl FromStr for Weton {
    type Err = WetonError;

    /// Parses `"Dina Pasaran"`, e.g. `"Setu Pahing"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [dina, pasaran] = parts.as_slice() else {
            return Err(WetonError::InvalidPhrase(s.to_owned()));
        };

        let dina = Dina::from_name(dina).ok_or_else(|| WetonError::UnknownDina((*dina).to_owned()))?;
        let pasaran = Pasaran::from_name(pasaran)
            .ok_or_else(|| WetonError::UnknownPasaran((*pasaran).to_owned()))?;

        Ok(Self { dina, pasaran })
    }
}

impl JavaneseDate {
    /// Finds the next date, strictly after this one, whose weton is `weton`
    /// (e.g. `"Setu Pahing"`). The time of day and offset are kept.
    ///
    /// # Errors
    /// Returns `WetonError` if the phrase is not a known `"Dina Pasaran"`
    /// pair, or if the result falls outside the supported range.
    pub fn next_weton(&self, weton: &str) -> Result<Self, WetonError> {
        let target: Weton = weton.parse()?;
        self.next_occurrence(target)
    }

    /// Same as [`next_weton`](Self::next_weton) with an already resolved target.
    ///
    /// # Errors
    /// Returns `WetonError::Convert` if the result falls outside the supported range.
    pub fn next_occurrence(&self, target: Weton) -> Result<Self, WetonError> {
        let days = self.weton().days_until(target);
        debug!(from = %self.weton(), to = %target, days, "resolved next weton");

        let next = self
            .gregorian()
            .checked_add_signed(TimeDelta::days(days))
            .ok_or(ConvertError::OutOfRange {
                year: self.year(),
                wulan: self.wulan(),
                day: self.day(),
            })?;
        Ok(Self::new(next))
    }
}

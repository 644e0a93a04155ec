//! Solar season (mongso) and time-of-day (wektu) lookups.
//!
//! Both depend only on the Gregorian wall clock of an instant, never on the
//! lunar reckoning.

use crate::types::{Mongso, Wektu};

/// Inclusive `month * 100 + day` ranges of each season, checked in order.
/// Kapitu wraps across the new year.
const MONGSO_RANGES: [(u32, u32, Mongso); 12] = [
    (622, 801, Mongso::Kasa),
    (802, 824, Mongso::Karo),
    (825, 917, Mongso::Katelu),
    (918, 1012, Mongso::Kapat),
    (1013, 1108, Mongso::Kalima),
    (1109, 1221, Mongso::Kanem),
    (1222, 202, Mongso::Kapitu),
    (203, 229, Mongso::Kawolu),
    (301, 325, Mongso::Kasanga),
    (326, 418, Mongso::Kasadasa),
    (419, 511, Mongso::Desta),
    (512, 621, Mongso::Sada),
];

/// Half-open `[start, end)` ranges over fractional hours, checked in order.
/// Tengah Wengi wraps past midnight.
const WEKTU_RANGES: [(f64, f64, Wektu); 16] = [
    (3.5, 4.5, Wektu::Fajar),
    (4.5, 5.5, Wektu::SaputLemah),
    (5.5, 6.5, Wektu::Byar),
    (6.5, 9.0, Wektu::Enjing),
    (9.0, 11.0, Wektu::Gumatel),
    (11.0, 12.0, Wektu::Tengange),
    (12.0, 13.0, Wektu::Bedhug),
    (13.0, 15.0, Wektu::LingsirKulon),
    (15.0, 16.5, Wektu::Ngasar),
    (16.5, 17.5, Wektu::TunggangGunung),
    (17.5, 18.5, Wektu::Surup),
    (18.5, 19.5, Wektu::BakdaMaghrib),
    (19.5, 21.0, Wektu::Isya),
    (21.0, 23.0, Wektu::SirepBocah),
    (23.0, 1.0, Wektu::TengahWengi),
    (1.0, 3.5, Wektu::LingsirWengi),
];

/// Season containing Gregorian `month` (1-12) and `day`.
/// Falls back to Kapitu, which the table never needs.
pub fn mongso(month: u32, day: u32) -> Mongso {
    let code = month * 100 + day;
    MONGSO_RANGES
        .iter()
        .find(|&&(start, end, _)| in_season(start, end, code))
        .map_or(Mongso::Kapitu, |&(_, _, season)| season)
}

/// Period of the day containing `hour:minute`. Seconds do not matter.
/// Falls back to Tengah Wengi, which the table never needs.
pub fn wektu(hour: u32, minute: u32) -> Wektu {
    let t = f64::from(hour) + f64::from(minute) / 60.0;
    WEKTU_RANGES
        .iter()
        .find(|&&(start, end, _)| in_period(start, end, t))
        .map_or(Wektu::TengahWengi, |&(_, _, period)| period)
}

fn in_season(start: u32, end: u32, code: u32) -> bool {
    if start <= end {
        (start..=end).contains(&code)
    } else {
        code >= start || code <= end
    }
}

fn in_period(start: f64, end: f64, t: f64) -> bool {
    if start < end {
        (start..end).contains(&t)
    } else {
        t >= start || t < end
    }
}

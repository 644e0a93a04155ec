use crate::consts::{
    DINA_CYCLE, DINA_NAMES, LONG_MONTH_DAYS, MONGSO_NAMES, NEPTU_DINA, NEPTU_PASARAN,
    PASARAN_CYCLE, PASARAN_NAMES, SHORT_MONTH_DAYS, TAUN_NAMES, WEKTU_NAMES, WINDU_CYCLE,
    WULAN_NAMES, WUKU_CYCLE, WUKU_NAMES,
};
use crate::error::UnknownNameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a named cycle: an enum whose variants follow the order of a name
/// table, with index and name conversions in both directions.
macro_rules! named_cycle {
    (
        $(#[$meta:meta])*
        $ty:ident => $names:ident { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $ty {
            $($variant),+
        }

        impl $ty {
            /// Every position of the cycle, in table order
            pub const ALL: [Self; $names.len()] = [$(Self::$variant),+];

            /// Zero-based position within the cycle
            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Canonical spelling
            #[inline]
            pub const fn name(self) -> &'static str {
                $names[self as usize]
            }

            /// Returns the entry at `index`, or `None` past the end of the table
            pub fn from_index(index: usize) -> Option<Self> {
                Self::ALL.get(index).copied()
            }

            /// Case-insensitive exact lookup, ignoring surrounding whitespace
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim();
                Self::ALL.into_iter().find(|entry| entry.name().eq_ignore_ascii_case(name))
            }

            /// Entry at a signed position, wrapped into the cycle
            pub fn wrapping(position: i64) -> Self {
                Self::ALL[position.rem_euclid(Self::ALL.len() as i64) as usize]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| UnknownNameError {
                    kind: stringify!($ty),
                    name: s.to_owned(),
                })
            }
        }

        impl TryFrom<String> for $ty {
            type Error = UnknownNameError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.name().to_owned()
            }
        }
    };
}

named_cycle! {
    /// Day of the civil seven-day week, Sunday first.
    Dina => DINA_NAMES { Minggu, Senen, Selasa, Rebo, Kemis, Jemuah, Setu }
}

named_cycle! {
    /// Day of the five-day market cycle.
    Pasaran => PASARAN_NAMES { Legi, Pahing, Pon, Wage, Kliwon }
}

named_cycle! {
    /// Javanese lunar month.
    Wulan => WULAN_NAMES {
        Sura, Sapar, Mulud, BakdaMulud, Jumadilawal, Jumadilakir,
        Rejeb, Ruwah, Pasa, Sawal, Sela, Besar,
    }
}

named_cycle! {
    /// Name of a year by its position in the eight-year windu.
    Taun => TAUN_NAMES { Alip, Ehe, Jimawal, Je, Dal, Be, Wawu, Jimakir }
}

named_cycle! {
    /// One of the thirty seven-day weeks of the pawukon.
    Wuku => WUKU_NAMES {
        Sinta, Landep, Wukir, Kurantil, Tolu,
        Gumbreg, Warigalit, Warigagung, Julungwangi, Sungsang,
        Galungan, Kuningan, Langkir, Mandasiya, Julungpujut,
        Pahang, Kuruwelut, Marakeh, Tambir, Medangkungan,
        Maktal, Wuye, Manahil, Prangbakat, Bala,
        Wugu, Wayang, Kulawu, Dukut, Watugunung,
    }
}

named_cycle! {
    /// Solar season of the pranata mangsa.
    Mongso => MONGSO_NAMES {
        Kasa, Karo, Katelu, Kapat, Kalima, Kanem,
        Kapitu, Kawolu, Kasanga, Kasadasa, Desta, Sada,
    }
}

named_cycle! {
    /// Traditional period of the day or night.
    Wektu => WEKTU_NAMES {
        Fajar, SaputLemah, Byar, Enjing, Gumatel, Tengange, Bedhug, LingsirKulon,
        Ngasar, TunggangGunung, Surup, BakdaMaghrib, Isya, SirepBocah, TengahWengi, LingsirWengi,
    }
}

const _: () = {
    assert!(Dina::ALL.len() as i64 == DINA_CYCLE);
    assert!(Pasaran::ALL.len() as i64 == PASARAN_CYCLE);
    assert!(Taun::ALL.len() as i64 == WINDU_CYCLE);
    assert!(Wuku::ALL.len() as i64 == WUKU_CYCLE);
};

impl Dina {
    /// Neptu weight of this day
    pub const fn neptu(self) -> u8 {
        NEPTU_DINA[self as usize]
    }
}

impl Pasaran {
    /// Neptu weight of this market day
    pub const fn neptu(self) -> u8 {
        NEPTU_PASARAN[self as usize]
    }
}

impl Wulan {
    /// Days in this month. Months alternate 30/29 starting with Sura;
    /// Besar gains a thirtieth day in a kabisat year.
    pub const fn length(self, kabisat: bool) -> u16 {
        match self {
            Self::Besar if kabisat => LONG_MONTH_DAYS,
            _ if self.index() % 2 == 0 => LONG_MONTH_DAYS,
            _ => SHORT_MONTH_DAYS,
        }
    }

    /// 1-based month number
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }
}

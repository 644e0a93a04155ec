/// Day names, Sunday first (index 0 is Minggu)
pub const DINA_NAMES: [&str; 7] = ["Minggu", "Senen", "Selasa", "Rebo", "Kemis", "Jemuah", "Setu"];

/// Market-day names of the five-day pasaran cycle
pub const PASARAN_NAMES: [&str; 5] = ["Legi", "Pahing", "Pon", "Wage", "Kliwon"];

/// Javanese month names, Sura first
pub const WULAN_NAMES: [&str; 12] = [
    "Sura",
    "Sapar",
    "Mulud",
    "Bakda Mulud",
    "Jumadilawal",
    "Jumadilakir",
    "Rejeb",
    "Ruwah",
    "Pasa",
    "Sawal",
    "Sela",
    "Besar",
];

/// Year names within one windu
pub const TAUN_NAMES: [&str; 8] = ["Alip", "Ehe", "Jimawal", "Je", "Dal", "Be", "Wawu", "Jimakir"];

/// The thirty wuku, seven days each
#[rustfmt::skip]
pub const WUKU_NAMES: [&str; 30] = [
    "Sinta", "Landep", "Wukir", "Kurantil", "Tolu",
    "Gumbreg", "Warigalit", "Warigagung", "Julungwangi", "Sungsang",
    "Galungan", "Kuningan", "Langkir", "Mandasiya", "Julungpujut",
    "Pahang", "Kuruwelut", "Marakeh", "Tambir", "Medangkungan",
    "Maktal", "Wuye", "Manahil", "Prangbakat", "Bala",
    "Wugu", "Wayang", "Kulawu", "Dukut", "Watugunung",
];

/// Solar seasons (pranata mangsa), Kasa first
pub const MONGSO_NAMES: [&str; 12] = [
    "Kasa", "Karo", "Katelu", "Kapat", "Kalima", "Kanem", "Kapitu", "Kawolu", "Kasanga", "Kasadasa",
    "Desta", "Sada",
];

/// Traditional periods of the day, starting at dawn
pub const WEKTU_NAMES: [&str; 16] = [
    "Fajar",
    "Saput Lemah",
    "Byar",
    "Enjing",
    "Gumatel",
    "Tengange",
    "Bedhug",
    "Lingsir Kulon",
    "Ngasar",
    "Tunggang Gunung",
    "Surup",
    "Bakda Maghrib",
    "Isya",
    "Sirep Bocah",
    "Tengah Wengi",
    "Lingsir Wengi",
];

/// Neptu weight of each dina, indexed like `DINA_NAMES`
pub const NEPTU_DINA: [u8; 7] = [5, 4, 3, 7, 8, 6, 9];
/// Neptu weight of each pasaran, indexed like `PASARAN_NAMES`
pub const NEPTU_PASARAN: [u8; 5] = [5, 9, 7, 4, 8];

/// Days in the civil week
pub const DINA_CYCLE: i64 = 7;
/// Days in the pasaran cycle
pub const PASARAN_CYCLE: i64 = 5;
/// Days in the combined dina/pasaran cycle (one selapan)
pub const WETON_CYCLE: i64 = 35;
/// Number of wuku in the pawukon cycle
pub const WUKU_CYCLE: i64 = 30;
/// Years in one windu
pub const WINDU_CYCLE: i64 = 8;

/// Days in one windu: three kabisat and five wastu years
pub const WINDU_DAYS: i64 = 2835;

/// Length of a common (wastu) year
pub const WASTU_YEAR_DAYS: u16 = 354;
/// Length of a leap (kabisat) year
pub const KABISAT_YEAR_DAYS: u16 = 355;

/// Length of a long month
pub const LONG_MONTH_DAYS: u16 = 30;
/// Length of a short month
pub const SHORT_MONTH_DAYS: u16 = 29;

/// Pasaran index of the anchor date
pub(crate) const PASARAN_CALIBRATION: i64 = 1;
/// Shift aligning wuku week boundaries (Sunday starts a wuku) with the anchor
pub(crate) const WUKU_WEEK_CALIBRATION: i64 = 6;
/// Wuku index of the week containing the anchor date
pub(crate) const WUKU_CALIBRATION: i64 = 17;

/// A correlation point binding one Gregorian day to one Javanese day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    /// Gregorian date of the anchor as (year, month, day)
    pub gregorian: (i32, u32, u32),
    /// The same date as a count of days from 0001-01-01 (day 1)
    pub days_from_ce: i32,
    /// Javanese year containing the anchor date
    pub year: i32,
    /// 1-based position of the anchor date within `year`
    pub day_of_year: u16,
    /// Year lengths for each position in the windu, starting at `year`
    pub windu_pattern: [u16; 8],
}

/// 1 January 2022 is 28 Jumadilawal 1955 Alip, the 146th day of that year.
pub const ANCHOR: Anchor = Anchor {
    gregorian: (2022, 1, 1),
    days_from_ce: 738_156,
    year: 1955,
    day_of_year: 146,
    windu_pattern: [355, 354, 355, 354, 354, 354, 354, 355],
};

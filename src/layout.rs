//! Layout strings for rendering and parsing Javanese dates.
//!
//! A layout is free text in which whole words are replaced by calendar
//! fields. A word is a maximal run of ASCII alphanumeric characters or `_`,
//! so `dd` inside `add` or `d1` is left alone.
//!
//! | Token | Field | Parse capture |
//! |-------|-------|---------------|
//! | `yyyy` | year | 4 digits |
//! | `MS` | mongso name | render only |
//! | `mm` | month number, 2 digits | 2 digits |
//! | `dd` | day, 2 digits | 2 digits |
//! | `HH` `MM` `SS` | hour, minute, second, 2 digits | 2 digits |
//! | `WK` | wektu name | render only |
//! | `T` | windu year name | render only |
//! | `W` | wuku name | render only |
//! | `P` | pasaran name | letters, validated |
//! | `D` | dina name | letters, validated |
//! | `M` | month name | letters and spaces, used only without `m`/`mm` |
//! | `N` | neptu | render only |
//! | `m` | month number | 1-2 digits |
//! | `d` | day | 1-2 digits |
//! | `Z` | zone offset `±HHMM` | sign and 4 digits |

use crate::calendar::to_gregorian;
use crate::error::ParseError;
use crate::types::Wulan;
use crate::JavaneseDate;
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};
use regex::Regex;
use std::fmt::Write;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Year,
    Mongso,
    MonthPadded,
    DayPadded,
    Hour,
    Minute,
    Second,
    Wektu,
    Taun,
    Wuku,
    Pasaran,
    Dina,
    MonthName,
    Neptu,
    Month,
    Day,
    Offset,
}

#[derive(Debug)]
struct Token {
    symbol:  &'static str,
    field:   Field,
    /// Capture group used when parsing; `None` for render-only tokens
    capture: Option<&'static str>,
}

/// Multi-character tokens come first so they are preferred over their
/// single-character prefixes.
static TOKENS: [Token; 17] = [
    Token { symbol: "yyyy", field: Field::Year, capture: Some(r"(\d{4})") },
    Token { symbol: "MS", field: Field::Mongso, capture: None },
    Token { symbol: "mm", field: Field::MonthPadded, capture: Some(r"(\d{2})") },
    Token { symbol: "dd", field: Field::DayPadded, capture: Some(r"(\d{2})") },
    Token { symbol: "HH", field: Field::Hour, capture: Some(r"(\d{2})") },
    Token { symbol: "MM", field: Field::Minute, capture: Some(r"(\d{2})") },
    Token { symbol: "SS", field: Field::Second, capture: Some(r"(\d{2})") },
    Token { symbol: "WK", field: Field::Wektu, capture: None },
    Token { symbol: "T", field: Field::Taun, capture: None },
    Token { symbol: "W", field: Field::Wuku, capture: None },
    Token { symbol: "P", field: Field::Pasaran, capture: Some(r"([a-zA-Z]+)") },
    Token { symbol: "D", field: Field::Dina, capture: Some(r"([a-zA-Z]+)") },
    Token { symbol: "M", field: Field::MonthName, capture: Some(r"([a-zA-Z\s]+)") },
    Token { symbol: "N", field: Field::Neptu, capture: None },
    Token { symbol: "m", field: Field::Month, capture: Some(r"(\d{1,2})") },
    Token { symbol: "d", field: Field::Day, capture: Some(r"(\d{1,2})") },
    Token { symbol: "Z", field: Field::Offset, capture: Some(r"([+-]\d{4})") },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Render,
    Parse,
}

#[derive(Debug)]
enum Segment<'a> {
    Literal(&'a str),
    Token(&'static Token),
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lookup(word: &str, mode: Mode) -> Option<&'static Token> {
    TOKENS
        .iter()
        .filter(|token| mode == Mode::Render || token.capture.is_some())
        .find(|token| token.symbol == word)
}

/// Splits a layout into literal text and the tokens active in `mode`.
fn segments(layout: &str, mode: Mode) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut chars = layout.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !is_word_char(c) {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if !is_word_char(next) {
                break;
            }
            end = i + next.len_utf8();
            chars.next();
        }

        if let Some(token) = lookup(&layout[start..end], mode) {
            if literal_start < start {
                segments.push(Segment::Literal(&layout[literal_start..start]));
            }
            segments.push(Segment::Token(token));
            literal_start = end;
        }
    }
    if literal_start < layout.len() {
        segments.push(Segment::Literal(&layout[literal_start..]));
    }
    segments
}

/// Renders `date` through `layout`.
pub(crate) fn render(date: &JavaneseDate, layout: &str) -> String {
    let mut out = String::with_capacity(layout.len() * 2);
    for segment in segments(layout, Mode::Render) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(token) => render_field(&mut out, date, token.field),
        }
    }
    out
}

fn render_field(out: &mut String, date: &JavaneseDate, field: Field) {
    // Writing to a String cannot fail
    let _ = match field {
        Field::Year => write!(out, "{}", date.year()),
        Field::Mongso => write!(out, "{}", date.mongso()),
        Field::MonthPadded => write!(out, "{:02}", date.wulan().number()),
        Field::DayPadded => write!(out, "{:02}", date.day()),
        Field::Hour => write!(out, "{:02}", date.hour()),
        Field::Minute => write!(out, "{:02}", date.minute()),
        Field::Second => write!(out, "{:02}", date.second()),
        Field::Wektu => write!(out, "{}", date.wektu()),
        Field::Taun => write!(out, "{}", date.taun()),
        Field::Wuku => write!(out, "{}", date.wuku()),
        Field::Pasaran => write!(out, "{}", date.pasaran()),
        Field::Dina => write!(out, "{}", date.dina()),
        Field::MonthName => write!(out, "{}", date.wulan()),
        Field::Neptu => write!(out, "{}", date.neptu()),
        Field::Month => write!(out, "{}", date.wulan().number()),
        Field::Day => write!(out, "{}", date.day()),
        Field::Offset => write!(out, "{}", date.gregorian().format("%z")),
    };
}

/// Raw fields captured from a parsed string.
#[derive(Debug, Default)]
struct Captured<'a> {
    year:       Option<i32>,
    wulan:      Option<Wulan>,
    /// Month name, looked up only when no numeric month was captured
    month_name: Option<&'a str>,
    day:        Option<u8>,
    hour:       u32,
    minute:     u32,
    second:     u32,
    offset:     Option<FixedOffset>,
    pasaran:    Option<&'a str>,
    dina:       Option<&'a str>,
}

fn number<T: std::str::FromStr>(text: &str) -> Result<T, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber(text.to_owned()))
}

fn month_number(text: &str) -> Result<Wulan, ParseError> {
    let month: u8 = number(text)?;
    month
        .checked_sub(1)
        .and_then(|index| Wulan::from_index(usize::from(index)))
        .ok_or(ParseError::InvalidMonth(month))
}

fn zone_offset(text: &str) -> Result<FixedOffset, ParseError> {
    let invalid = || ParseError::InvalidOffset(text.to_owned());
    let (sign, digits) = match text.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => return Err(invalid()),
    };
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours: i32 = digits[..2].parse().map_err(|_| invalid())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| invalid())?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}

/// Attaches the offset of `zone` to a wall-clock time. An ambiguous time
/// takes the earlier offset. A time in a DST gap is read with the offset in
/// force before the gap, which moves it forward past the gap.
fn resolve_in<Tz: TimeZone>(zone: &Tz, naive: &NaiveDateTime) -> DateTime<FixedOffset> {
    if let Some(instant) = zone.from_local_datetime(naive).earliest() {
        return instant.fixed_offset();
    }
    let day_before = naive.checked_sub_signed(TimeDelta::days(1)).unwrap_or(*naive);
    let before = zone.offset_from_utc_datetime(&day_before).fix();
    let utc = naive
        .checked_sub_signed(TimeDelta::seconds(i64::from(before.local_minus_utc())))
        .unwrap_or(*naive);
    zone.from_utc_datetime(&utc).fixed_offset()
}

/// Parses `value` according to `layout`.
pub(crate) fn parse(value: &str, layout: &str) -> Result<JavaneseDate, ParseError> {
    let segments = segments(layout, Mode::Parse);

    let mut pattern = String::from("^");
    let mut fields = Vec::new();
    for segment in &segments {
        match segment {
            Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            Segment::Token(token) => {
                if let Some(capture) = token.capture {
                    pattern.push_str(capture);
                    fields.push(token.field);
                }
            }
        }
    }
    pattern.push('$');
    debug!(layout, %pattern, "built layout pattern");

    let re = Regex::new(&pattern).map_err(|source| ParseError::MalformedLayout {
        layout: layout.to_owned(),
        source,
    })?;
    let caps = re.captures(value).ok_or_else(|| ParseError::NoMatch {
        value: value.to_owned(),
        layout: layout.to_owned(),
    })?;

    let mut captured = Captured::default();
    for (field, group) in fields.iter().zip(caps.iter().skip(1)) {
        let Some(text) = group.map(|m| m.as_str()) else {
            continue;
        };
        match field {
            Field::Year => captured.year = Some(number(text)?),
            Field::MonthPadded | Field::Month => captured.wulan = Some(month_number(text)?),
            Field::MonthName => captured.month_name = Some(text),
            Field::DayPadded | Field::Day => captured.day = Some(number(text)?),
            Field::Hour => captured.hour = number(text)?,
            Field::Minute => captured.minute = number(text)?,
            Field::Second => captured.second = number(text)?,
            Field::Offset => captured.offset = Some(zone_offset(text)?),
            Field::Pasaran => captured.pasaran = Some(text),
            Field::Dina => captured.dina = Some(text),
            Field::Mongso | Field::Wektu | Field::Taun | Field::Wuku | Field::Neptu => {}
        }
    }

    let year = captured.year.ok_or(ParseError::MissingField("year"))?;
    let wulan = match (captured.wulan, captured.month_name) {
        (Some(wulan), _) => wulan,
        (None, Some(name)) => Wulan::from_name(name)
            .ok_or_else(|| ParseError::UnknownMonthName(name.trim().to_owned()))?,
        (None, None) => return Err(ParseError::MissingField("month")),
    };
    let day = captured.day.ok_or(ParseError::MissingField("day"))?;

    let time = NaiveTime::from_hms_opt(captured.hour, captured.minute, captured.second).ok_or(
        ParseError::InvalidTime {
            hour:   captured.hour,
            minute: captured.minute,
            second: captured.second,
        },
    )?;
    let naive = to_gregorian(year, wulan, day)?.and_time(time);
    let instant = match captured.offset {
        Some(offset) => naive
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| ParseError::InvalidOffset(offset.to_string()))?,
        None => resolve_in(&Local, &naive),
    };

    let date = JavaneseDate::new(instant);
    if let Some(found) = captured.pasaran {
        if !date.pasaran().name().eq_ignore_ascii_case(found.trim()) {
            return Err(ParseError::ValidationMismatch {
                field:    "pasaran",
                expected: date.pasaran().name(),
                found:    found.to_owned(),
            });
        }
    }
    if let Some(found) = captured.dina {
        if !date.dina().name().eq_ignore_ascii_case(found.trim()) {
            return Err(ParseError::ValidationMismatch {
                field:    "dina",
                expected: date.dina().name(),
                found:    found.to_owned(),
            });
        }
    }
    Ok(date)
}

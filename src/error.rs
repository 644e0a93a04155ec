//! Error types for conversion, layout parsing and weton search.

use crate::types::Wulan;

/// A name did not match any entry of a cycle's name table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} name: {name}")]
pub struct UnknownNameError {
    /// Which cycle was searched, e.g. `"Dina"`
    pub kind: &'static str,
    /// The rejected input
    pub name: String,
}

/// Error converting a Javanese date back to the Gregorian calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The resulting Gregorian date is not representable.
    #[error("{day} {wulan} {year} is outside the supported Gregorian range")]
    OutOfRange { year: i32, wulan: Wulan, day: u8 },
}

/// Error parsing a string against a layout.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The pattern built from the layout did not compile.
    #[error("Invalid layout '{layout}': {source}")]
    MalformedLayout {
        layout: String,
        #[source]
        source: regex::Error,
    },

    /// The input does not have the shape the layout describes.
    #[error("Value '{value}' does not match layout '{layout}'")]
    NoMatch { value: String, layout: String },

    /// The layout lacks a token needed to locate the date.
    #[error("Layout is missing a {0} token")]
    MissingField(&'static str),

    /// A captured month name is not a Javanese month.
    #[error("Invalid month name: {0}")]
    UnknownMonthName(String),

    /// A numeric month outside 1..=12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// A captured number could not be read.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Hour, minute or second out of range.
    #[error("Invalid time {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    /// A zone offset that is not a valid `±HHMM`.
    #[error("Invalid zone offset: {0}")]
    InvalidOffset(String),

    /// A captured name disagrees with the date it appears next to.
    #[error("Invalid {field}: date falls on {expected}, not {found}")]
    ValidationMismatch {
        field: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Error resolving or searching for a weton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WetonError {
    /// The phrase is not exactly `"Dina Pasaran"`.
    #[error("Invalid weton '{0}': expected 'Dina Pasaran', e.g. 'Setu Pahing'")]
    InvalidPhrase(String),

    #[error("Invalid dina in weton: {0}")]
    UnknownDina(String),

    #[error("Invalid pasaran in weton: {0}")]
    UnknownPasaran(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

use std::convert::Infallible;

use sqlx_datetime_core::Error;

/// A textual `DATETIME` literal could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid DATETIME literal {input:?}: {kind}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

/// The reason a [`ParseError`] was raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("expected {expected} at byte {position}")]
    Unexpected {
        position: usize,
        expected: &'static str,
    },

    /// A field is malformed or outside its own range (month 13, hour 24).
    #[error(transparent)]
    Field(#[from] time::error::ParseFromDescription),

    /// The fields are each valid but do not name a real date (February 30th).
    #[error(transparent)]
    Date(#[from] time::error::TryFromParsed),

    #[error("timezone offset `{offset}` is not accepted")]
    OffsetNotAllowed { offset: String },

    #[error(transparent)]
    Range(#[from] RangeError),
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: impl Into<ParseErrorKind>) -> Self {
        Self {
            input: input.to_owned(),
            kind: kind.into(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

/// A value cannot be represented as a `DATETIME`.
///
/// Values are never clamped or truncated to fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RangeError {
    /// A calendar field is impossible on its own (month 13, February 30th, hour 24).
    #[error("{field} out of range: {value}")]
    Field { field: &'static str, value: i64 },

    #[error("year {year} is outside the DATETIME range of 1753 through 9999")]
    Year { year: i64 },

    #[error("day offset {days} does not fit in a 32-bit DATETIME day count")]
    DayOffset { days: i64 },

    /// A stored day offset fits in 32 bits but names a date outside 1753-01-01..=9999-12-31.
    #[error("stored day offset {days} is outside the DATETIME range")]
    StoredDays { days: i32 },

    #[error("tick count {ticks} is outside the DATETIME range of 0 through 25919999")]
    Ticks { ticks: i64 },

    /// A quantizer placed an offset outside the second it was given.
    #[error("tick {tick} is outside the 0 through 299 ticks of a second")]
    TickOfSecond { tick: u16 },
}

impl From<Infallible> for RangeError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Error::Parse(Box::new(error))
    }
}

impl From<RangeError> for Error {
    fn from(error: RangeError) -> Self {
        Error::Range(Box::new(error))
    }
}

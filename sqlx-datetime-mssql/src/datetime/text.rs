use sqlx_datetime_core::Error;
use time::macros::format_description;
use time::parsing::Parsed;
use time::PrimitiveDateTime;
use tracing::Level;

use crate::datetime::quantizer::{quantize_timestamp, Quantizer, TdsQuantizer};
use crate::datetime::{CalendarTimestamp, StoredDatetime};
use crate::error::{ParseError, ParseErrorKind};
use crate::options::{MssqlDatetimeOptions, OffsetSuffix};

/// Parses textual `DATETIME` parameters.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.fraction][Z]`, where the fraction has 1 to 9 digits. A space is
/// also accepted in place of the `T`, and a `+HH:MM` / `-HH:MM` offset is stripped (or rejected,
/// see [`OffsetSuffix`]). The parsed value is quantized onto the `DATETIME` grid with the same
/// quantizer every other encoder uses.
#[derive(Debug, Clone, Copy)]
pub struct TextualDatetimeParser<Q = TdsQuantizer> {
    quantizer: Q,
    offset_suffix: OffsetSuffix,
    carry_level: Option<Level>,
}

impl TextualDatetimeParser {
    pub fn new() -> Self {
        Self::with_quantizer(TdsQuantizer)
    }
}

impl Default for TextualDatetimeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Quantizer> TextualDatetimeParser<Q> {
    pub fn with_quantizer(quantizer: Q) -> Self {
        let options = MssqlDatetimeOptions::new();

        Self {
            quantizer,
            offset_suffix: options.offset_suffix,
            carry_level: options.carry_level(),
        }
    }

    pub fn with_options(mut self, options: &MssqlDatetimeOptions) -> Self {
        self.offset_suffix = options.offset_suffix;
        self.carry_level = options.carry_level();
        self
    }

    /// Parse `text` and quantize it.
    ///
    /// The result's nanosecond field is the canonical offset of its tick, so parsing
    /// `"10:30:42.005"` yields `10:30:42.006666667`.
    pub fn parse(&self, text: &str) -> Result<CalendarTimestamp, ParseError> {
        let value = self.parse_exact(text)?;

        let (quantized, _) = quantize_timestamp(&self.quantizer, &value, self.carry_level)
            .map_err(|e| ParseError::new(text, e))?;

        Ok(quantized)
    }

    /// Parse `text` and quantize it into the stored `(day offset, tick count)` form.
    pub fn parse_stored(&self, text: &str) -> Result<StoredDatetime, Error> {
        let value = self.parse_exact(text)?;

        let (quantized, time_of_day) =
            quantize_timestamp(&self.quantizer, &value, self.carry_level)?;

        Ok(StoredDatetime::from_quantized(&quantized, time_of_day)?)
    }

    /// Parse `text` without quantizing; the nanosecond field holds the fraction as written.
    pub fn parse_exact(&self, text: &str) -> Result<CalendarTimestamp, ParseError> {
        parse(text, self.offset_suffix).map_err(|kind| {
            let error = ParseError::new(text, kind);

            tracing::debug!(
                target: "sqlx_datetime::mssql::datetime",
                %error,
                "rejected DATETIME literal"
            );

            error
        })
    }
}

fn unexpected(text: &str, rest: &[u8], expected: &'static str) -> ParseErrorKind {
    ParseErrorKind::Unexpected {
        position: text.len() - rest.len(),
        expected,
    }
}

// The fields of the timestamp, before any rounding.
fn parse(text: &str, offset_suffix: OffsetSuffix) -> Result<CalendarTimestamp, ParseErrorKind> {
    let mut parsed = Parsed::new();

    let rest = parsed.parse_items(text.as_bytes(), format_description!("[year]-[month]-[day]"))?;

    let rest = match rest {
        [b'T' | b' ', rest @ ..] => rest,
        _ => return Err(unexpected(text, rest, "`T` or a space")),
    };

    let rest = parsed.parse_items(
        rest,
        format_description!("[hour]:[minute]:[second][optional [.[subsecond digits:1+]]]"),
    )?;

    let rest = match rest {
        [] => rest,

        [b'Z', rest @ ..] => rest,

        [b'+' | b'-', ..] => {
            let after = parsed.parse_items(
                rest,
                format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
            )?;

            if offset_suffix == OffsetSuffix::Reject {
                let start = text.len() - rest.len();
                let end = text.len() - after.len();

                return Err(ParseErrorKind::OffsetNotAllowed {
                    offset: text[start..end].to_owned(),
                });
            }

            after
        }

        _ => {
            return Err(unexpected(
                text,
                rest,
                "fractional seconds, `Z`, an offset or the end of input",
            ))
        }
    };

    if !rest.is_empty() {
        return Err(unexpected(text, rest, "the end of input"));
    }

    // any offset is left in `parsed` and never applied
    Ok(PrimitiveDateTime::try_from(parsed)?.into())
}

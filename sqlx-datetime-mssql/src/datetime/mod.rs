//! Conversion between calendar timestamps and the `DATETIME` storage format.
//!
//! `DATETIME` keeps a date as a signed day count from 1900-01-01 and a time of day as a count of
//! 1/300 second ticks since midnight. A timestamp can reach the server as text, as a native
//! parameter or inside a bulk-load row; all three paths quantize through one [`Quantizer`], so the
//! same instant is stored identically no matter how it was sent.
//!
//! | Path | Type |
//! |------|------|
//! | text | [`TextualDatetimeParser`] |
//! | native parameter | [`NativeDatetimeEncoder`] |
//! | bulk load | [`BulkDatetimeEncoder`] |
//! | reading back | [`DatetimeDecoder`] |

mod bulk;
mod calendar;
mod decoder;
mod native;
mod quantizer;
mod stored;
mod text;

pub use bulk::BulkDatetimeEncoder;
pub use calendar::CalendarTimestamp;
pub use decoder::DatetimeDecoder;
pub use native::NativeDatetimeEncoder;
pub use quantizer::{Quantized, Quantizer, TdsQuantizer, TICKS_PER_SECOND};
pub use stored::{
    QuantizedTimeOfDay, StoredDatetime, MAX_DAYS, MAX_TICKS, MAX_YEAR, MIN_DAYS, MIN_YEAR,
    STORED_SIZE,
};
pub use text::TextualDatetimeParser;

use crate::error::{ParseError, RangeError};

/// Round nanoseconds within a second (`0..1_000_000_000`) to the nearest `DATETIME` tick.
///
/// ```rust
/// use sqlx_datetime_mssql::datetime::{quantize, Quantized};
///
/// assert_eq!(quantize(5_000_000), Quantized { tick: 2, carry: false });
/// assert_eq!(quantize(999_000_000), Quantized { tick: 0, carry: true });
/// ```
pub fn quantize(nanos: u32) -> Quantized {
    TdsQuantizer.quantize(nanos)
}

/// The canonical nanosecond offset of a tick (`0..300`).
pub fn ticks_to_nanos(tick: u16) -> u32 {
    TdsQuantizer.ticks_to_nanos(tick)
}

/// Parse a textual timestamp and quantize it with the default options.
///
/// ```rust
/// # fn main() -> Result<(), sqlx_datetime_mssql::ParseError> {
/// use sqlx_datetime_mssql::datetime::parse_textual_datetime;
///
/// let ts = parse_textual_datetime("2025-04-11T10:30:42.999Z")?;
/// assert_eq!(ts.to_string(), "2025-04-11T10:30:43");
/// # Ok(())
/// # }
/// ```
pub fn parse_textual_datetime(text: &str) -> Result<CalendarTimestamp, ParseError> {
    TextualDatetimeParser::new().parse(text)
}

/// Quantize `value` and convert it to the stored `(day offset, tick count)` form.
pub fn encode_datetime(value: &CalendarTimestamp) -> Result<StoredDatetime, RangeError> {
    BulkDatetimeEncoder::new().encode(value)
}

/// Rebuild the calendar timestamp a stored value represents.
pub fn decode_datetime(value: StoredDatetime) -> CalendarTimestamp {
    DatetimeDecoder::new().decode(value)
}

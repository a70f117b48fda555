use tracing::Level;

use crate::datetime::quantizer::{quantize_timestamp, Quantizer, TdsQuantizer};
use crate::datetime::{CalendarTimestamp, StoredDatetime};
use crate::error::RangeError;
use crate::options::MssqlDatetimeOptions;

/// Quantizes in-memory timestamps bound as native `DATETIME` parameters.
///
/// Accepts anything convertible into a [`CalendarTimestamp`], including
/// `time::PrimitiveDateTime`, and `chrono::NaiveDateTime` when the `chrono` feature is enabled.
#[derive(Debug, Clone, Copy)]
pub struct NativeDatetimeEncoder<Q = TdsQuantizer> {
    quantizer: Q,
    carry_level: Option<Level>,
}

impl NativeDatetimeEncoder {
    pub fn new() -> Self {
        Self::with_quantizer(TdsQuantizer)
    }
}

impl Default for NativeDatetimeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Quantizer> NativeDatetimeEncoder<Q> {
    pub fn with_quantizer(quantizer: Q) -> Self {
        Self {
            quantizer,
            carry_level: MssqlDatetimeOptions::new().carry_level(),
        }
    }

    pub fn with_options(mut self, options: &MssqlDatetimeOptions) -> Self {
        self.carry_level = options.carry_level();
        self
    }

    /// Quantize `value`; the result is exactly what the server will store.
    pub fn encode(&self, value: &CalendarTimestamp) -> Result<CalendarTimestamp, RangeError> {
        let (quantized, _) = quantize_timestamp(&self.quantizer, value, self.carry_level)?;
        Ok(quantized)
    }

    /// Quantize `value` into its stored `(day offset, tick count)` form.
    pub fn encode_stored(&self, value: &CalendarTimestamp) -> Result<StoredDatetime, RangeError> {
        let (quantized, time_of_day) =
            quantize_timestamp(&self.quantizer, value, self.carry_level)?;

        StoredDatetime::from_quantized(&quantized, time_of_day)
    }

    /// Convert `value` into a [`CalendarTimestamp`] and quantize it.
    pub fn encode_value<T>(&self, value: T) -> Result<CalendarTimestamp, RangeError>
    where
        T: TryInto<CalendarTimestamp>,
        RangeError: From<T::Error>,
    {
        self.encode(&value.try_into()?)
    }
}

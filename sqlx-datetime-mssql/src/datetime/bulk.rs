use sqlx_datetime_core::io::BufMutExt;
use sqlx_datetime_core::Error;
use tracing::Level;

use crate::datetime::quantizer::{quantize_timestamp, Quantizer, TdsQuantizer};
use crate::datetime::{CalendarTimestamp, StoredDatetime};
use crate::error::RangeError;
use crate::options::MssqlDatetimeOptions;

/// Serializes timestamps into bulk-load rows.
///
/// A `DATETIME` column takes the fixed 8-byte layout; a nullable (`DATETIMN`) column takes the
/// same payload behind a one-byte length, or a lone `0` for `NULL`.
#[derive(Debug, Clone, Copy)]
pub struct BulkDatetimeEncoder<Q = TdsQuantizer> {
    quantizer: Q,
    carry_level: Option<Level>,
}

impl BulkDatetimeEncoder {
    pub fn new() -> Self {
        Self::with_quantizer(TdsQuantizer)
    }
}

impl Default for BulkDatetimeEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Quantizer> BulkDatetimeEncoder<Q> {
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

    /// Quantize `value` into its stored form.
    ///
    /// Fails if the (possibly carried) date is outside 1753-01-01 through 9999-12-31.
    pub fn encode(&self, value: &CalendarTimestamp) -> Result<StoredDatetime, RangeError> {
        let (quantized, time_of_day) =
            quantize_timestamp(&self.quantizer, value, self.carry_level)?;

        StoredDatetime::from_quantized(&quantized, time_of_day).map_err(|error| {
            tracing::debug!(
                target: "sqlx_datetime::mssql::datetime",
                timestamp = %value,
                %error,
                "rejected out-of-range DATETIME"
            );

            error
        })
    }

    /// Append the fixed 8-byte layout of `value` to `buf`.
    ///
    /// Nothing is written on error.
    pub fn encode_into(
        &self,
        value: &CalendarTimestamp,
        buf: &mut Vec<u8>,
    ) -> Result<(), RangeError> {
        self.encode(value)?.encode(buf);
        Ok(())
    }

    /// Append `value` in the nullable `DATETIMN` framing.
    pub fn encode_nullable(
        &self,
        value: Option<&CalendarTimestamp>,
        buf: &mut Vec<u8>,
    ) -> Result<(), Error> {
        match value {
            Some(value) => buf.put_u8_length_prefixed(|buf| {
                self.encode_into(value, buf)?;
                Ok(())
            }),

            None => {
                buf.push(0);
                Ok(())
            }
        }
    }
}

use sqlx_datetime_core::io::BufExt;
use sqlx_datetime_core::{err_protocol, Error};

use crate::datetime::quantizer::{Quantizer, TdsQuantizer};
use crate::datetime::{CalendarTimestamp, StoredDatetime, STORED_SIZE};

/// Rebuilds calendar timestamps from stored `DATETIME` values.
///
/// Every read path goes through here, whichever path wrote the value.
#[derive(Debug, Default, Clone, Copy)]
pub struct DatetimeDecoder<Q = TdsQuantizer> {
    quantizer: Q,
}

impl DatetimeDecoder {
    pub fn new() -> Self {
        Self::with_quantizer(TdsQuantizer)
    }
}

impl<Q: Quantizer> DatetimeDecoder<Q> {
    pub fn with_quantizer(quantizer: Q) -> Self {
        Self { quantizer }
    }

    pub fn decode(&self, value: StoredDatetime) -> CalendarTimestamp {
        let time_of_day = value.time_of_day();
        let nanosecond = self.quantizer.ticks_to_nanos(time_of_day.tick_of_second());

        CalendarTimestamp::from_stored(value.days(), time_of_day, nanosecond)
    }

    /// Decode exactly one 8-byte layout.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<CalendarTimestamp, Error> {
        if bytes.len() != STORED_SIZE {
            return Err(err_protocol!(
                "expected {} bytes for DATETIME, got {}",
                STORED_SIZE,
                bytes.len()
            ));
        }

        let mut buf = bytes;
        Ok(self.decode(StoredDatetime::decode(&mut buf)?))
    }

    /// Read one value in the nullable `DATETIMN` framing from the front of `buf`.
    ///
    /// `buf` only advances past a value that decoded; on error it is left where it was.
    pub fn decode_nullable(&self, buf: &mut &[u8]) -> Result<Option<CalendarTimestamp>, Error> {
        let mut rest = *buf;

        let value = match usize::from(rest.read_u8()?) {
            0 => None,

            STORED_SIZE => Some(self.decode(StoredDatetime::decode(&mut rest)?)),

            other => {
                return Err(err_protocol!(
                    "invalid DATETIMN length {} (expected 0 or {})",
                    other,
                    STORED_SIZE
                ))
            }
        };

        *buf = rest;

        Ok(value)
    }
}

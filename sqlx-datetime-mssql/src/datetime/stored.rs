use bytes::BufMut;
use sqlx_datetime_core::io::BufExt;
use sqlx_datetime_core::Error;

use crate::datetime::quantizer::TICKS_PER_SECOND;
use crate::datetime::CalendarTimestamp;
use crate::error::RangeError;

/// Earliest year a `DATETIME` can hold.
pub const MIN_YEAR: i32 = 1753;

/// Latest year a `DATETIME` can hold.
pub const MAX_YEAR: i32 = 9999;

/// Day offset of 1753-01-01.
pub const MIN_DAYS: i32 = -53_690;

/// Day offset of 9999-12-31.
pub const MAX_DAYS: i32 = 2_958_463;

/// Last tick of the day, 23:59:59.997.
pub const MAX_TICKS: u32 = 86_400 * TICKS_PER_SECOND as u32 - 1;

/// Size of the fixed binary layout.
pub const STORED_SIZE: usize = 8;

/// Elapsed 1/300 second ticks since midnight, in `0..=25_919_999`.
///
/// Produced by quantizing a calendar time of day, or read back from storage through the
/// checked [`from_ticks`](Self::from_ticks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QuantizedTimeOfDay(u32);

impl QuantizedTimeOfDay {
    pub(crate) fn from_hms_tick(hour: u8, minute: u8, second: u8, tick: u16) -> Self {
        debug_assert!(hour < 24 && minute < 60 && second < 60 && tick < TICKS_PER_SECOND);

        let seconds = u32::from(hour) * 3600 + u32::from(minute) * 60 + u32::from(second);
        Self(seconds * u32::from(TICKS_PER_SECOND) + u32::from(tick))
    }

    /// Accept a tick count read from storage.
    pub fn from_ticks(ticks: i32) -> Result<Self, RangeError> {
        match u32::try_from(ticks) {
            Ok(ticks) if ticks <= MAX_TICKS => Ok(Self(ticks)),
            _ => Err(RangeError::Ticks {
                ticks: ticks.into(),
            }),
        }
    }

    pub fn ticks(&self) -> u32 {
        self.0
    }

    /// Whole seconds since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.0 / u32::from(TICKS_PER_SECOND)
    }

    /// Tick within the current second, in `0..300`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick_of_second(&self) -> u16 {
        // < 300
        (self.0 % u32::from(TICKS_PER_SECOND)) as u16
    }
}

/// The on-disk and on-wire form of a `DATETIME`.
///
/// 8 bytes: a little-endian `i32` day offset from 1900-01-01 (negative for earlier dates),
/// then a little-endian `i32` count of 1/300 second ticks since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StoredDatetime {
    days: i32,
    time_of_day: QuantizedTimeOfDay,
}

impl StoredDatetime {
    /// Accept a `(day offset, tick count)` pair, checking both against the `DATETIME` range.
    pub fn new(days: i32, ticks: i32) -> Result<Self, RangeError> {
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(RangeError::StoredDays { days });
        }

        Ok(Self {
            days,
            time_of_day: QuantizedTimeOfDay::from_ticks(ticks)?,
        })
    }

    /// Pair an already quantized timestamp with its tick count.
    pub(crate) fn from_quantized(
        value: &CalendarTimestamp,
        time_of_day: QuantizedTimeOfDay,
    ) -> Result<Self, RangeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value.year()) {
            return Err(RangeError::Year {
                year: value.year().into(),
            });
        }

        let days = value.days_since_1900();
        let days = i32::try_from(days).map_err(|_| RangeError::DayOffset { days })?;

        Ok(Self { days, time_of_day })
    }

    pub fn days(&self) -> i32 {
        self.days
    }

    pub fn time_of_day(&self) -> QuantizedTimeOfDay {
        self.time_of_day
    }

    /// Tick count as it appears in the binary layout.
    #[allow(clippy::cast_possible_wrap)]
    pub fn ticks(&self) -> i32 {
        // <= MAX_TICKS
        self.time_of_day.ticks() as i32
    }

    pub fn to_le_bytes(&self) -> [u8; STORED_SIZE] {
        let mut out = [0u8; STORED_SIZE];
        out[..4].copy_from_slice(&self.days.to_le_bytes());
        out[4..].copy_from_slice(&self.ticks().to_le_bytes());
        out
    }

    pub fn from_le_bytes(bytes: [u8; STORED_SIZE]) -> Result<Self, RangeError> {
        let [d0, d1, d2, d3, t0, t1, t2, t3] = bytes;

        Self::new(
            i32::from_le_bytes([d0, d1, d2, d3]),
            i32::from_le_bytes([t0, t1, t2, t3]),
        )
    }

    /// Append the 8-byte layout to `buf`.
    pub fn encode(&self, buf: &mut impl BufMut) {
        buf.put_i32_le(self.days);
        buf.put_i32_le(self.ticks());
    }

    /// Read the 8-byte layout from the front of `buf`.
    pub fn decode(buf: &mut &[u8]) -> Result<Self, Error> {
        let days = buf.read_i32_le()?;
        let ticks = buf.read_i32_le()?;

        Ok(Self::new(days, ticks)?)
    }
}

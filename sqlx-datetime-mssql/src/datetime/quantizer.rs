use sqlx_datetime_core::{private_tracing_dynamic_enabled, private_tracing_dynamic_event};
use tracing::Level;

use crate::datetime::CalendarTimestamp;
use crate::datetime::QuantizedTimeOfDay;
use crate::error::RangeError;

/// Number of ticks in one second; a tick is the smallest `DATETIME` time-of-day increment.
pub const TICKS_PER_SECOND: u16 = 300;

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// The result of placing a sub-second offset on the tick grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantized {
    /// Tick within the second, in `0..300`.
    pub tick: u16,

    /// The offset rounded up to a full second; the caller must advance the whole-second
    /// component by one. `tick` is `0` when this is set.
    pub carry: bool,
}

/// Maps nanoseconds within a second onto the 1/300 second grid and back.
///
/// Every `DATETIME` encoder is generic over this trait and routes all rounding through it, so a
/// value reaches the same tick whether it came from text, an in-memory timestamp or a bulk row.
pub trait Quantizer {
    /// Round `nanos` (in `0..1_000_000_000`) to the nearest tick.
    fn quantize(&self, nanos: u32) -> Quantized;

    /// The canonical nanosecond offset of `tick` (in `0..300`).
    ///
    /// `quantize(ticks_to_nanos(tick))` must return `tick` without a carry.
    fn ticks_to_nanos(&self, tick: u16) -> u32;
}

impl<Q: Quantizer + ?Sized> Quantizer for &'_ Q {
    #[inline]
    fn quantize(&self, nanos: u32) -> Quantized {
        (**self).quantize(nanos)
    }

    #[inline]
    fn ticks_to_nanos(&self, tick: u16) -> u32 {
        (**self).ticks_to_nanos(tick)
    }
}

/// The rounding SQL Server applies to `DATETIME`: nearest tick, halves away from zero.
///
/// This yields the documented `.000`, `.003`, `.007` fraction pattern.
/// <https://learn.microsoft.com/en-us/sql/t-sql/data-types/datetime-transact-sql>
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TdsQuantizer;

// Both directions stay below the target type's range: ticks < 300, nanos < 1_000_000_000.
#[allow(clippy::cast_possible_truncation)]
impl Quantizer for TdsQuantizer {
    #[inline]
    fn quantize(&self, nanos: u32) -> Quantized {
        debug_assert!(nanos < NANOS_PER_SECOND, "nanos out of range: {nanos}");

        let half = u64::from(NANOS_PER_SECOND / 2);
        let tick = (u64::from(nanos) * u64::from(TICKS_PER_SECOND) + half)
            / u64::from(NANOS_PER_SECOND);

        if tick >= u64::from(TICKS_PER_SECOND) {
            return Quantized {
                tick: 0,
                carry: true,
            };
        }

        Quantized {
            tick: tick as u16,
            carry: false,
        }
    }

    #[inline]
    fn ticks_to_nanos(&self, tick: u16) -> u32 {
        debug_assert!(tick < TICKS_PER_SECOND, "tick out of range: {tick}");

        let ticks = u64::from(TICKS_PER_SECOND);
        ((u64::from(tick) * u64::from(NANOS_PER_SECOND) + ticks / 2) / ticks) as u32
    }
}

/// Quantize the time-of-day of `value` and fold any carry into the calendar fields.
///
/// This is the one place rounding happens; the text parser, the native encoder and the bulk
/// encoder all call it with their injected quantizer. Output of the quantizer that falls off the
/// tick grid is an error, never a stored value.
pub(crate) fn quantize_timestamp<Q: Quantizer>(
    quantizer: &Q,
    value: &CalendarTimestamp,
    carry_level: Option<Level>,
) -> Result<(CalendarTimestamp, QuantizedTimeOfDay), RangeError> {
    let Quantized { tick, carry } = quantizer.quantize(value.nanosecond());

    if tick >= TICKS_PER_SECOND {
        return Err(RangeError::TickOfSecond { tick });
    }

    let whole = if carry {
        if let Some(level) = carry_level {
            if private_tracing_dynamic_enabled!(target: "sqlx_datetime::mssql::datetime", level) {
                private_tracing_dynamic_event!(
                    target: "sqlx_datetime::mssql::datetime",
                    level,
                    timestamp = %value,
                    "DATETIME rounding carried into the next second"
                );
            }
        }

        value.next_second()?
    } else {
        *value
    };

    let quantized = whole.with_nanosecond(quantizer.ticks_to_nanos(tick))?;
    let time_of_day = QuantizedTimeOfDay::from_hms_tick(
        quantized.hour(),
        quantized.minute(),
        quantized.second(),
        tick,
    );

    Ok((quantized, time_of_day))
}

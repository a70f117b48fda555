use std::fmt::{self, Display, Formatter};

use time::error::ComponentRange;
use time::macros::date;
use time::{Date, Duration, Month, PrimitiveDateTime, Time};

use crate::datetime::QuantizedTimeOfDay;
use crate::error::RangeError;

// Day 0 of the stored day count.
const EPOCH_1900: Date = date!(1900 - 01 - 01);

/// A naive calendar timestamp with nanosecond precision.
///
/// This is the client-facing form of a `DATETIME`. No timezone is attached and none is
/// assumed; the clock fields are taken as given.
///
/// A thin wrapper over [`time::PrimitiveDateTime`]; convert with `From` in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarTimestamp(PrimitiveDateTime);

impl CalendarTimestamp {
    /// Construct a timestamp, checking every field against the proleptic Gregorian calendar.
    ///
    /// The year is not limited to the `DATETIME` range here; that is checked when the value is
    /// encoded for storage.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> Result<Self, RangeError> {
        let field = |error: ComponentRange| {
            let value = match error.name() {
                "year" => return RangeError::Year { year: year.into() },
                "month" => month.into(),
                "day" => day.into(),
                "hour" => hour.into(),
                "minute" => minute.into(),
                "second" => second.into(),
                _ => nanosecond.into(),
            };

            RangeError::Field {
                field: error.name(),
                value,
            }
        };

        let month = Month::try_from(month).map_err(field)?;
        let date = Date::from_calendar_date(year, month, day).map_err(field)?;
        let time = Time::from_hms_nano(hour, minute, second, nanosecond).map_err(field)?;

        Ok(Self(PrimitiveDateTime::new(date, time)))
    }

    /// Midnight at the start of the given date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, RangeError> {
        Self::new(year, month, day, 0, 0, 0, 0)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u8 {
        self.0.month().into()
    }

    pub fn day(&self) -> u8 {
        self.0.day()
    }

    pub fn hour(&self) -> u8 {
        self.0.hour()
    }

    pub fn minute(&self) -> u8 {
        self.0.minute()
    }

    pub fn second(&self) -> u8 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Whole seconds elapsed since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        u32::from(self.hour()) * 3600 + u32::from(self.minute()) * 60 + u32::from(self.second())
    }

    /// Signed number of days from 1900-01-01 to this date.
    pub fn days_since_1900(&self) -> i64 {
        (self.0.date() - EPOCH_1900).whole_days()
    }

    /// Build a timestamp from a stored day offset and time of day.
    ///
    /// `days` must be within the `DATETIME` range, which `StoredDatetime` guarantees.
    pub(crate) fn from_stored(
        days: i32,
        time_of_day: QuantizedTimeOfDay,
        nanosecond: u32,
    ) -> Self {
        let date = EPOCH_1900 + Duration::days(days.into());
        let time = Time::MIDNIGHT
            + Duration::seconds(time_of_day.seconds_of_day().into())
            + Duration::nanoseconds(nanosecond.into());

        Self(PrimitiveDateTime::new(date, time))
    }

    pub(crate) fn with_nanosecond(self, nanosecond: u32) -> Result<Self, RangeError> {
        self.0
            .replace_nanosecond(nanosecond)
            .map(Self)
            .map_err(|_| RangeError::Field {
                field: "nanosecond",
                value: nanosecond.into(),
            })
    }

    /// The same sub-second offset one whole second later, rolling over into the next minute,
    /// hour, day, month or year as needed.
    pub(crate) fn next_second(&self) -> Result<Self, RangeError> {
        self.0
            .checked_add(Duration::SECOND)
            .map(Self)
            .ok_or(RangeError::Year {
                year: i64::from(self.year()) + 1,
            })
    }
}

impl From<PrimitiveDateTime> for CalendarTimestamp {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value)
    }
}

impl From<CalendarTimestamp> for PrimitiveDateTime {
    fn from(value: CalendarTimestamp) -> Self {
        value.0
    }
}

impl Display for CalendarTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        )?;

        if self.nanosecond() != 0 {
            write!(f, ".{:09}", self.nanosecond())?;
        }

        Ok(())
    }
}

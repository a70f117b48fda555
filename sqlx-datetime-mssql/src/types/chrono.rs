use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use sqlx_datetime_core::{BoxDynError, Decode, Encode, IsNull};

use crate::datetime::{CalendarTimestamp, STORED_SIZE};
use crate::error::RangeError;
use crate::types::Type;
use crate::{Mssql, MssqlTypeInfo, MssqlValueRef};

fn field(field: &'static str, value: u32) -> Result<u8, RangeError> {
    u8::try_from(value).map_err(|_| RangeError::Field {
        field,
        value: value.into(),
    })
}

/// Fails for a leap second, which `chrono` stores as a nanosecond past one billion.
impl TryFrom<NaiveDateTime> for CalendarTimestamp {
    type Error = RangeError;

    fn try_from(value: NaiveDateTime) -> Result<Self, RangeError> {
        CalendarTimestamp::new(
            value.year(),
            field("month", value.month())?,
            field("day", value.day())?,
            field("hour", value.hour())?,
            field("minute", value.minute())?,
            field("second", value.second())?,
            value.nanosecond(),
        )
    }
}

impl TryFrom<CalendarTimestamp> for NaiveDateTime {
    type Error = RangeError;

    fn try_from(value: CalendarTimestamp) -> Result<Self, RangeError> {
        NaiveDate::from_ymd_opt(value.year(), value.month().into(), value.day().into())
            .and_then(|date| {
                date.and_hms_nano_opt(
                    value.hour().into(),
                    value.minute().into(),
                    value.second().into(),
                    value.nanosecond(),
                )
            })
            .ok_or(RangeError::Year {
                year: value.year().into(),
            })
    }
}

impl Type<Mssql> for NaiveDateTime {
    fn type_info() -> MssqlTypeInfo {
        MssqlTypeInfo::DATETIME
    }

    fn compatible(ty: &MssqlTypeInfo) -> bool {
        <CalendarTimestamp as Type<Mssql>>::compatible(ty)
    }
}

impl Encode<'_, Mssql> for NaiveDateTime {
    fn encode_by_ref(&self, buf: &mut Vec<u8>) -> Result<IsNull, BoxDynError> {
        let value = CalendarTimestamp::try_from(*self)?;

        Encode::<Mssql>::encode(value, buf)
    }

    fn size_hint(&self) -> usize {
        STORED_SIZE
    }
}

impl<'r> Decode<'r, Mssql> for NaiveDateTime {
    fn decode(value: MssqlValueRef<'r>) -> Result<Self, BoxDynError> {
        let value: CalendarTimestamp = Decode::<Mssql>::decode(value)?;

        Ok(NaiveDateTime::try_from(value)?)
    }
}

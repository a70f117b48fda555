use sqlx_datetime_core::{BoxDynError, Decode, Encode, IsNull};
use time::PrimitiveDateTime;

use crate::datetime::{CalendarTimestamp, STORED_SIZE};
use crate::types::Type;
use crate::{Mssql, MssqlTypeInfo, MssqlValueRef};

impl Type<Mssql> for PrimitiveDateTime {
    fn type_info() -> MssqlTypeInfo {
        MssqlTypeInfo::DATETIME
    }

    fn compatible(ty: &MssqlTypeInfo) -> bool {
        <CalendarTimestamp as Type<Mssql>>::compatible(ty)
    }
}

impl Encode<'_, Mssql> for PrimitiveDateTime {
    fn encode_by_ref(&self, buf: &mut Vec<u8>) -> Result<IsNull, BoxDynError> {
        Encode::<Mssql>::encode(CalendarTimestamp::from(*self), buf)
    }

    fn size_hint(&self) -> usize {
        STORED_SIZE
    }
}

impl<'r> Decode<'r, Mssql> for PrimitiveDateTime {
    fn decode(value: MssqlValueRef<'r>) -> Result<Self, BoxDynError> {
        let value: CalendarTimestamp = Decode::<Mssql>::decode(value)?;

        Ok(value.into())
    }
}

use sqlx_datetime_core::{BoxDynError, Decode, Encode, IsNull};

use crate::datetime::{CalendarTimestamp, DatetimeDecoder, NativeDatetimeEncoder, STORED_SIZE};
use crate::type_info::DataType;
use crate::types::Type;
use crate::{Mssql, MssqlTypeInfo, MssqlValueRef};

impl Type<Mssql> for CalendarTimestamp {
    fn type_info() -> MssqlTypeInfo {
        MssqlTypeInfo::DATETIME
    }

    fn compatible(ty: &MssqlTypeInfo) -> bool {
        matches!(ty.data_type(), DataType::DateTime | DataType::DateTimeN)
            && usize::from(ty.size()) == STORED_SIZE
    }
}

impl Encode<'_, Mssql> for CalendarTimestamp {
    fn encode_by_ref(&self, buf: &mut Vec<u8>) -> Result<IsNull, BoxDynError> {
        NativeDatetimeEncoder::new().encode_stored(self)?.encode(buf);

        Ok(IsNull::No)
    }

    fn size_hint(&self) -> usize {
        STORED_SIZE
    }
}

impl<'r> Decode<'r, Mssql> for CalendarTimestamp {
    fn decode(value: MssqlValueRef<'r>) -> Result<Self, BoxDynError> {
        Ok(DatetimeDecoder::new().decode_bytes(value.as_bytes()?)?)
    }
}

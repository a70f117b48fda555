use std::borrow::Cow;

use sqlx_datetime_core::error::UnexpectedNullError;
use sqlx_datetime_core::io::BufExt;
use sqlx_datetime_core::{err_protocol, BoxDynError, Error, ValueRef};

use crate::datetime::STORED_SIZE;
use crate::{Mssql, MssqlTypeInfo};

/// Implementation of [`ValueRef`] for MSSQL.
#[derive(Debug, Clone)]
pub struct MssqlValueRef<'r> {
    type_info: MssqlTypeInfo,
    data: Option<&'r [u8]>,
}

impl<'r> MssqlValueRef<'r> {
    pub fn new(type_info: MssqlTypeInfo, data: Option<&'r [u8]>) -> Self {
        Self { type_info, data }
    }

    /// Take the next column value of the given type from the front of a row buffer.
    ///
    /// `DATETIME` columns are a bare 8 bytes; `DATETIMN` columns carry a length byte, with `0`
    /// meaning `NULL`. On error `buf` is left where it was.
    pub fn from_row(type_info: MssqlTypeInfo, buf: &mut &'r [u8]) -> Result<Self, Error> {
        let mut rest = *buf;

        let len = if type_info.is_nullable() {
            usize::from(rest.read_u8()?)
        } else {
            STORED_SIZE
        };

        if len == 0 {
            *buf = rest;
            return Ok(Self::new(type_info, None));
        }

        if rest.len() < len {
            return Err(err_protocol!(
                "expected {} bytes for a {} value, got {}",
                len,
                type_info,
                rest.len()
            ));
        }

        let (data, rest) = rest.split_at(len);
        *buf = rest;

        Ok(Self::new(type_info, Some(data)))
    }

    /// The raw bytes of this value.
    pub fn as_bytes(&self) -> Result<&'r [u8], BoxDynError> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(UnexpectedNullError.into()),
        }
    }
}

impl<'r> ValueRef<'r> for MssqlValueRef<'r> {
    type Database = Mssql;

    fn type_info(&self) -> Cow<'_, MssqlTypeInfo> {
        Cow::Borrowed(&self.type_info)
    }

    fn is_null(&self) -> bool {
        self.data.is_none()
    }
}

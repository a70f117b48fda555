use std::fmt::{self, Display, Formatter};

use sqlx_datetime_core::io::BufExt;
use sqlx_datetime_core::{err_protocol, Error, TypeInfo};

use crate::datetime::STORED_SIZE;

/// The TDS data type token of a column or parameter.
///
/// Only the tokens the `DATETIME` codec deals in are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    Null = 0x1f,

    /// Fixed-length `DATETIME`, always 8 bytes.
    DateTime = 0x3d,

    /// Variable-length `DATETIME` used for nullable columns, prefixed by a one-byte length.
    DateTimeN = 0x6f,
}

impl TryFrom<u8> for DataType {
    type Error = Error;

    fn try_from(token: u8) -> Result<Self, Error> {
        Ok(match token {
            0x1f => DataType::Null,
            0x3d => DataType::DateTime,
            0x6f => DataType::DateTimeN,

            _ => {
                return Err(err_protocol!("unsupported data type 0x{:02x}", token));
            }
        })
    }
}

/// Type information for a MSSQL type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MssqlTypeInfo {
    pub(crate) ty: DataType,
    pub(crate) size: u8,
}

impl MssqlTypeInfo {
    pub const NULL: Self = Self {
        ty: DataType::Null,
        size: 0,
    };

    #[allow(clippy::cast_possible_truncation)]
    pub const DATETIME: Self = Self {
        ty: DataType::DateTime,
        size: STORED_SIZE as u8,
    };

    #[allow(clippy::cast_possible_truncation)]
    pub const DATETIMN: Self = Self {
        ty: DataType::DateTimeN,
        size: STORED_SIZE as u8,
    };

    /// Read a `TYPE_INFO` token and, for variable-length types, its maximum length byte.
    pub fn from_token(buf: &mut &[u8]) -> Result<Self, Error> {
        let ty = DataType::try_from(buf.read_u8()?)?;

        let size = match ty {
            DataType::Null => 0,
            DataType::DateTime => Self::DATETIME.size,
            DataType::DateTimeN => buf.read_u8()?,
        };

        Ok(Self { ty, size })
    }

    /// Append the `TYPE_INFO` token for this type.
    pub fn put_token(&self, buf: &mut Vec<u8>) {
        buf.push(self.ty as u8);

        if self.ty == DataType::DateTimeN {
            buf.push(self.size);
        }
    }

    pub fn data_type(&self) -> DataType {
        self.ty
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the value is framed with a length byte.
    pub(crate) fn is_nullable(&self) -> bool {
        self.ty == DataType::DateTimeN
    }
}

impl Display for MssqlTypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TypeInfo for MssqlTypeInfo {
    fn is_null(&self) -> bool {
        self.ty == DataType::Null
    }

    fn name(&self) -> &str {
        match (self.ty, self.size) {
            (DataType::Null, _) => "NULL",
            // a 4-byte DATETIMN carries a SMALLDATETIME
            (DataType::DateTimeN, 4) => "SMALLDATETIME",
            (DataType::DateTime | DataType::DateTimeN, _) => "DATETIME",
        }
    }

    fn type_compatible(&self, other: &Self) -> bool {
        let datetime = |ty: &Self| {
            matches!(ty.ty, DataType::DateTime | DataType::DateTimeN)
                && usize::from(ty.size) == STORED_SIZE
        };

        (datetime(self) && datetime(other)) || self == other
    }
}

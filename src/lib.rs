#![cfg_attr(docsrs, feature(doc_cfg))]
//! Consistent conversion of calendar timestamps to and from the Microsoft SQL Server `DATETIME`
//! type.
//!
//! `DATETIME` stores time of day on a grid of 1/300 second ticks. A value can be sent as text, as
//! a native parameter or as part of a bulk load; this crate makes sure all three round the same
//! instant to the same tick, and that every stored value reads back the same way.
//!
//! ```rust
//! # #[cfg(feature = "mssql")]
//! # fn main() -> sqlx_datetime::Result<()> {
//! use sqlx_datetime::mssql::{decode_datetime, encode_datetime, parse_textual_datetime};
//!
//! let from_text = parse_textual_datetime("2025-04-11T10:30:42.005Z")?;
//! assert_eq!(from_text.to_string(), "2025-04-11T10:30:42.006666667");
//!
//! let stored = encode_datetime(&from_text)?;
//! assert_eq!(decode_datetime(stored), from_text);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "mssql"))]
//! # fn main() {}
//! ```

pub use sqlx_datetime_core::error::{self, BoxDynError, Error, Result};
pub use sqlx_datetime_core::{database, decode, encode, io, type_info, types, value};
pub use sqlx_datetime_core::{Database, Decode, Encode, IsNull, Type, TypeInfo, ValueRef};

#[cfg(feature = "mssql")]
#[cfg_attr(docsrs, doc(cfg(feature = "mssql")))]
#[doc(inline)]
pub use sqlx_datetime_mssql::{self as mssql, Mssql, MssqlDatetimeOptions};

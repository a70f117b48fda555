//! **MSSQL** `DATETIME` codec for sqlx-datetime.
//!
//! Converts calendar timestamps to and from the fixed-precision `DATETIME` storage format, so that
//! textual parameters, native parameters and bulk-load rows all store the same instant the same
//! way. See [`datetime`] for the conversion paths and [`types`] for the Rust types that can be
//! bound and decoded.
#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(future_incompatible)]
#![warn(clippy::needless_borrow)]
#![warn(clippy::use_self)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]

pub mod datetime;
mod database;
mod error;
mod options;
mod type_info;
pub mod types;
mod value;

pub use database::Mssql;
pub use datetime::{
    decode_datetime, encode_datetime, parse_textual_datetime, quantize, ticks_to_nanos,
    CalendarTimestamp, StoredDatetime,
};
pub use error::{ParseError, ParseErrorKind, RangeError};
pub use options::{MssqlDatetimeOptions, OffsetSuffix};
pub use type_info::{DataType, MssqlTypeInfo};
pub use value::MssqlValueRef;

//! Types for working with errors produced by sqlx-datetime.

use std::any::type_name;
use std::error::Error as StdError;
use std::result::Result as StdResult;

use crate::database::Database;
use crate::type_info::TypeInfo;

/// A specialized `Result` type for sqlx-datetime.
pub type Result<T, E = Error> = StdResult<T, E>;

// Convenience type alias for the `Encode` and `Decode` seams.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// An unexpected `NULL` was encountered during decoding.
///
/// Returned from [`Decode`][crate::decode::Decode] if the value from the database is `NULL`,
/// and you are not decoding into an `Option`.
#[derive(thiserror::Error, Debug)]
#[error("unexpected null; try decoding as an `Option`")]
pub struct UnexpectedNullError;

/// Represents all the ways a method can fail within sqlx-datetime.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Error occurred while parsing configuration (a connection URL or its properties).
    #[error("error with configuration: {0}")]
    Configuration(#[source] BoxDynError),

    /// Textual input could not be parsed into a value.
    #[error("error occurred while parsing: {0}")]
    Parse(#[source] BoxDynError),

    /// A value is outside the range the database type can represent.
    #[error("value out of range: {0}")]
    Range(#[source] BoxDynError),

    /// Unexpected or invalid data encountered while reading or writing a binary layout.
    ///
    /// This should indicate there is a programming error in a driver or there
    /// is something corrupted with the data handed to it.
    #[error("encountered unexpected or invalid data: {0}")]
    Protocol(String),

    /// Error occurred while encoding a value.
    #[error("error occurred while encoding a value: {0}")]
    Encode(#[source] BoxDynError),

    /// Error occurred while decoding a value.
    #[error("error occurred while decoding: {0}")]
    Decode(#[source] BoxDynError),
}

impl Error {
    #[doc(hidden)]
    #[inline]
    pub fn config(err: impl StdError + Send + Sync + 'static) -> Self {
        Error::Configuration(err.into())
    }

    #[doc(hidden)]
    #[inline]
    pub fn decode(err: impl Into<BoxDynError>) -> Self {
        Error::Decode(err.into())
    }

    #[doc(hidden)]
    #[inline]
    pub fn encode(err: impl Into<BoxDynError>) -> Self {
        Error::Encode(err.into())
    }
}

pub fn mismatched_types<DB: Database, T>(ty: &DB::TypeInfo) -> BoxDynError {
    format!(
        "mismatched types; Rust type `{}` is not compatible with SQL type `{}`",
        type_name::<T>(),
        ty.name()
    )
    .into()
}

// Format an error message as a `Protocol` error
#[macro_export]
macro_rules! err_protocol {
    ($($fmt_args:tt)*) => {
        $crate::error::Error::Protocol(
            format!(
                "{} ({}:{})",
                // Note: the format string needs to be unmodified (e.g. by `concat!()`)
                // for implicit formatting arguments to work
                format_args!($($fmt_args)*),
                module_path!(),
                line!(),
            )
        )
    };
}

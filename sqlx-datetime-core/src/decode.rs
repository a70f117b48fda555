//! Provides [`Decode`] for decoding values from the database.

use crate::database::Database;
use crate::error::BoxDynError;
use crate::value::ValueRef;

/// A type that can be decoded from the database.
///
/// ## How can I implement `Decode`?
///
/// A manual implementation of `Decode` can be useful when adding support for
/// types externally to sqlx-datetime. Decode the raw value by delegating to a type that is
/// already supported (e.g. `CalendarTimestamp`) and converting from there:
///
/// ```rust,ignore
/// struct Stamp(chrono::NaiveDateTime);
///
/// impl<'r, DB: Database> Decode<'r, DB> for Stamp
/// where
///     chrono::NaiveDateTime: Decode<'r, DB>,
/// {
///     fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
///         Ok(Stamp(chrono::NaiveDateTime::decode(value)?))
///     }
/// }
/// ```
pub trait Decode<'r, DB: Database>: Sized {
    /// Decode a new value of this type using a raw value from the database.
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError>;
}

// implement `Decode` for Option<T> for all SQL types
impl<'r, DB, T> Decode<'r, DB> for Option<T>
where
    DB: Database,
    T: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::decode(value)?))
        }
    }
}

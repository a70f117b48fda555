//! Traits to represent a database driver.
//!
//! # Support
//!
//! The only driver in this workspace is `sqlx-datetime-mssql`, which implements [`Database`]
//! for the `DATETIME` family of Microsoft SQL Server types. The trait exists so that the
//! [`Type`][crate::types::Type], [`Encode`][crate::encode::Encode] and
//! [`Decode`][crate::decode::Decode] seams stay generic, the same way a full driver would see them.

use std::fmt::Debug;

use crate::type_info::TypeInfo;
use crate::value::ValueRef;

/// A database driver.
///
/// This trait encapsulates a complete set of traits that implement a driver for a
/// specific database (e.g., MSSQL).
pub trait Database: 'static + Sized + Send + Sync + Debug {
    /// The type used to represent metadata associated with a SQL type.
    type TypeInfo: TypeInfo;

    /// The type used to hold a reference to a not-yet-decoded value that has just been
    /// received from the database.
    type ValueRef<'r>: ValueRef<'r, Database = Self>;

    /// The concrete type used as a buffer for arguments while encoding.
    type ArgumentBuffer<'q>;

    /// The display name for this database driver.
    const NAME: &'static str;
}

use std::fmt::{Debug, Display};

/// Provides information about a SQL type for the database driver.
pub trait TypeInfo: Debug + Display + Clone + PartialEq<Self> + Send + Sync {
    fn is_null(&self) -> bool;

    /// Returns the database system name of the type. Length specifiers should not be included.
    /// Common type names are `DATETIME`, `DATETIME2`, `SMALLDATETIME`. All type names should be
    /// uppercase.
    fn name(&self) -> &str;

    /// Return `true` if `self` and `other` represent mutually compatible types.
    ///
    /// Defaults to `self == other`.
    fn type_compatible(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self == other
    }
}

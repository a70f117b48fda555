use sqlx_datetime_core::Database;

use crate::{MssqlTypeInfo, MssqlValueRef};

/// MSSQL database driver.
#[derive(Debug)]
pub struct Mssql;

impl Database for Mssql {
    type TypeInfo = MssqlTypeInfo;

    type ValueRef<'r> = MssqlValueRef<'r>;

    type ArgumentBuffer<'q> = Vec<u8>;

    const NAME: &'static str = "MSSQL";
}

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::{anyhow, bail};
use sqlx_datetime::error::mismatched_types;
use sqlx_datetime::io::BufMutExt;
use sqlx_datetime::mssql::datetime::{BulkDatetimeEncoder, TextualDatetimeParser};
use sqlx_datetime::mssql::{
    CalendarTimestamp, Mssql, MssqlDatetimeOptions, MssqlTypeInfo, MssqlValueRef,
};
use sqlx_datetime::{Decode, Encode, Error, Type, TypeInfo};

pub fn setup_if_needed() {
    let _ = dotenvy::dotenv();
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A stand-in for a server holding single-column, nullable `DATETIME` tables.
///
/// Every row is kept in the `DATETIMN` wire form, exactly as the server would return it, so
/// reading a table exercises the same decode path a result set does. Rows come back in the order
/// they were inserted.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    options: MssqlDatetimeOptions,
    tables: Arc<Mutex<BTreeMap<String, Table>>>,
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<u8>,
    count: usize,
}

/// Drops its table when it goes out of scope.
#[must_use = "the table is dropped as soon as the guard is"]
#[derive(Debug)]
pub struct TableGuard {
    db: MemoryDatabase,
    name: String,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the database from `DATABASE_URL` when it is set.
    pub fn from_env() -> anyhow::Result<Self> {
        setup_if_needed();
        Ok(Self::with_options(MssqlDatetimeOptions::from_env()?))
    }

    pub fn with_options(options: MssqlDatetimeOptions) -> Self {
        Self {
            options,
            tables: Default::default(),
        }
    }

    pub fn column_type(&self) -> MssqlTypeInfo {
        MssqlTypeInfo::DATETIMN
    }

    pub fn create_table(&self, name: &str) -> anyhow::Result<TableGuard> {
        let mut tables = self.lock()?;

        if tables.contains_key(name) {
            bail!("table {name:?} already exists");
        }

        tables.insert(name.to_owned(), Table::default());
        log::debug!("created table {name:?}");

        Ok(TableGuard {
            db: self.clone(),
            name: name.to_owned(),
        })
    }

    /// Insert a textual literal, as `INSERT INTO t VALUES ('2025-04-11T10:30:42.005Z')` would.
    pub fn insert_text(&self, table: &str, text: &str) -> anyhow::Result<()> {
        let stored = TextualDatetimeParser::new()
            .with_options(&self.options)
            .parse_stored(text)?;

        self.with_table(table, |table| {
            table.rows.put_u8_length_prefixed(|buf| {
                stored.encode(buf);
                Ok(())
            })?;

            table.count += 1;
            Ok(())
        })
    }

    /// Insert a value bound as a native parameter.
    pub fn insert<'q, T>(&self, table: &str, value: T) -> anyhow::Result<()>
    where
        T: Encode<'q, Mssql> + Type<Mssql>,
    {
        let ty = value.produces().unwrap_or_else(<T as Type<Mssql>>::type_info);
        if !ty.type_compatible(&self.column_type()) {
            return Err(Error::encode(mismatched_types::<Mssql, T>(&ty)).into());
        }

        let mut payload = Vec::with_capacity(value.size_hint());
        let is_null = value.encode_by_ref(&mut payload).map_err(Error::encode)?;

        self.with_table(table, |table| {
            if is_null.is_null() {
                // DATETIMN writes a NULL as a zero length
                table.rows.push(0);
            } else {
                table.rows.put_u8_length_prefixed(|buf| {
                    buf.extend_from_slice(&payload);
                    Ok(())
                })?;
            }

            table.count += 1;
            Ok(())
        })
    }

    /// Append rows through the bulk-load encoder.
    pub fn bulk_insert<I>(&self, table: &str, rows: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = Option<CalendarTimestamp>>,
    {
        let encoder = BulkDatetimeEncoder::new().with_options(&self.options);

        self.with_table(table, |table| {
            for row in rows {
                encoder.encode_nullable(row.as_ref(), &mut table.rows)?;
                table.count += 1;
            }

            Ok(())
        })
    }

    /// Every row of `table`, in insertion order.
    pub fn select_all<T>(&self, table: &str) -> anyhow::Result<Vec<T>>
    where
        T: for<'r> Decode<'r, Mssql> + Type<Mssql>,
    {
        let ty = self.column_type();
        if !T::compatible(&ty) {
            return Err(Error::decode(mismatched_types::<Mssql, T>(&ty)).into());
        }

        let tables = self.lock()?;
        let table = tables
            .get(table)
            .ok_or_else(|| anyhow!("no such table {table:?}"))?;

        let mut buf = &table.rows[..];
        let mut rows = Vec::with_capacity(table.count);

        while !buf.is_empty() {
            let value = MssqlValueRef::from_row(ty.clone(), &mut buf)?;
            rows.push(T::decode(value).map_err(Error::decode)?);
        }

        Ok(rows)
    }

    pub fn count(&self, table: &str) -> anyhow::Result<usize> {
        let tables = self.lock()?;

        tables
            .get(table)
            .map(|table| table.count)
            .ok_or_else(|| anyhow!("no such table {table:?}"))
    }

    pub fn has_table(&self, table: &str) -> bool {
        self.lock().is_ok_and(|tables| tables.contains_key(table))
    }

    fn with_table<R>(
        &self,
        table: &str,
        f: impl FnOnce(&mut Table) -> Result<R, Error>,
    ) -> anyhow::Result<R> {
        let mut tables = self.lock()?;
        let table = tables
            .get_mut(table)
            .ok_or_else(|| anyhow!("no such table {table:?}"))?;

        Ok(f(table)?)
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, BTreeMap<String, Table>>> {
        self.tables
            .lock()
            .map_err(|_| anyhow!("a previous test panicked while holding the table lock"))
    }
}

impl TableGuard {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for TableGuard {
    fn drop(&mut self) {
        if let Ok(mut tables) = self.db.tables.lock() {
            tables.remove(&self.name);
            log::debug!("dropped table {:?}", self.name);
        }
    }
}

// Insert each literal as text and its expected value as a native parameter; both must read back
// as the expected value.
#[macro_export]
macro_rules! test_datetime {
    ($name:ident<$ty:ty>($($text:literal == $value:expr),+ $(,)?)) => {
        #[test]
        fn $name() -> anyhow::Result<()> {
            $crate::setup_if_needed();

            let db = $crate::MemoryDatabase::new();
            let table = db.create_table(stringify!($name))?;

            $(
                let expected: $ty = $value;

                db.insert_text(table.name(), $text)?;
                db.insert(table.name(), &expected)?;

                let rows: Vec<$ty> = db.select_all(table.name())?;
                let [.., from_text, from_native] = &rows[..] else {
                    anyhow::bail!("expected at least two rows, got {}", rows.len());
                };

                assert_eq!(*from_text, expected, "text: {}", $text);
                assert_eq!(*from_native, expected, "native: {:?}", expected);
            )+

            Ok(())
        }
    };

    ($name:ident($($text:literal == $value:expr),+ $(,)?)) => {
        $crate::test_datetime!($name<$crate::__CalendarTimestamp>($($text == $value),+));
    };
}

#[doc(hidden)]
pub use sqlx_datetime::mssql::CalendarTimestamp as __CalendarTimestamp;

//! Conversions between Rust and **MSSQL** types.
//!
//! # Types
//!
//! | Rust type                             | MSSQL type(s)                                        |
//! |---------------------------------------|------------------------------------------------------|
//! | `CalendarTimestamp`                   | DATETIME                                             |
//!
//! ### [`chrono`](https://crates.io/crates/chrono)
//!
//! Requires the `chrono` Cargo feature flag.
//!
//! | Rust type                             | MSSQL type(s)                                        |
//! |---------------------------------------|------------------------------------------------------|
//! | `chrono::NaiveDateTime`               | DATETIME                                             |
//!
//! ### [`time`](https://crates.io/crates/time)
//!
//! Requires the `time` Cargo feature flag.
//!
//! | Rust type                             | MSSQL type(s)                                        |
//! |---------------------------------------|------------------------------------------------------|
//! | `time::PrimitiveDateTime`             | DATETIME                                             |
//!
//! Values are rounded to the 1/300 second `DATETIME` grid when encoded, and decode to the
//! canonical nanosecond offset of their tick.
//!
//! # Nullable
//!
//! In addition, `Option<T>` is supported where `T` implements `Type`. An `Option<T>` represents
//! a potentially `NULL` value from MSSQL.

pub use sqlx_datetime_core::types::Type;

mod calendar;

#[cfg(feature = "chrono")]
mod chrono;

#[cfg(feature = "time")]
mod time;

//! Core of sqlx-datetime, the driver-agnostic traits and helpers shared by the driver crates.
//!
//! Not intended to be used directly; see the `sqlx-datetime` facade crate.
#![warn(future_incompatible, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]

#[macro_use]
pub mod error;

#[macro_use]
pub mod logger;

pub mod database;
pub mod decode;
pub mod encode;
pub mod io;
pub mod type_info;
pub mod types;
pub mod value;

pub use database::Database;
pub use decode::Decode;
pub use encode::{Encode, IsNull};
pub use error::{BoxDynError, Error, Result};
pub use type_info::TypeInfo;
pub use types::Type;
pub use value::ValueRef;

pub use url::{self, Url};

/// sqlx-datetime uses `tracing` for its own diagnostics; the driver crates reach it through here
/// so they don't need to name it as a direct dependency for the logging macros to expand.
#[doc(hidden)]
pub use tracing;

use std::env::VarError;
use std::str::FromStr;

use log::LevelFilter;
use sqlx_datetime_core::logger::private_level_filter_to_trace_level;
use sqlx_datetime_core::Error;

mod parse;

/// Options which can be used to configure how `DATETIME` values are converted.
///
/// A value of `MssqlDatetimeOptions` can be parsed from a connection URL; properties the codec
/// does not know are ignored, so the same URL the rest of the driver consumes can be passed as-is.
///
/// ```text
/// mssql://[host][/database][?properties]
/// ```
///
/// ## Properties
///
/// |Parameter|Default|Description|
/// |---------|-------|-----------|
/// | `datetime-offset` | `ignore` | What to do with a numeric `+HH:MM` suffix on a textual timestamp. See [`OffsetSuffix`]. |
/// | `datetime-log-carry` | `trace` | Level at which a rounding carry into the next second is logged. `off` disables it. |
///
/// # Example
///
/// ```rust
/// # fn example() -> sqlx_datetime_core::Result<()> {
/// use sqlx_datetime_mssql::{MssqlDatetimeOptions, OffsetSuffix};
///
/// let opts: MssqlDatetimeOptions =
///     "mssql://sa@localhost/master?datetime-offset=reject".parse()?;
///
/// assert_eq!(opts.get_offset_suffix(), OffsetSuffix::Reject);
///
/// // Log carries where they'll be seen while debugging.
/// let opts = opts.log_carry(log::LevelFilter::Debug);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MssqlDatetimeOptions {
    pub(crate) offset_suffix: OffsetSuffix,
    pub(crate) log_carry: LevelFilter,
}

/// Handling of a timezone offset at the end of a textual timestamp.
///
/// The codec never converts between timezones. A trailing `Z` is always accepted and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetSuffix {
    /// Strip a `+HH:MM` / `-HH:MM` suffix and keep the clock fields as written.
    #[default]
    Ignore,

    /// Fail to parse any text carrying a numeric offset.
    Reject,
}

impl FromStr for OffsetSuffix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match &*s.to_ascii_lowercase() {
            "ignore" => OffsetSuffix::Ignore,
            "reject" => OffsetSuffix::Reject,

            _ => {
                return Err(Error::Configuration(
                    format!("unknown value {s:?} for `datetime-offset`").into(),
                ));
            }
        })
    }
}

impl Default for MssqlDatetimeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl MssqlDatetimeOptions {
    /// Creates a new, default set of options ready for configuration.
    pub fn new() -> Self {
        Self {
            offset_suffix: OffsetSuffix::Ignore,
            log_carry: LevelFilter::Trace,
        }
    }

    /// Read options from the `DATABASE_URL` environment variable, loading a `.env` file first if
    /// one is present.
    ///
    /// Falls back to the defaults when the variable is not set.
    pub fn from_env() -> Result<Self, Error> {
        match dotenvy::var("DATABASE_URL") {
            Ok(url) => url.parse(),
            Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(Self::new()),
            Err(e) => Err(Error::config(e)),
        }
    }

    /// Sets how a numeric timezone offset on textual input is handled.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use sqlx_datetime_mssql::{MssqlDatetimeOptions, OffsetSuffix};
    /// let options = MssqlDatetimeOptions::new()
    ///     .offset_suffix(OffsetSuffix::Reject);
    /// ```
    pub fn offset_suffix(mut self, offset_suffix: OffsetSuffix) -> Self {
        self.offset_suffix = offset_suffix;
        self
    }

    /// Sets the level at which rounding carries are logged.
    pub fn log_carry(mut self, level: LevelFilter) -> Self {
        self.log_carry = level;
        self
    }

    pub fn get_offset_suffix(&self) -> OffsetSuffix {
        self.offset_suffix
    }

    pub fn get_log_carry(&self) -> LevelFilter {
        self.log_carry
    }

    pub(crate) fn carry_level(&self) -> Option<tracing::Level> {
        private_level_filter_to_trace_level(self.log_carry)
    }
}

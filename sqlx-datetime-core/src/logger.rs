// Yes these look silly. `tracing` doesn't currently support dynamic levels
// https://github.com/tokio-rs/tracing/issues/372
#[doc(hidden)]
#[macro_export]
macro_rules! private_tracing_dynamic_enabled {
    (target: $target:expr, $level:expr) => {{
        use $crate::tracing::Level;

        match $level {
            Level::ERROR => $crate::tracing::enabled!(target: $target, Level::ERROR),
            Level::WARN => $crate::tracing::enabled!(target: $target, Level::WARN),
            Level::INFO => $crate::tracing::enabled!(target: $target, Level::INFO),
            Level::DEBUG => $crate::tracing::enabled!(target: $target, Level::DEBUG),
            Level::TRACE => $crate::tracing::enabled!(target: $target, Level::TRACE),
        }
    }};
    ($level:expr) => {{
        $crate::private_tracing_dynamic_enabled!(target: module_path!(), $level)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! private_tracing_dynamic_event {
    (target: $target:expr, $level:expr, $($args:tt)*) => {{
        use $crate::tracing::Level;

        match $level {
            Level::ERROR => $crate::tracing::event!(target: $target, Level::ERROR, $($args)*),
            Level::WARN => $crate::tracing::event!(target: $target, Level::WARN, $($args)*),
            Level::INFO => $crate::tracing::event!(target: $target, Level::INFO, $($args)*),
            Level::DEBUG => $crate::tracing::event!(target: $target, Level::DEBUG, $($args)*),
            Level::TRACE => $crate::tracing::event!(target: $target, Level::TRACE, $($args)*),
        }
    }};
}

/// Maps a configured `log` filter onto the `tracing` level events are emitted at.
///
/// Returns `None` for [`LevelFilter::Off`][log::LevelFilter::Off].
#[doc(hidden)]
pub fn private_level_filter_to_trace_level(filter: log::LevelFilter) -> Option<tracing::Level> {
    match filter {
        log::LevelFilter::Error => Some(tracing::Level::ERROR),
        log::LevelFilter::Warn => Some(tracing::Level::WARN),
        log::LevelFilter::Info => Some(tracing::Level::INFO),
        log::LevelFilter::Debug => Some(tracing::Level::DEBUG),
        log::LevelFilter::Trace => Some(tracing::Level::TRACE),
        log::LevelFilter::Off => None,
    }
}

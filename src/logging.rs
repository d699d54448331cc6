//! Internal logging helpers for structured extractor events.

/// Single logging target for structextract.
pub(crate) const LOG_TARGET: &str = "structextract";

macro_rules! extract_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use extract_log;

use std::env;

use once_cell::sync::Lazy;

use crate::constants::config::DEBUG_ENV;

#[doc(hidden)]
pub use nu_ansi_term::Color::Yellow as DebugColor;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var(DEBUG_ENV).map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED
}

/// Builds a message, appending the details only when debug output is enabled.
///
/// # Arguments
///
/// * `message` - The main message.
/// * `details` - Additional details shown in debug mode.
///
/// # Returns
///
/// A formatted string containing the message and, in debug mode, the details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Prints a debug line to stderr when `GPULABEL_DEBUG` is set to `true` or `1`.
///
/// Stdout is left untouched so the rendered label can be piped safely.
///
/// # Examples
///
/// ```
/// use gpulabel::debug;
///
/// debug!("Template selected");
/// debug!("Rendering {} characters with gpu={}", 12, 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::log::DebugColor.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", $crate::log::DebugColor.paint(format!($fmt, $($arg)*)));
        }
    };
}

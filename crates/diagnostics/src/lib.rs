//! Logging setup shared by the memfs workspace.
//!
//! Logging is off unless the `MEMFS_LOG` environment variable selects a level:
//! - `MEMFS_LOG=off` (default) - no logs
//! - `MEMFS_LOG=error` / `warn` - problems only
//! - `MEMFS_LOG=info` - tree construction summaries
//! - `MEMFS_LOG=debug` - every insert and lookup miss

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`].
pub const LOG_ENV_VAR: &str = "MEMFS_LOG";

static INIT: Once = Once::new();

/// Minimum level accepted by the stderr emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a `MEMFS_LOG` value. Returns `None` for unrecognized input.
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    fn emit_level(self) -> Option<emit::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(emit::Level::Error),
            LogLevel::Warn => Some(emit::Level::Warn),
            LogLevel::Info => Some(emit::Level::Info),
            LogLevel::Debug => Some(emit::Level::Debug),
        }
    }
}

/// Initialize diagnostics based on the `MEMFS_LOG` environment variable
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| "off".to_string());
        let parsed = LogLevel::from_env_value(&raw);

        let Some(level) = parsed.unwrap_or(LogLevel::Info).emit_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if parsed.is_none() {
            let value = raw.as_str();
            emit::warn!("Unknown MEMFS_LOG value '{value}', using 'info'", value: value);
        }

        // The runtime lives for the rest of the process.
        std::mem::forget(rt);
    });
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;

/// Log detailed diagnostics (individual inserts, lookup misses).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log basic operations users might want to see in normal usage.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log recoverable oddities worth noticing.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that prevent an operation from completing.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

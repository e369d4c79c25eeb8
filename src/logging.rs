//! Logging abstraction layer.
//!
//! The router logs through a small set of macros that forward to either the
//! [`log`](https://docs.rs/log) or the [`tracing`](https://docs.rs/tracing)
//! crate, selected by feature flag. Enable at most one of them.
//!
//! | Feature    | Backend         | Default |
//! |------------|-----------------|---------|
//! | `log`      | `log` crate     | yes     |
//! | `tracing`  | `tracing` crate | no      |
//!
//! With neither feature enabled the macros expand to nothing.
//!
//! | Macro          | Used for                                            |
//! |----------------|-----------------------------------------------------|
//! | `trace_log!`   | per-pattern matching attempts                       |
//! | `debug_log!`   | dispatch decisions, metadata updates                |
//! | `info_log!`    | route / fallback / metadata registration            |
//! | `warn_log!`    | failed or stale fetches                             |
//! | `error_log!`   | spawner refusing a task                             |
//!
//! ```ignore
//! use spa_navigator::{debug_log, warn_log};
//!
//! debug_log!("Dispatching view handler for '{}'", path);
//! warn_log!("Discarding stale fetch of '{}'", url);
//! ```
//!
//! The `cfg` checks are evaluated in the crate that expands the macro, so the
//! macros are meant for use inside this crate.

#[doc(hidden)]
#[macro_export]
macro_rules! __dispatch_log {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)*);
        #[cfg(feature = "log")]
        ::log::$level!($($arg)*);
    };
}

/// Emit a **trace**-level log message.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::__dispatch_log!(trace, $($arg)*)
    };
}

/// Emit a **debug**-level log message.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::__dispatch_log!(debug, $($arg)*)
    };
}

/// Emit an **info**-level log message.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::__dispatch_log!(info, $($arg)*)
    };
}

/// Emit a **warn**-level log message.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::__dispatch_log!(warn, $($arg)*)
    };
}

/// Emit an **error**-level log message.
///
/// Reserved for conditions the router cannot recover from on its own, such
/// as the spawner refusing the fetch task.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::__dispatch_log!(error, $($arg)*)
    };
}

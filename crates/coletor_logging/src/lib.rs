#![deny(missing_docs)]
//! Shared logging utilities for the coletor workspace.
//!
//! This crate provides the `coletor_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line logged
//! through the macros is prefixed with the sequence number of the user action
//! being processed, so one interaction can be followed across crates.

use std::cell::Cell;

#[doc(hidden)]
pub use log as __log;

thread_local! {
    /// Thread-local storage for the sequence number of the current user action.
    static ACTION_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// Sets the action sequence number for the current thread.
/// The host calls this once per dispatched user action.
pub fn set_action_seq(seq: u64) {
    ACTION_SEQ.with(|v| v.set(seq));
}

/// Advances the action sequence number by one and returns the new value.
pub fn next_action_seq() -> u64 {
    ACTION_SEQ.with(|v| {
        let next = v.get().wrapping_add(1);
        v.set(next);
        next
    })
}

/// Retrieves the action sequence number for the current thread.
/// Returns 0 before the first action has been dispatched.
pub fn action_seq() -> u64 {
    ACTION_SEQ.with(|v| v.get())
}

/// Logs a trace-level message tagged with the current action sequence.
#[macro_export]
macro_rules! coletor_trace {
    ($($arg:tt)*) => {{
        $crate::__log::trace!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the current action sequence.
#[macro_export]
macro_rules! coletor_debug {
    ($($arg:tt)*) => {{
        $crate::__log::debug!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the current action sequence.
#[macro_export]
macro_rules! coletor_info {
    ($($arg:tt)*) => {{
        $crate::__log::info!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the current action sequence.
#[macro_export]
macro_rules! coletor_warn {
    ($($arg:tt)*) => {{
        $crate::__log::warn!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the current action sequence.
#[macro_export]
macro_rules! coletor_error {
    ($($arg:tt)*) => {{
        $crate::__log::error!("[#{}] {}", $crate::action_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Never,
    )]);
}

#[cfg(test)]
mod tests {
    use super::{action_seq, next_action_seq, set_action_seq};

    #[test]
    fn action_seq_advances_per_thread() {
        set_action_seq(0);
        assert_eq!(action_seq(), 0);
        assert_eq!(next_action_seq(), 1);
        assert_eq!(next_action_seq(), 2);
        assert_eq!(action_seq(), 2);

        let other = std::thread::spawn(action_seq).join().unwrap();
        assert_eq!(other, 0);
    }

    #[test]
    fn macros_expand_without_logger() {
        set_action_seq(7);
        coletor_debug!("value={}", 42);
        coletor_info!("plain message");
        coletor_warn!("{} and {}", "a", "b");
    }
}

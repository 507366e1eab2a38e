//! Debug-only precondition checks.
//!
//! Programmer errors (an empty backing buffer, an out-of-range internal
//! index) are reported through [`debug_check!`](crate::debug_check). In debug
//! builds a failed check panics, unless checks were switched off through the
//! `FERRULE_DEBUG_CHECKS` environment variable or [`set_enabled`]. Release
//! builds compile the checks out entirely.
//!
//! Checks never change the `Result` returned by an operation. Conditions a
//! caller can reach with ordinary input (a full buffer, an oversized
//! request) are always reported as errors, never as check failures.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

/// Environment variable controlling debug checks.
///
/// `0`, `false`, `off` and `no` (case-insensitive) disable the checks. Any
/// other value, or an unset variable, leaves them enabled.
pub const ENV_VAR: &str = "FERRULE_DEBUG_CHECKS";

const UNSET: u8 = 0;
const FORCED_ON: u8 = 1;
const FORCED_OFF: u8 = 2;

static OVERRIDE: AtomicU8 = AtomicU8::new(UNSET);
static FROM_ENV: OnceLock<bool> = OnceLock::new();

/// Whether debug checks are currently active.
///
/// Always `false` in release builds.
pub fn enabled() -> bool {
    if !cfg!(debug_assertions) {
        return false;
    }
    match OVERRIDE.load(Ordering::Relaxed) {
        FORCED_ON => true,
        FORCED_OFF => false,
        _ => *FROM_ENV.get_or_init(read_env),
    }
}

/// Override the environment setting for the rest of the process.
///
/// `None` restores the environment-derived default.
pub fn set_enabled(enabled: Option<bool>) {
    let state = match enabled {
        Some(true) => FORCED_ON,
        Some(false) => FORCED_OFF,
        None => UNSET,
    };
    OVERRIDE.store(state, Ordering::Relaxed);
}

fn read_env() -> bool {
    match std::env::var(ENV_VAR) {
        Ok(value) => parse_toggle(&value),
        Err(_) => true,
    }
}

fn parse_toggle(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

/// Report a failed check. Called by [`debug_check!`](crate::debug_check).
#[cold]
#[track_caller]
pub fn check_failed(expr: &str, message: fmt::Arguments<'_>) -> ! {
    tracing::error!(check = expr, "{message}");
    panic!("ferrule: check failed: `{expr}`: {message}");
}

/// Assert a programmer-error precondition in debug builds.
///
/// Expands to nothing observable in release builds. In debug builds the
/// condition is evaluated only when [`check::enabled`](crate::check::enabled)
/// returns `true`.
///
/// ```
/// ferrule_core::debug_check!(1 + 1 == 2, "arithmetic is broken");
/// ```
#[macro_export]
macro_rules! debug_check {
    ($cond:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) && $crate::check::enabled() && !($cond) {
            $crate::check::check_failed(stringify!($cond), format_args!($($arg)+));
        }
    };
    ($cond:expr $(,)?) => {
        $crate::debug_check!($cond, "precondition violated")
    };
}

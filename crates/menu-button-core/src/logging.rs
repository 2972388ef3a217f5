//! Logging facilities.
//!
//! The widget crates use the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in the host application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("menu_button=debug")
//!         .init();
//! }
//! ```
//!
//! State transitions (open, close, focus moves) are logged at `debug`, key
//! dispatch at `trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "menu_button_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "menu_button_core::signal";
    /// Property system target.
    pub const PROPERTY: &str = "menu_button_core::property";
    /// Menu popup state machine.
    pub const MENU: &str = "menu_button::menu";
    /// Menu button trigger handling.
    pub const MENU_BUTTON: &str = "menu_button::menu_button";
    /// Typeahead search.
    pub const TYPEAHEAD: &str = "menu_button::typeahead";
    /// Document focus routing.
    pub const DOCUMENT: &str = "menu_button::document";
    /// Configuration loading.
    pub const CONFIG: &str = "menu_button::config";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for timing a whole event dispatch.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "menu_button::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with a consistent target.
#[macro_export]
macro_rules! menu_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "menu_button_core", $($arg)*)
    };
}

#[macro_export]
macro_rules! menu_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "menu_button_core", $($arg)*)
    };
}

//! Core systems for the accessible menu button.
//!
//! This crate provides the UI-agnostic building blocks the widget crate is
//! assembled from:
//!
//! - **Signal/Slot System**: Type-safe notification of state changes
//! - **Property System**: Values with change detection
//! - **Clock**: Injectable monotonic time source for timeouts
//! - **Logging**: Tracing targets and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use menu_button_core::Signal;
//!
//! let triggered = Signal::<String>::new();
//!
//! let conn_id = triggered.connect(|label| {
//!     println!("Performed: {}", label);
//! });
//!
//! triggered.emit("Action 1".to_string());
//! triggered.disconnect(conn_id);
//! ```
//!
//! # Property Example
//!
//! ```
//! use menu_button_core::{Property, Signal};
//!
//! struct OutputField {
//!     value: Property<String>,
//!     value_changed: Signal<String>,
//! }
//!
//! impl OutputField {
//!     fn write(&self, text: &str) {
//!         if self.value.set(text.to_string()) {
//!             self.value_changed.emit(text.to_string());
//!         }
//!     }
//! }
//! ```

pub mod clock;
pub mod logging;
pub mod property;
pub mod signal;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionId, Signal};

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);
static_assertions::assert_impl_all!(Property<String>: Send, Sync);

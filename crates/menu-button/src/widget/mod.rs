//! Widget system.
//!
//! This module contains the menu button widget and the pieces it is built
//! from:
//!
//! - [`events`]: the abstract key alphabet and widget events
//! - [`keyboard`]: conversion from DOM `KeyboardEvent.key` strings
//! - [`focus`]: which element of a widget holds focus
//! - [`widgets`]: [`MenuButton`](widgets::MenuButton), [`Menu`](widgets::Menu)
//!   and typeahead
//! - [`accessibility`]: ARIA snapshots and the AccessKit tree
//! - [`document`]: a host routing focus and input between widget instances

use std::collections::HashSet;

pub mod accessibility;
pub mod document;
pub mod events;
pub mod focus;
pub mod keyboard;
pub mod widgets;


pub use accessibility::{AccessibleRole, ElementSnapshot};
#[cfg(feature = "accessibility")]
pub use accessibility::{Accessible, WidgetNode};
pub use document::{Document, WidgetId};
pub use events::{
    FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers, WidgetEvent,
};
pub use focus::{FocusHandle, FocusTarget};

/// The interface a [`Document`] uses to drive a widget.
pub trait Widget: Send + Sync {
    /// The id of the widget's focus entry element.
    fn id(&self) -> &str;

    /// Every element id the widget owns.
    fn element_ids(&self) -> HashSet<&str>;

    /// The widget's focus record.
    fn focus_handle(&self) -> &FocusHandle;

    /// Focus moved into the widget from outside.
    fn focus_in(&mut self, reason: FocusReason);

    /// Handle an event.
    ///
    /// Returns `true` if the event was consumed.
    fn event(&mut self, event: &WidgetEvent) -> bool;

    /// Check if an element of this widget holds focus.
    fn has_focus(&self) -> bool {
        self.focus_handle().within()
    }
}

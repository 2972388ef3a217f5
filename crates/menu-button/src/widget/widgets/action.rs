//! Menu items and the action output seam.
//!
//! A [`MenuItem`] pairs the visible label with an opaque [`ActionId`]. What an
//! action *does* is outside the widget: activating an item hands it to an
//! [`ActionSink`]. [`OutputField`] is the stock sink, a read-only text field
//! that shows the label of the last performed action.

use std::fmt;

use menu_button_core::{Property, Signal};
use serde::{Deserialize, Serialize};

/// Opaque token identifying the action bound to a menu item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    /// Create an action id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ActionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An actionable entry in a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    label: String,
    action: ActionId,
    /// Trimmed, lower-cased label used for typeahead.
    match_key: String,
}

impl MenuItem {
    /// Create an item with an explicit action id.
    pub fn new(label: impl Into<String>, action: impl Into<ActionId>) -> Self {
        let label = label.into();
        let match_key = label.trim().to_lowercase();
        Self {
            label,
            action: action.into(),
            match_key,
        }
    }

    /// Create an item whose action id is its label.
    pub fn with_label(label: impl Into<String>) -> Self {
        let label = label.into();
        let action = ActionId::new(label.clone());
        Self::new(label, action)
    }

    /// The visible label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The bound action.
    pub fn action(&self) -> &ActionId {
        &self.action
    }

    /// Case-insensitive prefix test against the trimmed label.
    ///
    /// `prefix` must already be lower-cased. Items with an empty label never
    /// match.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        !self.match_key.is_empty() && self.match_key.starts_with(prefix)
    }
}

/// Receives the item of every performed action.
pub trait ActionSink: Send + Sync {
    /// Perform the action bound to `item`.
    fn perform(&self, item: &MenuItem);
}

impl<F> ActionSink for F
where
    F: Fn(&MenuItem) + Send + Sync,
{
    fn perform(&self, item: &MenuItem) {
        self(item)
    }
}

/// A read-only text field showing the last performed action.
///
/// # Signals
///
/// - `value_changed(String)`: Emitted when a different label is written
#[derive(Debug, Default)]
pub struct OutputField {
    value: Property<String>,
    /// Signal emitted when the field's value changes.
    pub value_changed: Signal<String>,
}

impl OutputField {
    /// Create an empty output field.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current value.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Replace the value, emitting `value_changed` if it differs.
    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        if self.value.set(value.clone()) {
            self.value_changed.emit(value);
        }
    }
}

impl ActionSink for OutputField {
    fn perform(&self, item: &MenuItem) {
        self.set_value(item.label());
    }
}

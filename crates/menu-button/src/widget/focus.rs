//! Focus tracking within a menu button widget.
//!
//! A widget has exactly two kinds of focusable elements: the button, and the
//! menu items (reachable only programmatically, `tabindex="-1"`). The
//! [`FocusHandle`] records which of them holds document focus, or that focus
//! is outside the widget.
//!
//! The handle is a cheap clone of shared state. The button and the menu each
//! hold a clone; this lets the menu return focus to its opener through a
//! callback without holding a reference back to the button.

use std::sync::Arc;

use parking_lot::Mutex;

/// An element inside the widget that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The menu button itself.
    Button,
    /// The menu item at the given index.
    Item(usize),
}

impl FocusTarget {
    /// The item index, if this target is a menu item.
    pub fn item_index(&self) -> Option<usize> {
        match self {
            FocusTarget::Item(index) => Some(*index),
            FocusTarget::Button => None,
        }
    }
}

/// Shared record of which widget element holds document focus.
///
/// `None` means focus is outside the widget.
#[derive(Debug, Clone, Default)]
pub struct FocusHandle {
    focused: Arc<Mutex<Option<FocusTarget>>>,
}

impl FocusHandle {
    /// Create a handle with focus outside the widget.
    pub fn new() -> Self {
        Self::default()
    }

    /// The element currently holding focus.
    #[inline]
    pub fn focused(&self) -> Option<FocusTarget> {
        *self.focused.lock()
    }

    /// Check if a specific element has focus.
    #[inline]
    pub fn has_focus(&self, target: FocusTarget) -> bool {
        self.focused() == Some(target)
    }

    /// Check if any element of the widget has focus.
    pub fn within(&self) -> bool {
        self.focused().is_some()
    }

    /// Move focus to an element, returning the previous focus.
    pub fn set(&self, target: FocusTarget) -> Option<FocusTarget> {
        self.focused.lock().replace(target)
    }

    /// Record that focus has left the widget.
    pub fn clear(&self) -> Option<FocusTarget> {
        self.focused.lock().take()
    }
}

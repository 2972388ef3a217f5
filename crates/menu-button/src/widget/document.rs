//! A host for several independent widgets.
//!
//! [`Document`] plays the part of the page: it owns widget instances, tracks
//! which one holds keyboard focus, and routes input to it. Every instance has
//! its own state; nothing is shared between them.
//!
//! # Focus Change Events
//!
//! When focus moves from one widget to another (or to an element outside all
//! widgets), the document:
//! 1. Sends a [`FocusOutEvent`] to the widget losing focus
//! 2. Updates the focused widget
//! 3. Calls [`Widget::focus_in`] on the widget gaining focus
//!
//! # Tab Order
//!
//! Tab order is insertion order. Tab and Shift+Tab that a widget leaves
//! unhandled move focus to the next or previous widget, wrapping at the ends.

use std::collections::HashSet;

use menu_button_core::{PerfSpan, logging::targets};
use slotmap::{SlotMap, new_key_type};

use super::Widget;
use super::events::{FocusOutEvent, FocusReason, Key, KeyPressEvent, WidgetEvent};
use super::widgets::MenuButton;
use crate::error::{MenuError, Result};

new_key_type! {
    /// Identifies a widget within a [`Document`].
    pub struct WidgetId;
}

/// A set of widgets sharing one keyboard focus.
pub struct Document<W: Widget = MenuButton> {
    widgets: SlotMap<WidgetId, W>,
    tab_order: Vec<WidgetId>,
    focused: Option<WidgetId>,
}

impl<W: Widget> Document<W> {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            widgets: SlotMap::with_key(),
            tab_order: Vec::new(),
            focused: None,
        }
    }

    /// Add a widget, appending it to the tab order.
    ///
    /// Fails if any of the widget's element ids is already used.
    pub fn insert(&mut self, widget: W) -> Result<WidgetId> {
        let taken: HashSet<&str> = self
            .widgets
            .values()
            .flat_map(|w| w.element_ids())
            .collect();
        if let Some(duplicate) = widget.element_ids().into_iter().find(|id| taken.contains(id)) {
            return Err(MenuError::DuplicateId(duplicate.to_string()));
        }

        let element = widget.id().to_string();
        let id = self.widgets.insert(widget);
        self.tab_order.push(id);
        tracing::debug!(target: targets::DOCUMENT, ?id, element = %element, "widget inserted");
        Ok(id)
    }

    /// Remove a widget.
    pub fn remove(&mut self, id: WidgetId) -> Option<W> {
        if self.focused == Some(id) {
            self.clear_focus(FocusReason::Other);
        }
        self.tab_order.retain(|&w| w != id);
        self.widgets.remove(id)
    }

    /// Get a widget.
    pub fn get(&self, id: WidgetId) -> Option<&W> {
        self.widgets.get(id)
    }

    /// Get a widget mutably.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widgets.get_mut(id)
    }

    /// Find the widget owning an element id.
    pub fn find(&self, element_id: &str) -> Option<WidgetId> {
        self.widgets
            .iter()
            .find(|(_, w)| w.element_ids().contains(element_id))
            .map(|(id, _)| id)
    }

    /// Widget ids in tab order.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.tab_order.iter().copied()
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Check if the document has no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// The widget holding focus, `None` if focus is on an unrelated element.
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Check if a widget holds focus.
    pub fn has_focus(&self, id: WidgetId) -> bool {
        self.focused == Some(id)
    }

    /// Move focus into a widget.
    ///
    /// Returns `false` if the widget does not exist.
    pub fn set_focus(&mut self, id: WidgetId, reason: FocusReason) -> bool {
        if !self.widgets.contains_key(id) {
            return false;
        }
        if self.focused == Some(id) {
            return true;
        }

        self.clear_focus(reason);
        if let Some(widget) = self.widgets.get_mut(id) {
            widget.focus_in(reason);
        }
        self.focused = Some(id);
        tracing::trace!(target: targets::DOCUMENT, ?id, ?reason, "focus moved");
        true
    }

    /// Move focus to an element outside every widget.
    pub fn clear_focus(&mut self, reason: FocusReason) {
        if let Some(old) = self.focused.take()
            && let Some(widget) = self.widgets.get_mut(old)
        {
            widget.event(&WidgetEvent::FocusOut(FocusOutEvent::new(reason)));
        }
    }

    /// Move focus to the next widget in tab order, wrapping.
    pub fn focus_next(&mut self) -> bool {
        let Some(next) = self.step(true) else {
            return false;
        };
        self.set_focus(next, FocusReason::Tab)
    }

    /// Move focus to the previous widget in tab order, wrapping.
    pub fn focus_previous(&mut self) -> bool {
        let Some(prev) = self.step(false) else {
            return false;
        };
        self.set_focus(prev, FocusReason::Backtab)
    }

    fn step(&self, forward: bool) -> Option<WidgetId> {
        let count = self.tab_order.len();
        if count == 0 {
            return None;
        }
        let position = self
            .focused
            .and_then(|current| self.tab_order.iter().position(|&id| id == current));
        let index = match (position, forward) {
            (Some(pos), true) => (pos + 1) % count,
            (Some(pos), false) => (pos + count - 1) % count,
            // Tab from outside enters at the start, Shift+Tab at the end.
            (None, true) => 0,
            (None, false) => count - 1,
        };
        Some(self.tab_order[index])
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Deliver a key press to the focused widget.
    ///
    /// Unhandled Tab moves focus along the tab order. Returns `true` if the
    /// key was consumed.
    pub fn dispatch_key(&mut self, event: KeyPressEvent) -> bool {
        let _perf = PerfSpan::new("document.dispatch_key");

        let handled = match self.focused.and_then(|id| self.widgets.get_mut(id)) {
            Some(widget) => widget.event(&WidgetEvent::KeyPress(event.clone())),
            None => false,
        };
        if handled || event.key != Key::Tab {
            return handled;
        }

        if event.modifiers.shift {
            self.focus_previous()
        } else {
            self.focus_next()
        }
    }

    /// Deliver a pointer click to a widget, focusing it first.
    pub fn click(&mut self, id: WidgetId) -> bool {
        if !self.set_focus(id, FocusReason::Mouse) {
            return false;
        }
        self.widgets
            .get_mut(id)
            .is_some_and(|widget| widget.event(&WidgetEvent::Click))
    }
}

impl<W: Widget> Default for Document<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Widget + std::fmt::Debug> std::fmt::Debug for Document<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("widgets", &self.widgets)
            .field("tab_order", &self.tab_order)
            .field("focused", &self.focused)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuButtonConfig;
    use crate::widget::events::KeyboardModifiers;
    use crate::widget::focus::FocusTarget;

    fn widget(n: usize) -> MenuButton {
        let config = MenuButtonConfig::new(format!("menubutton{n}"), format!("menu{n}"))
            .with_items(["Action 1", "Action 2", "Action 3"]);
        MenuButton::from_config(&config).unwrap()
    }

    fn key(k: Key) -> KeyPressEvent {
        KeyPressEvent::new(k)
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut doc: Document = Document::new();
        doc.insert(widget(1)).unwrap();
        assert!(matches!(
            doc.insert(widget(1)),
            Err(MenuError::DuplicateId(id)) if id == "menubutton1" || id == "menu1"
        ));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_instances_are_isolated() {
        let mut doc: Document = Document::new();
        let a = doc.insert(widget(1)).unwrap();
        let b = doc.insert(widget(2)).unwrap();

        doc.set_focus(a, FocusReason::Tab);
        doc.dispatch_key(key(Key::ArrowUp));

        assert_eq!(doc.get(a).unwrap().active_index(), Some(2));
        assert!(!doc.get(b).unwrap().is_open());
        assert_eq!(doc.get(b).unwrap().focused(), None);
        assert_eq!(doc.find("menu2"), Some(b));
    }

    #[test]
    fn test_focus_elsewhere_closes_menu() {
        let mut doc: Document = Document::new();
        let a = doc.insert(widget(1)).unwrap();
        let b = doc.insert(widget(2)).unwrap();

        assert!(doc.click(a));
        assert!(doc.get(a).unwrap().is_open());

        assert!(doc.click(b));
        let first = doc.get(a).unwrap();
        assert!(!first.is_open());
        assert_eq!(first.focused(), None);
        assert!(doc.get(b).unwrap().is_open());
        assert!(doc.has_focus(b));
    }

    #[test]
    fn test_second_click_keeps_menu_navigable() {
        let mut doc: Document = Document::new();
        let a = doc.insert(widget(1)).unwrap();

        doc.click(a);
        doc.dispatch_key(key(Key::ArrowDown));
        assert!(doc.click(a));

        let button = doc.get(a).unwrap();
        assert_eq!(button.active_index(), Some(1));
        assert_eq!(button.focused(), Some(FocusTarget::Item(1)));

        assert!(doc.dispatch_key(key(Key::Escape)));
        let button = doc.get(a).unwrap();
        assert!(!button.is_open());
        assert_eq!(button.focused(), Some(FocusTarget::Button));
    }

    #[test]
    fn test_clear_focus_closes_menu() {
        let mut doc: Document = Document::new();
        let a = doc.insert(widget(1)).unwrap();
        doc.click(a);
        doc.clear_focus(FocusReason::Mouse);
        assert!(!doc.get(a).unwrap().is_open());
        assert_eq!(doc.focused_widget(), None);
    }

    #[test]
    fn test_tab_order() {
        let mut doc: Document = Document::new();
        let a = doc.insert(widget(1)).unwrap();
        let b = doc.insert(widget(2)).unwrap();

        assert!(doc.dispatch_key(key(Key::Tab)));
        assert!(doc.has_focus(a));
        assert!(doc.dispatch_key(key(Key::Tab)));
        assert!(doc.has_focus(b));
        assert!(doc.dispatch_key(key(Key::Tab)));
        assert!(doc.has_focus(a));

        let backtab = key(Key::Tab).with_modifiers(KeyboardModifiers::SHIFT);
        assert!(doc.dispatch_key(backtab));
        assert!(doc.has_focus(b));
    }

    #[test]
    fn test_tab_out_of_open_menu() {
        let mut doc: Document = Document::new();
        let a = doc.insert(widget(1)).unwrap();
        let b = doc.insert(widget(2)).unwrap();

        doc.set_focus(a, FocusReason::Tab);
        doc.dispatch_key(key(Key::Enter));
        assert!(doc.get(a).unwrap().is_open());

        doc.dispatch_key(key(Key::Tab));
        assert!(!doc.get(a).unwrap().is_open());
        assert!(doc.has_focus(b));
        assert_eq!(doc.get(b).unwrap().focused(), Some(FocusTarget::Button));
    }

    #[test]
    fn test_remove_focused_widget() {
        let mut doc: Document = Document::new();
        let a = doc.insert(widget(1)).unwrap();
        doc.click(a);
        let removed = doc.remove(a).unwrap();
        assert!(!removed.is_open());
        assert!(doc.is_empty());
        assert_eq!(doc.focused_widget(), None);
    }
}

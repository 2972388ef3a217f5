//! Menu button widget implementation.
//!
//! A [`MenuButton`] is a button that opens a [`Menu`] of actions. It follows
//! the WAI-ARIA menu button pattern:
//!
//! - Enter, Space, ArrowDown or a click open the menu and focus the first item
//! - ArrowUp opens the menu and focuses the last item
//! - The button carries `aria-haspopup="true"`, `aria-controls` naming the
//!   menu, and `aria-expanded="true"` only while the menu is open
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use menu_button::prelude::*;
//!
//! let config = MenuButtonConfig::new("menubutton1", "menu1")
//!     .with_label("Actions")
//!     .with_items(["Action 1", "Action 2", "Action 3", "Action 4"]);
//! let mut button = MenuButton::from_config(&config)?;
//!
//! let output = Arc::new(OutputField::new());
//! button.connect_sink(output.clone());
//!
//! button.handle_key(&Key::ArrowDown.into());
//! button.handle_key(&Key::ArrowDown.into());
//! button.handle_key(&Key::Enter.into());
//!
//! assert_eq!(output.value(), "Action 2");
//! assert!(!button.is_open());
//! # Ok::<(), menu_button::MenuError>(())
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use menu_button_core::{ConnectionId, PerfSpan, SharedClock, Signal, logging::targets};
use serde::{Deserialize, Serialize};

use super::action::{ActionSink, MenuItem};
use super::menu::{InitialFocus, Menu, MenuState};
use super::typeahead::Typeahead;
use crate::config::MenuButtonConfig;
use crate::error::{MenuError, Result};
use crate::widget::Widget;
use crate::widget::accessibility::{AccessibleRole, ElementSnapshot};
use crate::widget::events::{FocusReason, Key, KeyPressEvent, WidgetEvent};
use crate::widget::focus::{FocusHandle, FocusTarget};

// ============================================================================
// Trigger
// ============================================================================

/// An input on the button that opens the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Enter key.
    Enter,
    /// Space key.
    Space,
    /// Down arrow.
    ArrowDown,
    /// Up arrow.
    ArrowUp,
    /// Pointer activation.
    Click,
}

impl Trigger {
    /// The trigger for a key pressed on the button, if any.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Enter => Some(Trigger::Enter),
            Key::Space => Some(Trigger::Space),
            Key::ArrowDown => Some(Trigger::ArrowDown),
            Key::ArrowUp => Some(Trigger::ArrowUp),
            _ => None,
        }
    }

    /// Which item receives focus when this trigger opens the menu.
    pub fn initial_focus(self) -> InitialFocus {
        match self {
            Trigger::ArrowUp => InitialFocus::Last,
            Trigger::Enter | Trigger::Space | Trigger::ArrowDown | Trigger::Click => {
                InitialFocus::First
            }
        }
    }
}

// ============================================================================
// Activation
// ============================================================================

/// What an open trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activation {
    /// The menu opened with focus on `index`.
    Opened {
        /// The focused item.
        index: usize,
    },
    /// The menu was already open and nothing changed.
    AlreadyOpen,
    /// The menu was already open and focus moved to `index`.
    Reseeded {
        /// The focused item.
        index: usize,
    },
}

/// What an open trigger does while the menu is already open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReopenPolicy {
    /// Leave the menu and its active item untouched.
    #[default]
    Ignore,
    /// Move focus to the trigger's initial item.
    Reseed,
}

// ============================================================================
// Menu Button
// ============================================================================

/// A button that opens a menu of actions.
///
/// # Signals
///
/// - [`expanded_changed`](MenuButton::expanded_changed): Emitted when the menu
///   opens or closes
///
/// Item activations are reported through the menu's
/// [`triggered`](Menu::triggered) signal, or to any sink registered with
/// [`connect_sink`](MenuButton::connect_sink).
pub struct MenuButton {
    id: String,
    label: String,
    menu: Menu,
    focus: FocusHandle,
    reopen_policy: ReopenPolicy,

    /// Signal emitted when the expanded state changes.
    pub expanded_changed: Signal<bool>,
}

impl MenuButton {
    /// Create a menu button from a configuration.
    ///
    /// Fails if the configuration has no items, an empty id, or the same id
    /// for the button and the menu.
    pub fn from_config(config: &MenuButtonConfig) -> Result<Self> {
        let typeahead = Typeahead::with_clock(
            menu_button_core::SystemClock::shared(),
            config.typeahead_timeout(),
        );
        Self::build(config, typeahead)
    }

    /// Create a menu button whose typeahead reads time from `clock`.
    pub fn from_config_with_clock(config: &MenuButtonConfig, clock: SharedClock) -> Result<Self> {
        let typeahead = Typeahead::with_clock(clock, config.typeahead_timeout());
        Self::build(config, typeahead)
    }

    fn build(config: &MenuButtonConfig, typeahead: Typeahead) -> Result<Self> {
        if config.button_id.is_empty() {
            return Err(MenuError::EmptyId { element: "button" });
        }
        if config.button_id == config.menu_id {
            return Err(MenuError::DuplicateId(config.button_id.clone()));
        }

        let focus = FocusHandle::new();
        let opener = focus.clone();
        let menu = Menu::new(
            config.menu_id.clone(),
            config.button_id.clone(),
            config.menu_items(),
            focus.clone(),
            move || {
                opener.set(FocusTarget::Button);
            },
        )?
        .with_typeahead(typeahead)
        .with_close_on_blur(config.close_on_blur);

        tracing::debug!(
            target: targets::MENU_BUTTON,
            button = %config.button_id,
            menu = %config.menu_id,
            items = menu.item_count(),
            "menu button created"
        );

        Ok(Self {
            id: config.button_id.clone(),
            label: config.label.clone(),
            menu,
            focus,
            reopen_policy: config.reopen_policy,
            expanded_changed: Signal::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The button element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The button text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The menu, read-only.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// The reopen policy.
    pub fn reopen_policy(&self) -> ReopenPolicy {
        self.reopen_policy
    }

    /// Set the reopen policy.
    pub fn set_reopen_policy(&mut self, policy: ReopenPolicy) {
        self.reopen_policy = policy;
    }

    /// Check if the menu is open.
    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// The `aria-expanded` state; always equal to [`is_open`](Self::is_open).
    pub fn expanded(&self) -> bool {
        self.menu.is_open()
    }

    /// The menu state.
    pub fn state(&self) -> MenuState {
        self.menu.state()
    }

    /// The active item index, `None` while closed.
    pub fn active_index(&self) -> Option<usize> {
        self.menu.active_index()
    }

    /// The item holding focus, if any.
    pub fn active_item(&self) -> Option<&MenuItem> {
        self.active_index().and_then(|i| self.menu.item(i))
    }

    /// The element of this widget holding focus.
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus.focused()
    }

    /// Register a sink that performs every triggered item.
    pub fn connect_sink(&self, sink: Arc<dyn ActionSink>) -> ConnectionId {
        let id = self.menu.triggered.connect(move |item| sink.perform(item));
        menu_button_core::menu_debug!(
            button = %self.id,
            sinks = self.menu.triggered.connection_count(),
            "action sink connected"
        );
        id
    }

    /// Remove a sink registered with [`connect_sink`](Self::connect_sink).
    ///
    /// Returns `false` if the sink was already removed.
    pub fn disconnect_sink(&self, id: ConnectionId) -> bool {
        self.menu.triggered.disconnect(id)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Move focus to the button.
    ///
    /// An open menu is closed first, since the button only holds focus while
    /// the menu is hidden.
    pub fn focus_button(&mut self) {
        if self.is_open() {
            self.menu.close();
            self.sync_expanded(true);
        } else {
            self.focus.set(FocusTarget::Button);
        }
    }

    /// Move focus to an item of the open menu.
    pub fn focus_item(&mut self, index: usize) -> Result<()> {
        self.menu.focus_item(index)
    }

    /// Handle focus leaving the widget.
    pub fn blur(&mut self) {
        let was_open = self.is_open();
        self.menu.blur();
        self.sync_expanded(was_open);
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Open the menu in response to a trigger.
    pub fn activate(&mut self, trigger: Trigger) -> Activation {
        let initial = trigger.initial_focus();

        if self.menu.is_open() {
            return match self.reopen_policy {
                ReopenPolicy::Ignore => Activation::AlreadyOpen,
                ReopenPolicy::Reseed => match self.menu.reseed(initial) {
                    Some(index) => Activation::Reseeded { index },
                    None => Activation::AlreadyOpen,
                },
            };
        }

        match self.menu.open(initial) {
            Some(index) => {
                tracing::debug!(target: targets::MENU_BUTTON, button = %self.id, ?trigger, index, "menu activated");
                self.expanded_changed.emit(true);
                Activation::Opened { index }
            }
            None => Activation::AlreadyOpen,
        }
    }

    /// Handle a pointer click on the button.
    ///
    /// While the menu is open the active item keeps focus.
    pub fn click(&mut self) -> Activation {
        if !self.is_open() {
            self.focus.set(FocusTarget::Button);
        }
        self.activate(Trigger::Click)
    }

    /// Handle a key press while an element of this widget has focus.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, event: &KeyPressEvent) -> bool {
        let _perf = PerfSpan::new("menu_button.handle_key");

        match self.focus.focused() {
            Some(FocusTarget::Item(_)) if self.menu.is_open() => {
                let handled = self.menu.handle_key(event);
                self.sync_expanded(true);
                handled
            }
            Some(FocusTarget::Button) | None => {
                if event.modifiers.is_command() {
                    return false;
                }
                match Trigger::from_key(&event.key) {
                    Some(trigger) => {
                        self.activate(trigger);
                        true
                    }
                    None => false,
                }
            }
            Some(FocusTarget::Item(_)) => false,
        }
    }

    fn sync_expanded(&self, was_open: bool) {
        let is_open = self.is_open();
        if was_open != is_open {
            self.expanded_changed.emit(is_open);
        }
    }

    // =========================================================================
    // Element Snapshots
    // =========================================================================

    /// Snapshot of the button element.
    pub fn button_element(&self) -> ElementSnapshot {
        ElementSnapshot::new("button", &self.id, AccessibleRole::Button)
            .with_attribute("aria-haspopup", "true")
            .with_attribute("aria-controls", self.menu.id())
            .with_optional_attribute("aria-expanded", self.expanded().then_some("true"))
            .with_text(&self.label)
            .focused(self.focus.has_focus(FocusTarget::Button))
    }

    /// Snapshot of the menu list element.
    pub fn menu_element(&self) -> ElementSnapshot {
        self.menu.menu_element()
    }

    /// Snapshots of the menu item elements.
    pub fn item_elements(&self) -> Vec<ElementSnapshot> {
        self.menu.item_elements()
    }

    /// All element snapshots, in document order.
    pub fn elements(&self) -> Vec<ElementSnapshot> {
        let mut elements = vec![self.button_element(), self.menu_element()];
        elements.extend(self.item_elements());
        elements
    }
}

impl Widget for MenuButton {
    fn id(&self) -> &str {
        &self.id
    }

    fn element_ids(&self) -> HashSet<&str> {
        [self.id.as_str(), self.menu.id()].into_iter().collect()
    }

    fn focus_handle(&self) -> &FocusHandle {
        &self.focus
    }

    fn focus_in(&mut self, reason: FocusReason) {
        tracing::trace!(target: targets::MENU_BUTTON, button = %self.id, ?reason, "focus in");
        match self.active_index() {
            Some(index) => self.focus.set(FocusTarget::Item(index)),
            None => self.focus.set(FocusTarget::Button),
        };
    }

    fn event(&mut self, event: &WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(key) => self.handle_key(key),
            WidgetEvent::Click => {
                self.click();
                true
            }
            WidgetEvent::FocusOut(_) => {
                self.blur();
                false
            }
        }
    }
}

impl fmt::Debug for MenuButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuButton")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("menu", &self.menu)
            .field("focused", &self.focus.focused())
            .field("reopen_policy", &self.reopen_policy)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Accessibility
// ============================================================================

#[cfg(feature = "accessibility")]
mod accessible {
    use accesskit::{Action, HasPopup, Tree, TreeUpdate};

    use super::*;
    use crate::widget::accessibility::{Accessible, WidgetNode};

    struct Root<'a>(&'a MenuButton);

    impl Accessible for Root<'_> {
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::Group
        }

        fn accessible_name(&self) -> Option<String> {
            Some(self.0.label.clone())
        }
    }

    impl Accessible for MenuButton {
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::Button
        }

        fn accessible_name(&self) -> Option<String> {
            Some(self.label.clone())
        }

        fn is_accessible_expanded(&self) -> Option<bool> {
            Some(self.expanded())
        }

        fn accessible_has_popup(&self) -> Option<HasPopup> {
            Some(HasPopup::Menu)
        }

        fn accessible_controls(&self) -> Vec<WidgetNode> {
            vec![WidgetNode::Menu]
        }

        fn accessible_actions(&self) -> Vec<Action> {
            vec![Action::Click, Action::Focus]
        }
    }

    impl Accessible for Menu {
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::Menu
        }

        fn is_accessible_hidden(&self) -> bool {
            !self.is_open()
        }

        fn accessible_labelled_by(&self) -> Vec<WidgetNode> {
            vec![WidgetNode::Button]
        }

        fn accessible_active_descendant(&self) -> Option<WidgetNode> {
            self.active_index().map(WidgetNode::Item)
        }
    }

    impl Accessible for MenuItem {
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::MenuItem
        }

        fn accessible_name(&self) -> Option<String> {
            Some(self.label().to_string())
        }

        fn accessible_actions(&self) -> Vec<Action> {
            vec![Action::Click, Action::Focus]
        }
    }

    impl MenuButton {
        /// Build the full AccessKit tree for this widget.
        ///
        /// Focus is reported on the focused element, or on the root when focus
        /// is outside the widget.
        pub fn accessibility_update(&self) -> TreeUpdate {
            let item_nodes: Vec<WidgetNode> =
                (0..self.menu.item_count()).map(WidgetNode::Item).collect();

            let mut nodes = vec![
                (
                    WidgetNode::Root.node_id(),
                    Root(self).build_accessible_node(&[WidgetNode::Button, WidgetNode::Menu]),
                ),
                (WidgetNode::Button.node_id(), self.build_accessible_node(&[])),
                (
                    WidgetNode::Menu.node_id(),
                    self.menu.build_accessible_node(&item_nodes),
                ),
            ];
            nodes.extend(
                self.menu
                    .items()
                    .iter()
                    .zip(&item_nodes)
                    .map(|(item, node)| (node.node_id(), item.build_accessible_node(&[]))),
            );

            let focus = self
                .focus
                .focused()
                .map(WidgetNode::from)
                .unwrap_or(WidgetNode::Root);

            TreeUpdate {
                nodes,
                tree: Some(Tree::new(WidgetNode::Root.node_id())),
                focus: focus.node_id(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use menu_button_core::ManualClock;
    use parking_lot::Mutex;

    use super::*;
    use crate::widget::events::KeyboardModifiers;
    use crate::widget::widgets::OutputField;

    fn config() -> MenuButtonConfig {
        MenuButtonConfig::new("menubutton1", "menu1")
            .with_label("Actions")
            .with_items(["Action 1", "Action 2", "Action 3", "Action 4"])
    }

    fn button() -> MenuButton {
        let mut button =
            MenuButton::from_config_with_clock(&config(), ManualClock::new().shared()).unwrap();
        button.focus_button();
        button
    }

    fn press(button: &mut MenuButton, key: Key) -> bool {
        button.handle_key(&KeyPressEvent::new(key))
    }

    #[test]
    fn test_trigger_initial_focus() {
        assert_eq!(Trigger::ArrowUp.initial_focus(), InitialFocus::Last);
        assert_eq!(Trigger::Click.initial_focus(), InitialFocus::First);
        assert_eq!(Trigger::from_key(&Key::Space), Some(Trigger::Space));
        assert_eq!(Trigger::from_key(&Key::Escape), None);
    }

    #[test]
    fn test_from_config_validation() {
        let empty = MenuButtonConfig::new("b", "m");
        assert!(matches!(MenuButton::from_config(&empty), Err(MenuError::EmptyMenu)));

        let same = MenuButtonConfig::new("x", "x").with_items(["a"]);
        assert!(matches!(
            MenuButton::from_config(&same),
            Err(MenuError::DuplicateId(id)) if id == "x"
        ));

        let no_id = MenuButtonConfig::new("", "m").with_items(["a"]);
        assert!(matches!(
            MenuButton::from_config(&no_id),
            Err(MenuError::EmptyId { element: "button" })
        ));
    }

    #[test]
    fn test_open_triggers() {
        for (key, expected) in [
            (Key::Enter, 0),
            (Key::Space, 0),
            (Key::ArrowDown, 0),
            (Key::ArrowUp, 3),
        ] {
            let mut button = button();
            assert!(press(&mut button, key));
            assert_eq!(button.active_index(), Some(expected), "{key:?}");
            assert_eq!(button.focused(), Some(FocusTarget::Item(expected)));
        }
    }

    #[test]
    fn test_click_opens_first() {
        let mut button = button();
        assert_eq!(button.click(), Activation::Opened { index: 0 });
        assert_eq!(button.click(), Activation::AlreadyOpen);
        assert_eq!(button.active_index(), Some(0));
    }

    #[test]
    fn test_click_while_open_keeps_item_focus() {
        let mut button = button();
        button.click();
        press(&mut button, Key::ArrowDown);

        assert_eq!(button.click(), Activation::AlreadyOpen);
        assert_eq!(button.active_index(), Some(1));
        assert_eq!(button.focused(), Some(FocusTarget::Item(1)));

        assert!(press(&mut button, Key::ArrowDown));
        assert_eq!(button.active_index(), Some(2));
        assert!(press(&mut button, Key::Escape));
        assert!(!button.is_open());
        assert_eq!(button.focused(), Some(FocusTarget::Button));
    }

    #[test]
    fn test_focus_in_returns_to_open_menu() {
        let config = config().with_close_on_blur(false);
        let mut button =
            MenuButton::from_config_with_clock(&config, ManualClock::new().shared()).unwrap();
        button.focus_in(FocusReason::Tab);
        button.click();
        press(&mut button, Key::End);

        button.blur();
        assert!(button.is_open());
        assert_eq!(button.focused(), None);

        button.focus_in(FocusReason::Mouse);
        assert_eq!(button.focused(), Some(FocusTarget::Item(3)));
        assert!(press(&mut button, Key::Escape));
        assert_eq!(button.focused(), Some(FocusTarget::Button));
    }

    #[test]
    fn test_focus_button_closes_open_menu() {
        let mut button = button();
        press(&mut button, Key::ArrowUp);
        button.focus_button();
        assert!(!button.is_open());
        assert!(!button.button_element().has_attribute("aria-expanded"));
        assert_eq!(button.focused(), Some(FocusTarget::Button));
    }

    #[test]
    fn test_disconnect_sink() {
        let mut button = button();
        let output = Arc::new(OutputField::new());
        let id = button.connect_sink(output.clone());

        press(&mut button, Key::Enter);
        press(&mut button, Key::Enter);
        assert_eq!(output.value(), "Action 1");

        assert!(button.disconnect_sink(id));
        assert!(!button.disconnect_sink(id));
        press(&mut button, Key::ArrowUp);
        press(&mut button, Key::Enter);
        assert_eq!(output.value(), "Action 1");
    }

    #[test]
    fn test_reseed_policy() {
        let mut button = button();
        button.set_reopen_policy(ReopenPolicy::Reseed);
        button.activate(Trigger::ArrowDown);
        press(&mut button, Key::ArrowDown);
        assert_eq!(button.activate(Trigger::ArrowUp), Activation::Reseeded { index: 3 });
        assert_eq!(button.active_index(), Some(3));
    }

    #[test]
    fn test_non_trigger_keys_ignored_on_button() {
        let mut button = button();
        assert!(!press(&mut button, Key::Escape));
        assert!(!press(&mut button, Key::Home));
        assert!(!press(&mut button, Key::Char('a')));
        let ctrl_enter = KeyPressEvent::new(Key::Enter).with_modifiers(KeyboardModifiers::CTRL);
        assert!(!button.handle_key(&ctrl_enter));
        assert!(!button.is_open());
    }

    #[test]
    fn test_enter_writes_sink_and_returns_focus() {
        let mut button = button();
        let output = Arc::new(OutputField::new());
        button.connect_sink(output.clone());

        press(&mut button, Key::Enter);
        press(&mut button, Key::End);
        press(&mut button, Key::Enter);

        assert_eq!(output.value(), "Action 4");
        assert!(!button.is_open());
        assert_eq!(button.focused(), Some(FocusTarget::Button));
    }

    #[test]
    fn test_expanded_changed_signal() {
        let mut button = button();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        button
            .expanded_changed
            .connect(move |open| seen_clone.lock().push(*open));

        press(&mut button, Key::Enter);
        press(&mut button, Key::Enter);
        press(&mut button, Key::ArrowDown);
        button.blur();

        assert_eq!(*seen.lock(), vec![true, false, true, false]);
    }

    #[test]
    fn test_button_element_attributes() {
        let mut button = button();
        let el = button.button_element();
        assert_eq!(el.attribute("aria-haspopup"), Some("true"));
        assert_eq!(el.attribute("aria-controls"), Some("menu1"));
        assert!(!el.has_attribute("aria-expanded"));
        assert!(el.is_focused());
        assert_eq!(el.text(), "Actions");

        press(&mut button, Key::Enter);
        let el = button.button_element();
        assert_eq!(el.attribute("aria-expanded"), Some("true"));
        assert!(!el.is_focused());
        assert_eq!(button.elements().len(), 6);
    }

    #[test]
    fn test_widget_focus_out_closes() {
        let mut button = button();
        button.event(&WidgetEvent::Click);
        assert!(button.is_open());
        assert!(!button.event(&WidgetEvent::FocusOut(Default::default())));
        assert!(!button.is_open());
        assert_eq!(button.focused(), None);
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accessibility_update() {
        use crate::widget::accessibility::WidgetNode;

        let mut button = button();
        let update = button.accessibility_update();
        assert_eq!(update.nodes.len(), 7);
        assert_eq!(update.focus, WidgetNode::Button.node_id());
        let (_, button_node) = &update.nodes[1];
        assert_eq!(button_node.role(), accesskit::Role::Button);
        assert_eq!(button_node.is_expanded(), Some(false));
        let (_, menu_node) = &update.nodes[2];
        assert!(menu_node.is_hidden());
        assert_eq!(menu_node.children().len(), 4);

        press(&mut button, Key::ArrowUp);
        let update = button.accessibility_update();
        assert_eq!(update.focus, WidgetNode::Item(3).node_id());
        let (_, menu_node) = &update.nodes[2];
        assert!(!menu_node.is_hidden());
        assert_eq!(
            menu_node.active_descendant(),
            Some(WidgetNode::Item(3).node_id())
        );
        let (_, button_node) = &update.nodes[1];
        assert_eq!(button_node.is_expanded(), Some(true));
    }
}

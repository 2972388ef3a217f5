//! The popup menu controlled by a menu button.
//!
//! The menu owns its items and the only mutable state of the widget: whether
//! it is open, and which item is active. The two are stored together in
//! [`MenuState`], so an open menu always has an active item and a closed menu
//! never does.
//!
//! Key handling is split in two. [`transition`] is a pure function from
//! `(state, key, item_count)` to a [`Transition`]; [`Menu::handle_key`] applies
//! the transition together with typeahead, focus moves and signals.
//!
//! # Keyboard
//!
//! | Key | Effect while open |
//! |-----|-------------------|
//! | ArrowDown / ArrowUp | Next / previous item, wrapping |
//! | Home / End | First / last item |
//! | Enter | Trigger the active item, then close |
//! | Escape | Close without an action |
//! | Tab | Close without an action; the key is left unhandled |
//! | Printable character | Typeahead search |

use std::fmt;

use menu_button_core::{Signal, logging::targets};

use super::action::MenuItem;
use super::typeahead::Typeahead;
use crate::error::{MenuError, Result};
use crate::widget::accessibility::{AccessibleRole, ElementSnapshot};
use crate::widget::events::{Key, KeyPressEvent};
use crate::widget::focus::{FocusHandle, FocusTarget};

/// Open/closed state of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum MenuState {
    /// The popup is hidden and no item is active.
    #[default]
    Closed,
    /// The popup is shown and the item at `active` holds focus.
    Open {
        /// Index of the active item.
        active: usize,
    },
}

impl MenuState {
    /// Whether the popup is shown.
    #[inline]
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }

    /// The active item, if open.
    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        match self {
            MenuState::Open { active } => Some(*active),
            MenuState::Closed => None,
        }
    }
}

/// Which item receives focus when the menu opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum InitialFocus {
    /// The first item.
    #[default]
    First,
    /// The last item.
    Last,
}

impl InitialFocus {
    /// The item index for a menu of `count` items.
    pub fn index(self, count: usize) -> usize {
        match self {
            InitialFocus::First => 0,
            InitialFocus::Last => count.saturating_sub(1),
        }
    }
}

/// The effect of a key on a menu, as computed by [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The key has no effect.
    Ignore,
    /// Move the active item.
    MoveTo(usize),
    /// Perform the action of the item, then close.
    Activate(usize),
    /// Close without an action.
    Dismiss,
    /// Close without an action and let focus leave the widget.
    Leave,
    /// Feed a character to typeahead.
    Typeahead(char),
}

/// Compute the effect of `key` on a menu in `state` with `item_count` items.
///
/// Keys have no effect while the menu is closed.
///
/// ```
/// use menu_button::widget::Key;
/// use menu_button::widget::widgets::{MenuState, Transition, transition};
///
/// let state = MenuState::Open { active: 3 };
/// assert_eq!(transition(state, &Key::ArrowDown, 4), Transition::MoveTo(0));
/// assert_eq!(transition(MenuState::Closed, &Key::ArrowDown, 4), Transition::Ignore);
/// ```
pub fn transition(state: MenuState, key: &Key, item_count: usize) -> Transition {
    let MenuState::Open { active } = state else {
        return Transition::Ignore;
    };
    if item_count == 0 {
        return Transition::Ignore;
    }

    debug_assert!(active < item_count, "active index {active} out of range");
    let active = active.min(item_count - 1);

    match key {
        Key::ArrowDown => Transition::MoveTo((active + 1) % item_count),
        Key::ArrowUp => Transition::MoveTo((active + item_count - 1) % item_count),
        Key::Home => Transition::MoveTo(0),
        Key::End => Transition::MoveTo(item_count - 1),
        Key::Enter => Transition::Activate(active),
        Key::Escape => Transition::Dismiss,
        Key::Tab => Transition::Leave,
        Key::Space => Transition::Typeahead(' '),
        Key::Char(c) => Transition::Typeahead(*c),
        Key::Unidentified => Transition::Ignore,
    }
}

type ReturnFocus = Box<dyn Fn() + Send + Sync>;

/// A popup menu of actionable items.
///
/// The menu never holds a reference to the button that opens it. Instead it
/// receives a `return_focus` callback at construction and invokes it whenever
/// a close should put focus back on the opener.
///
/// # Signals
///
/// - [`triggered`](Menu::triggered): Emitted when an item is activated
/// - [`about_to_show`](Menu::about_to_show): Emitted before the menu opens
/// - [`about_to_hide`](Menu::about_to_hide): Emitted before the menu closes
/// - [`active_changed`](Menu::active_changed): Emitted after the active item changes
pub struct Menu {
    /// Element id of the list container.
    id: String,

    /// Element id of the labelling button.
    labelled_by: String,

    /// Menu items, fixed at construction.
    items: Vec<MenuItem>,

    state: MenuState,

    typeahead: Typeahead,

    focus: FocusHandle,

    return_focus: ReturnFocus,

    /// Close when focus leaves the widget.
    close_on_blur: bool,

    /// Signal emitted when an item is activated.
    pub triggered: Signal<MenuItem>,
    /// Signal emitted before the menu is shown.
    pub about_to_show: Signal<()>,
    /// Signal emitted before the menu is hidden.
    pub about_to_hide: Signal<()>,
    /// Signal emitted after the active item changes (`None` once closed).
    pub active_changed: Signal<Option<usize>>,
}

impl Menu {
    /// Create a closed menu.
    ///
    /// Fails if `items` is empty or either id is empty.
    pub fn new<F>(
        id: impl Into<String>,
        labelled_by: impl Into<String>,
        items: Vec<MenuItem>,
        focus: FocusHandle,
        return_focus: F,
    ) -> Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = id.into();
        let labelled_by = labelled_by.into();
        if id.is_empty() {
            return Err(MenuError::EmptyId { element: "menu" });
        }
        if labelled_by.is_empty() {
            return Err(MenuError::EmptyId { element: "button" });
        }
        if items.is_empty() {
            return Err(MenuError::EmptyMenu);
        }

        Ok(Self {
            id,
            labelled_by,
            items,
            state: MenuState::Closed,
            typeahead: Typeahead::new(),
            focus,
            return_focus: Box::new(return_focus),
            close_on_blur: true,
            triggered: Signal::new(),
            about_to_show: Signal::new(),
            about_to_hide: Signal::new(),
            active_changed: Signal::new(),
        })
    }

    /// Replace the typeahead engine using builder pattern.
    pub fn with_typeahead(mut self, typeahead: Typeahead) -> Self {
        self.typeahead = typeahead;
        self
    }

    /// Set whether focus leaving the widget closes the menu.
    pub fn with_close_on_blur(mut self, close_on_blur: bool) -> Self {
        self.close_on_blur = close_on_blur;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The menu element id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The id of the element labelling this menu.
    pub fn labelled_by(&self) -> &str {
        &self.labelled_by
    }

    /// The menu items.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Get the item at an index.
    pub fn item(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }

    /// Get the number of items in the menu.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Check if the menu is shown.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The active item index, `None` while closed.
    pub fn active_index(&self) -> Option<usize> {
        self.state.active_index()
    }

    /// The typeahead engine.
    pub fn typeahead(&self) -> &Typeahead {
        &self.typeahead
    }

    /// Whether focus leaving the widget closes the menu.
    pub fn close_on_blur(&self) -> bool {
        self.close_on_blur
    }

    // =========================================================================
    // Show/Hide
    // =========================================================================

    /// Open the menu and focus the initial item.
    ///
    /// Returns the active index, or `None` if the menu was already open (in
    /// which case nothing changes).
    pub fn open(&mut self, initial: InitialFocus) -> Option<usize> {
        if self.is_open() {
            return None;
        }

        self.about_to_show.emit(());
        let active = initial.index(self.items.len());
        self.state = MenuState::Open { active };
        self.typeahead.reset();
        self.focus.set(FocusTarget::Item(active));

        tracing::debug!(target: targets::MENU, menu = %self.id, active, "menu opened");
        self.active_changed.emit(Some(active));
        Some(active)
    }

    /// Move focus of an open menu to the initial item.
    ///
    /// Returns the new active index, or `None` if the menu is closed.
    pub fn reseed(&mut self, initial: InitialFocus) -> Option<usize> {
        if !self.is_open() {
            return None;
        }
        let index = initial.index(self.items.len());
        self.set_active(index);
        Some(index)
    }

    /// Close the menu and return focus to the opener.
    ///
    /// Does nothing if the menu is closed.
    pub fn close(&mut self) {
        self.hide(true);
    }

    /// Handle focus leaving the widget.
    ///
    /// Focus has already moved elsewhere, so it is not returned to the opener.
    /// The menu closes unless `close_on_blur` is disabled.
    pub fn blur(&mut self) {
        self.focus.clear();
        if self.close_on_blur {
            self.hide(false);
        }
    }

    fn hide(&mut self, restore_focus: bool) {
        if !self.is_open() {
            return;
        }

        self.about_to_hide.emit(());
        self.state = MenuState::Closed;
        self.typeahead.reset();
        if restore_focus {
            (self.return_focus)();
        }

        tracing::debug!(target: targets::MENU, menu = %self.id, restore_focus, "menu closed");
        self.active_changed.emit(None);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Move focus to the item at `index`.
    pub fn focus_item(&mut self, index: usize) -> Result<()> {
        if !self.is_open() {
            return Err(MenuError::NotOpen);
        }
        if index >= self.items.len() {
            return Err(MenuError::invalid_index(index, self.items.len()));
        }
        self.set_active(index);
        Ok(())
    }

    fn set_active(&mut self, index: usize) {
        let MenuState::Open { active } = self.state else {
            return;
        };

        let len = self.items.len();
        debug_assert!(index < len, "active index {index} out of range");
        if index >= len {
            menu_button_core::menu_warn!(index, len, "active index out of range, clamping");
        }
        let index = index.min(len - 1);

        self.focus.set(FocusTarget::Item(index));
        if active != index {
            self.state = MenuState::Open { active: index };
            tracing::trace!(target: targets::MENU, menu = %self.id, from = active, to = index, "active item moved");
            self.active_changed.emit(Some(index));
        }
    }

    /// Trigger the item at `index` and close the menu.
    pub fn trigger_item(&mut self, index: usize) -> Result<()> {
        if !self.is_open() {
            return Err(MenuError::NotOpen);
        }
        let item = self
            .items
            .get(index)
            .cloned()
            .ok_or_else(|| MenuError::invalid_index(index, self.items.len()))?;

        tracing::debug!(target: targets::MENU, menu = %self.id, action = %item.action(), "item triggered");
        self.triggered.emit(item);
        self.close();
        Ok(())
    }

    fn type_char(&mut self, ch: char) {
        let MenuState::Open { active } = self.state else {
            return;
        };
        if let Some(index) = self.typeahead.search(ch, &self.items, active) {
            self.set_active(index);
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a key pressed while an item of this menu has focus.
    ///
    /// Returns `true` if the key was consumed.
    #[tracing::instrument(skip(self), target = "menu_button::menu", level = "trace")]
    pub fn handle_key(&mut self, event: &KeyPressEvent) -> bool {
        if event.key.is_printable() && event.modifiers.is_command() {
            return false;
        }

        match transition(self.state, &event.key, self.items.len()) {
            Transition::Ignore => false,
            Transition::MoveTo(index) => {
                self.set_active(index);
                true
            }
            Transition::Activate(index) => {
                let triggered = self.trigger_item(index);
                debug_assert!(triggered.is_ok(), "active item {index} not triggerable");
                if let Err(err) = triggered {
                    menu_button_core::menu_warn!(menu = %self.id, %err, "active item could not be triggered");
                }
                true
            }
            Transition::Dismiss => {
                self.close();
                true
            }
            Transition::Leave => {
                self.close();
                false
            }
            Transition::Typeahead(ch) => {
                self.type_char(ch);
                true
            }
        }
    }

    // =========================================================================
    // Element Snapshots
    // =========================================================================

    /// Snapshot of the list container.
    pub fn menu_element(&self) -> ElementSnapshot {
        ElementSnapshot::new("ul", &self.id, AccessibleRole::Menu)
            .with_attribute("aria-labelledby", &self.labelled_by)
            .hidden(!self.is_open())
    }

    /// Snapshots of the items, in order.
    pub fn item_elements(&self) -> Vec<ElementSnapshot> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                ElementSnapshot::new("li", "", AccessibleRole::MenuItem)
                    .with_attribute("tabindex", "-1")
                    .with_text(item.label())
                    .focused(self.focus.has_focus(FocusTarget::Item(index)))
            })
            .collect()
    }
}

impl fmt::Debug for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Menu")
            .field("id", &self.id)
            .field("labelled_by", &self.labelled_by)
            .field("items", &self.items)
            .field("state", &self.state)
            .field("typeahead", &self.typeahead)
            .field("close_on_blur", &self.close_on_blur)
            .finish_non_exhaustive()
    }
}

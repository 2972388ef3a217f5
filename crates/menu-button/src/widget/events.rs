//! Widget-specific event types.
//!
//! Events are expressed over a small abstract key alphabet ([`Key`]) so the
//! menu state machine never sees platform key codes. Platform adapters live in
//! [`super::keyboard`].

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Whether a command modifier (Ctrl, Alt or Meta) is held.
    ///
    /// Shift alone still produces text and is not a command modifier.
    pub fn is_command(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

/// The abstract key alphabet understood by the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// The space bar.
    Space,
    /// Escape.
    Escape,
    /// Tab (with or without Shift).
    Tab,
    /// A single printable character.
    Char(char),
    /// Any key the widget does not handle.
    Unidentified,
}

impl Key {
    /// Check if this is a printable character key (including Space).
    pub fn is_printable(&self) -> bool {
        matches!(self, Key::Char(_) | Key::Space)
    }

}

/// Key press event, sent to the element holding focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl KeyPressEvent {
    /// Create a key press with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
        }
    }

    /// Set the modifiers using builder pattern.
    pub fn with_modifiers(mut self, modifiers: KeyboardModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl From<Key> for KeyPressEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// The reason for a focus change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum FocusReason {
    /// Focus changed due to a pointer click.
    Mouse,
    /// Focus changed due to Tab key.
    Tab,
    /// Focus changed due to Shift+Tab (backtab).
    Backtab,
    /// Focus changed programmatically.
    #[default]
    Other,
}

/// Focus-out event, sent when focus leaves the widget entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusOutEvent {
    /// Why focus left.
    pub reason: FocusReason,
}

impl FocusOutEvent {
    /// Create a focus-out event.
    pub fn new(reason: FocusReason) -> Self {
        Self { reason }
    }
}

/// Events delivered to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A key was pressed while the widget held focus.
    KeyPress(KeyPressEvent),
    /// Primary pointer activation on the button.
    Click,
    /// Focus moved to an element outside the widget.
    FocusOut(FocusOutEvent),
}

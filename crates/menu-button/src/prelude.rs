//! Prelude module for the menu button.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```ignore
//! use menu_button::prelude::*;
//! ```

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use crate::property::Property;
pub use crate::signal::{ConnectionId, Signal};

// ============================================================================
// Configuration and Errors
// ============================================================================

pub use crate::config::{ItemConfig, MenuButtonConfig};
pub use crate::error::{ConfigError, MenuError};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    ActionId, ActionSink, Activation, InitialFocus, Menu, MenuButton, MenuItem, MenuState,
    OutputField, ReopenPolicy, Trigger,
};
pub use crate::widget::{
    Document, ElementSnapshot, FocusReason, FocusTarget, Key, KeyPressEvent, KeyboardModifiers,
    Widget, WidgetId,
};

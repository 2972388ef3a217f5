//! Accessible menu button widget.
//!
//! A button that opens a popup menu of actions, following the WAI-ARIA menu
//! button pattern: keyboard activation, roving focus over the items,
//! typeahead search and ARIA attributes that always agree with the open
//! state.
//!
//! This crate re-exports the core systems from `menu_button_core`.
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
//!     .with_items(["Action 1", "Action 2", "Currency", "Help"]);
//! let mut button = MenuButton::from_config(&config)?;
//! let output = Arc::new(OutputField::new());
//! button.connect_sink(output.clone());
//!
//! // Open with the keyboard, jump with typeahead, activate.
//! button.handle_key(&Key::Enter.into());
//! button.handle_key(&Key::Char('h').into());
//! button.handle_key(&Key::Enter.into());
//!
//! assert_eq!(output.value(), "Help");
//! assert!(!button.button_element().has_attribute("aria-expanded"));
//! # Ok::<(), menu_button::MenuError>(())
//! ```
//!
//! # Features
//!
//! - `accessibility` (default): export the widget as an AccessKit tree via
//!   `MenuButton::accessibility_update`

pub use menu_button_core::*;

pub mod config;
mod error;
pub mod prelude;
pub mod widget;

pub use config::{ItemConfig, MenuButtonConfig};
pub use error::{ConfigError, MenuError, Result};

static_assertions::assert_impl_all!(widget::widgets::MenuButton: Send, Sync);
static_assertions::assert_impl_all!(widget::Document: Send, Sync);

//! Widget implementations.

mod action;
mod menu;
mod menu_button;
mod typeahead;

pub use action::{ActionId, ActionSink, MenuItem, OutputField};
pub use menu::{InitialFocus, Menu, MenuState, Transition, transition};
pub use menu_button::{Activation, MenuButton, ReopenPolicy, Trigger};
pub use typeahead::{DEFAULT_TIMEOUT, Typeahead};

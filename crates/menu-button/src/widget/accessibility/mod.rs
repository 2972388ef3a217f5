//! Accessibility support for the menu button.
//!
//! Two views of the same widget state are provided:
//!
//! - [`ElementSnapshot`]: the DOM-level view, with the ARIA attributes a
//!   browser exposes (`aria-expanded`, `aria-controls`, `role="menu"`, ...)
//! - [`Accessible`] (feature `accessibility`): an
//!   [AccessKit](https://accesskit.dev/) tree for native assistive technology
//!
//! Both are computed from the widget on demand; nothing is cached, so the
//! attributes always agree with the open state.

mod aria;
#[cfg(feature = "accessibility")]
mod node;
mod role;

pub use aria::ElementSnapshot;
#[cfg(feature = "accessibility")]
pub use node::{Accessible, WidgetNode};
pub use role::AccessibleRole;

//! Rendered element state, as a DOM would expose it.
//!
//! An [`ElementSnapshot`] captures what assistive technology and a test driver
//! can observe of one element: tag, id, role, ARIA attributes, visibility and
//! focus. Snapshots are derived from widget state on demand, so they cannot
//! drift from it.

use std::collections::BTreeMap;
use std::fmt;

use super::role::AccessibleRole;

/// Observable state of one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSnapshot {
    tag: &'static str,
    id: Option<String>,
    role: AccessibleRole,
    attributes: BTreeMap<&'static str, String>,
    hidden: bool,
    focused: bool,
    text: String,
}

impl ElementSnapshot {
    /// Create a visible, unfocused element. An empty `id` means none.
    pub fn new(tag: &'static str, id: impl Into<String>, role: AccessibleRole) -> Self {
        let id = id.into();
        Self {
            tag,
            id: (!id.is_empty()).then_some(id),
            role,
            attributes: BTreeMap::new(),
            hidden: false,
            focused: false,
            text: String::new(),
        }
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value.into());
        self
    }

    /// Set an attribute only if `value` is present.
    pub fn with_optional_attribute(self, name: &'static str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_attribute(name, value),
            None => self,
        }
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the `hidden` state.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Set whether the element holds focus.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// The tag name.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The element id, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The accessibility role.
    pub fn role(&self) -> AccessibleRole {
        self.role
    }

    /// The text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the element is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether the element holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Look up an attribute by name.
    ///
    /// `id`, `role` and `hidden` are answered from the element state, like
    /// `getAttribute` on a DOM element.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        match name {
            "id" => self.id(),
            "role" => self.role.aria_role(),
            "hidden" => self.hidden.then_some(""),
            _ => self.attributes.get(name).map(String::as_str),
        }
    }

    /// Check if an attribute is present.
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

/// Renders the element as an HTML start tag, e.g.
/// `<ul id="menu1" role="menu" aria-labelledby="menubutton1" hidden>`.
impl fmt::Display for ElementSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", escape(id))?;
        }
        if let Some(role) = self.role.aria_role() {
            write!(f, " role=\"{role}\"")?;
        }
        for (name, value) in &self.attributes {
            write!(f, " {name}=\"{}\"", escape(value))?;
        }
        if self.hidden {
            f.write_str(" hidden")?;
        }
        f.write_str(">")
    }
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

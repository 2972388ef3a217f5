//! Accessibility roles for menu button elements.

/// The accessibility role of a widget element.
///
/// Each role maps both to a WAI-ARIA `role` attribute value and, with the
/// `accessibility` feature, to an AccessKit `Role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum AccessibleRole {
    /// A generic element with no specific role.
    #[default]
    Unknown,

    /// The container grouping a button and its menu.
    Group,

    /// A push button.
    Button,

    /// A popup list of actions.
    Menu,

    /// An actionable entry in a menu.
    MenuItem,
}

impl AccessibleRole {
    /// The value for the ARIA `role` attribute.
    ///
    /// Returns `None` where the element's native semantics apply (a `button`
    /// element is already a button).
    pub fn aria_role(self) -> Option<&'static str> {
        match self {
            AccessibleRole::Unknown | AccessibleRole::Button => None,
            AccessibleRole::Group => Some("group"),
            AccessibleRole::Menu => Some("menu"),
            AccessibleRole::MenuItem => Some("menuitem"),
        }
    }

    /// Convert to the corresponding AccessKit role.
    #[cfg(feature = "accessibility")]
    pub fn to_accesskit_role(self) -> accesskit::Role {
        use accesskit::Role;

        match self {
            AccessibleRole::Unknown => Role::Unknown,
            AccessibleRole::Group => Role::Group,
            AccessibleRole::Button => Role::Button,
            AccessibleRole::Menu => Role::Menu,
            AccessibleRole::MenuItem => Role::MenuItem,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aria_roles() {
        assert_eq!(AccessibleRole::Menu.aria_role(), Some("menu"));
        assert_eq!(AccessibleRole::MenuItem.aria_role(), Some("menuitem"));
        assert_eq!(AccessibleRole::Button.aria_role(), None);
        assert_eq!(AccessibleRole::default(), AccessibleRole::Unknown);
    }

    #[cfg(feature = "accessibility")]
    #[test]
    fn test_accesskit_roles() {
        assert_eq!(AccessibleRole::Button.to_accesskit_role(), accesskit::Role::Button);
        assert_eq!(AccessibleRole::Menu.to_accesskit_role(), accesskit::Role::Menu);
        assert_eq!(
            AccessibleRole::MenuItem.to_accesskit_role(),
            accesskit::Role::MenuItem
        );
    }
}

//! The Accessible trait and AccessKit node construction.

use accesskit::{Action, HasPopup, Node, NodeId};

use super::role::AccessibleRole;
use crate::widget::focus::FocusTarget;

/// An element of a menu button widget in the accessibility tree.
///
/// Node ids are stable for the lifetime of the widget: the root is `0`, the
/// button `1`, the menu `2` and the item at index `i` is `3 + i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetNode {
    /// The group containing the button and the menu.
    Root,
    /// The menu button.
    Button,
    /// The menu list.
    Menu,
    /// A menu item.
    Item(usize),
}

impl WidgetNode {
    /// The AccessKit id of this node.
    pub fn node_id(self) -> NodeId {
        match self {
            WidgetNode::Root => NodeId(0),
            WidgetNode::Button => NodeId(1),
            WidgetNode::Menu => NodeId(2),
            WidgetNode::Item(index) => NodeId(3 + index as u64),
        }
    }
}

impl From<FocusTarget> for WidgetNode {
    fn from(target: FocusTarget) -> Self {
        match target {
            FocusTarget::Button => WidgetNode::Button,
            FocusTarget::Item(index) => WidgetNode::Item(index),
        }
    }
}

/// Trait for elements that provide accessibility information.
///
/// Most methods have defaults returning "not applicable"; elements override
/// the ones relevant to them.
pub trait Accessible {
    /// The accessibility role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Unknown
    }

    /// The accessible name that screen readers announce.
    fn accessible_name(&self) -> Option<String> {
        None
    }

    /// The expanded state for elements that control a popup.
    fn is_accessible_expanded(&self) -> Option<bool> {
        None
    }

    /// The kind of popup this element opens.
    fn accessible_has_popup(&self) -> Option<HasPopup> {
        None
    }

    /// Whether the element is currently hidden.
    fn is_accessible_hidden(&self) -> bool {
        false
    }

    /// Nodes whose content this element controls.
    fn accessible_controls(&self) -> Vec<WidgetNode> {
        Vec::new()
    }

    /// Nodes that label this element.
    fn accessible_labelled_by(&self) -> Vec<WidgetNode> {
        Vec::new()
    }

    /// The active child of a composite element.
    fn accessible_active_descendant(&self) -> Option<WidgetNode> {
        None
    }

    /// Actions supported by this element.
    fn accessible_actions(&self) -> Vec<Action> {
        Vec::new()
    }

    /// Build an AccessKit node from this element's accessibility info.
    fn build_accessible_node(&self, children: &[WidgetNode]) -> Node {
        let mut node = Node::new(self.accessible_role().to_accesskit_role());

        if let Some(name) = self.accessible_name() {
            node.set_label(name);
        }

        if let Some(expanded) = self.is_accessible_expanded() {
            node.set_expanded(expanded);
        }

        if let Some(popup) = self.accessible_has_popup() {
            node.set_has_popup(popup);
        }

        if self.is_accessible_hidden() {
            node.set_hidden();
        }

        for action in self.accessible_actions() {
            node.add_action(action);
        }

        let controls: Vec<_> = self
            .accessible_controls()
            .into_iter()
            .map(WidgetNode::node_id)
            .collect();
        if !controls.is_empty() {
            node.set_controls(controls);
        }

        let labelled_by: Vec<_> = self
            .accessible_labelled_by()
            .into_iter()
            .map(WidgetNode::node_id)
            .collect();
        if !labelled_by.is_empty() {
            node.set_labelled_by(labelled_by);
        }

        if let Some(active) = self.accessible_active_descendant() {
            node.set_active_descendant(active.node_id());
        }

        let child_ids: Vec<_> = children.iter().map(|c| c.node_id()).collect();
        if !child_ids.is_empty() {
            node.set_children(child_ids);
        }

        node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem {
        label: String,
    }

    impl Accessible for TestItem {
        fn accessible_role(&self) -> AccessibleRole {
            AccessibleRole::MenuItem
        }

        fn accessible_name(&self) -> Option<String> {
            Some(self.label.clone())
        }

        fn accessible_actions(&self) -> Vec<Action> {
            vec![Action::Click]
        }
    }

    #[test]
    fn test_accessible_trait_defaults() {
        struct MinimalElement;
        impl Accessible for MinimalElement {}

        let element = MinimalElement;
        assert_eq!(element.accessible_role(), AccessibleRole::Unknown);
        assert!(element.accessible_name().is_none());
        assert!(element.is_accessible_expanded().is_none());
        assert!(element.accessible_actions().is_empty());
    }

    #[test]
    fn test_build_accessible_node() {
        let item = TestItem {
            label: "Action 1".to_string(),
        };
        let node = item.build_accessible_node(&[]);
        assert_eq!(node.role(), accesskit::Role::MenuItem);
        assert_eq!(node.label(), Some("Action 1"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_node_ids() {
        assert_eq!(WidgetNode::Root.node_id(), NodeId(0));
        assert_eq!(WidgetNode::Item(2).node_id(), NodeId(5));
        assert_eq!(WidgetNode::from(FocusTarget::Button), WidgetNode::Button);
    }
}

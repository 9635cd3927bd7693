//! Semantics tree exposed by dialog descriptions
//!
//! An open dialog describes itself as a small tree of [`Node`]s: the overlay
//! root, the scrim (dimmed backdrop), and the dialog surface with its title,
//! close affordance, and action buttons. Assistive tooling and tests query
//! this tree the same way: by role, by part, or by label.

/// Accessibility role of a semantics node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The modal dialog surface itself
    Dialog,
    /// The dialog title
    Heading,
    /// An interactive control (close affordance or action)
    Button,
    /// The dimmed backdrop behind the dialog
    Scrim,
    /// A non-semantic grouping node (the overlay root)
    Group,
}

/// Stable identity for each region of a dialog.
///
/// Parts double as click targets: event dispatch in
/// [`Dialog::update`](crate::Dialog::update) takes the part a pointer press
/// landed on, and semantics queries report which part a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Root node stacking scrim and surface
    Overlay,
    /// The backdrop behind the dialog
    Scrim,
    /// The dialog surface element
    Surface,
    /// The title heading inside the surface
    Title,
    /// The labeled close affordance
    CloseButton,
    /// The nth action control, in declaration order
    Action(usize),
}

/// One element of the semantics tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Which dialog region this node represents
    pub part: Part,
    /// Accessibility role
    pub role: Role,
    /// Human-readable label, if the region carries one
    pub label: Option<String>,
    /// Whether this node marks a modal region (true only on the surface)
    pub modal: bool,
    /// Part of the node that labels this one (the surface points at its title)
    pub labelled_by: Option<Part>,
    /// Whether this node holds initial input focus
    pub focused: bool,
    /// Child nodes, in render order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a bare node with the given part and role.
    pub fn new(part: Part, role: Role) -> Self {
        Self {
            part,
            role,
            label: None,
            modal: false,
            labelled_by: None,
            focused: false,
            children: Vec::new(),
        }
    }

    /// Set the node's label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Mark the node as a modal region.
    #[must_use]
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    /// Point at the part that labels this node.
    #[must_use]
    pub fn labelled_by(mut self, part: Part) -> Self {
        self.labelled_by = Some(part);
        self
    }

    /// Mark the node as holding initial focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Attach children, in render order.
    #[must_use]
    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// All nodes in the tree, depth-first, self included.
    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.nodes());
        }
        out
    }

    /// First node with the given role, depth-first.
    pub fn find_role(&self, role: Role) -> Option<&Node> {
        self.nodes().into_iter().find(|n| n.role == role)
    }

    /// Node for a specific dialog part, if present.
    pub fn find_part(&self, part: Part) -> Option<&Node> {
        self.nodes().into_iter().find(|n| n.part == part)
    }

    /// First node whose label matches, ignoring ASCII case.
    pub fn find_label(&self, label: &str) -> Option<&Node> {
        self.nodes().into_iter().find(|n| {
            n.label
                .as_deref()
                .is_some_and(|l| l.eq_ignore_ascii_case(label))
        })
    }

    /// How many nodes in the tree carry the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.nodes().iter().filter(|n| n.role == role).count()
    }

    /// The focused node, if any.
    pub fn focused_node(&self) -> Option<&Node> {
        self.nodes().into_iter().find(|n| n.focused)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::new(Part::Overlay, Role::Group).children(vec![
            Node::new(Part::Scrim, Role::Scrim),
            Node::new(Part::Surface, Role::Dialog)
                .modal(true)
                .children(vec![
                    Node::new(Part::Title, Role::Heading).label("Settings"),
                    Node::new(Part::CloseButton, Role::Button).label("Close dialog"),
                ]),
        ])
    }

    #[test]
    fn depth_first_traversal_visits_all_nodes() {
        let tree = sample();
        assert_eq!(tree.nodes().len(), 5);
    }

    #[test]
    fn find_label_ignores_case() {
        let tree = sample();
        let node = tree.find_label("close DIALOG").unwrap();
        assert_eq!(node.part, Part::CloseButton);
        assert!(tree.find_label("close").is_none());
    }

    #[test]
    fn find_role_returns_first_match() {
        let tree = sample();
        assert_eq!(tree.find_role(Role::Dialog).unwrap().part, Part::Surface);
        assert_eq!(tree.count_role(Role::Button), 1);
    }

    #[test]
    fn focused_node_absent_by_default() {
        assert!(sample().focused_node().is_none());
    }
}

//! Modal dialog descriptions and event dispatch
//!
//! A [`Dialog`] is pure data rebuilt from application state on every frame,
//! in the same way the iced layer rebuilds its widget tree. It answers two
//! questions: what does the dialog expose to assistive tooling
//! ([`Dialog::semantics`]), and what message does a given user interaction
//! produce ([`Dialog::update`]).
//!
//! Every user-initiated dismissal path (Escape, scrim click, close
//! affordance) yields the dismissal message exactly once per interaction.
//! A dialog without a dismissal message simply ignores those paths.

use crate::event::{Event, Key};
use crate::semantics::{Node, Part, Role};

/// Label carried by the dialog's close affordance.
///
/// Kept stable so assistive tooling and tests can locate the control by
/// label rather than by position.
pub const CLOSE_LABEL: &str = "Close dialog";

/// A labeled control rendered inside the dialog, distinct from the close
/// affordance. Activating it yields `message`, never the dismissal message.
#[derive(Debug, Clone)]
pub struct Action<M> {
    /// Text shown on the control
    pub label: String,
    /// Message produced when the control is activated
    pub message: M,
}

/// Description of a modal dialog overlay.
#[derive(Debug, Clone)]
pub struct Dialog<M> {
    open: bool,
    title: String,
    on_dismiss: Option<M>,
    actions: Vec<Action<M>>,
}

impl<M: Clone> Dialog<M> {
    /// Create a closed dialog with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            open: false,
            title: title.into(),
            on_dismiss: None,
            actions: Vec::new(),
        }
    }

    /// Set whether the dialog is displayed.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Message produced by every user-initiated dismissal path.
    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }

    /// Append a labeled action control.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, message: M) -> Self {
        self.actions.push(Action {
            label: label.into(),
            message,
        });
        self
    }

    /// Whether the dialog is displayed.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The dialog title, rendered as its heading.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The action controls, in declaration order.
    pub fn actions(&self) -> &[Action<M>] {
        &self.actions
    }

    /// The dismissal message, if one was supplied.
    pub fn dismiss_message(&self) -> Option<&M> {
        self.on_dismiss.as_ref()
    }

    /// The semantics tree of the dialog: `Some` iff the dialog is open.
    ///
    /// The surface node carries the dialog role, the modal flag, a
    /// labelled-by reference resolving to the title heading, and initial
    /// input focus.
    pub fn semantics(&self) -> Option<Node> {
        if !self.open {
            return None;
        }

        let mut surface_children = vec![
            Node::new(Part::Title, Role::Heading).label(self.title.clone()),
            Node::new(Part::CloseButton, Role::Button).label(CLOSE_LABEL),
        ];
        for (index, action) in self.actions.iter().enumerate() {
            surface_children
                .push(Node::new(Part::Action(index), Role::Button).label(action.label.clone()));
        }

        let surface = Node::new(Part::Surface, Role::Dialog)
            .modal(true)
            .labelled_by(Part::Title)
            .focused(true)
            .children(surface_children);

        Some(Node::new(Part::Overlay, Role::Group).children(vec![
            Node::new(Part::Scrim, Role::Scrim),
            surface,
        ]))
    }

    /// Dispatch one user interaction, yielding at most one message.
    ///
    /// A closed dialog ignores everything. Clicks on non-interactive parts
    /// (the surface, the title) are ignored, so a click inside the dialog
    /// never dismisses it.
    pub fn update(&self, event: &Event) -> Option<M> {
        if !self.open {
            return None;
        }

        match event {
            Event::KeyPressed(Key::Escape) => self.dismiss("escape"),
            Event::KeyPressed(_) => None,
            Event::Clicked(Part::Scrim) => self.dismiss("scrim click"),
            Event::Clicked(Part::CloseButton) => self.dismiss("close affordance"),
            Event::Clicked(Part::Action(index)) => {
                let action = self.actions.get(*index)?;
                log::debug!("dialog '{}': action '{}' activated", self.title, action.label);
                Some(action.message.clone())
            }
            Event::Clicked(_) => None,
        }
    }

    fn dismiss(&self, source: &str) -> Option<M> {
        match &self.on_dismiss {
            Some(message) => {
                log::debug!("dialog '{}': dismissed via {}", self.title, source);
                Some(message.clone())
            }
            None => {
                log::debug!("dialog '{}': {} ignored, no dismissal message", self.title, source);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Msg {
        Dismiss,
        Run,
    }

    /// Minimal stand-in for an application update loop: counts how often
    /// each message was delivered.
    #[derive(Default)]
    struct Counter {
        dismissed: usize,
        ran: usize,
    }

    impl Counter {
        fn apply(&mut self, message: Option<Msg>) {
            match message {
                Some(Msg::Dismiss) => self.dismissed += 1,
                Some(Msg::Run) => self.ran += 1,
                None => {}
            }
        }
    }

    fn confirm() -> Dialog<Msg> {
        Dialog::new("Clear history")
            .open(true)
            .on_dismiss(Msg::Dismiss)
            .action("Action", Msg::Run)
    }

    #[test]
    fn dialog_present_in_tree_when_open() {
        let tree = confirm().semantics().expect("open dialog has semantics");
        assert!(tree.find_role(Role::Dialog).is_some());
        assert_eq!(tree.count_role(Role::Dialog), 1);
    }

    #[test]
    fn dialog_absent_from_tree_when_closed() {
        let dialog = Dialog::new("Clear history")
            .open(false)
            .on_dismiss(Msg::Dismiss);
        assert!(dialog.semantics().is_none());
    }

    #[test]
    fn surface_is_modal_and_labelled_by_title() {
        let tree = confirm().semantics().unwrap();
        let surface = tree.find_role(Role::Dialog).unwrap();

        assert!(surface.modal);
        let title_part = surface.labelled_by.expect("surface labelled by title");
        let title = tree.find_part(title_part).expect("title node rendered");
        assert_eq!(title.role, Role::Heading);
        assert_eq!(title.label.as_deref(), Some("Clear history"));
    }

    #[test]
    fn escape_dismisses_exactly_once() {
        let dialog = confirm();
        let mut counter = Counter::default();

        counter.apply(dialog.update(&Event::KeyPressed(Key::Escape)));

        assert_eq!(counter.dismissed, 1);
        assert_eq!(counter.ran, 0);
    }

    #[test]
    fn other_keys_are_ignored() {
        let dialog = confirm();
        assert!(dialog.update(&Event::KeyPressed(Key::Enter)).is_none());
        assert!(dialog.update(&Event::KeyPressed(Key::Tab)).is_none());
        assert!(dialog.update(&Event::KeyPressed(Key::Other)).is_none());
    }

    #[test]
    fn scrim_click_dismisses_exactly_once() {
        let dialog = confirm();
        let mut counter = Counter::default();

        counter.apply(dialog.update(&Event::Clicked(Part::Scrim)));

        assert_eq!(counter.dismissed, 1);
    }

    #[test]
    fn close_affordance_found_by_label_dismisses() {
        let dialog = confirm();
        let tree = dialog.semantics().unwrap();
        let close = tree.find_label("close dialog").expect("close affordance is labeled");
        assert_eq!(close.label.as_deref(), Some(CLOSE_LABEL));

        let mut counter = Counter::default();
        counter.apply(dialog.update(&Event::Clicked(close.part)));

        assert_eq!(counter.dismissed, 1);
    }

    #[test]
    fn action_click_runs_action_not_dismissal() {
        let dialog = confirm();
        let tree = dialog.semantics().unwrap();
        let control = tree.find_label("action").expect("action control rendered");
        assert_eq!(control.role, Role::Button);

        let mut counter = Counter::default();
        counter.apply(dialog.update(&Event::Clicked(control.part)));

        assert_eq!(counter.ran, 1);
        assert_eq!(counter.dismissed, 0);
    }

    #[test]
    fn dialog_holds_initial_focus() {
        let tree = confirm().semantics().unwrap();
        let focused = tree.focused_node().expect("something holds focus");
        assert_eq!(focused.role, Role::Dialog);
    }

    #[test]
    fn closed_dialog_ignores_all_events() {
        let dialog = Dialog::new("Clear history").on_dismiss(Msg::Dismiss);
        assert!(dialog.update(&Event::KeyPressed(Key::Escape)).is_none());
        assert!(dialog.update(&Event::Clicked(Part::Scrim)).is_none());
        assert!(dialog.update(&Event::Clicked(Part::CloseButton)).is_none());
    }

    #[test]
    fn missing_dismissal_message_is_not_invoked() {
        let dialog: Dialog<Msg> = Dialog::new("Notice").open(true);
        assert!(dialog.update(&Event::KeyPressed(Key::Escape)).is_none());
        assert!(dialog.update(&Event::Clicked(Part::Scrim)).is_none());
    }

    #[test]
    fn clicks_inside_surface_do_not_dismiss() {
        let dialog = confirm();
        assert!(dialog.update(&Event::Clicked(Part::Surface)).is_none());
        assert!(dialog.update(&Event::Clicked(Part::Title)).is_none());
    }

    #[test]
    fn actions_render_in_declaration_order() {
        let dialog = Dialog::new("Export track")
            .open(true)
            .on_dismiss(Msg::Dismiss)
            .action("Cancel", Msg::Dismiss)
            .action("Export", Msg::Run);
        let tree = dialog.semantics().unwrap();

        assert_eq!(tree.find_label("Cancel").unwrap().part, Part::Action(0));
        let export = tree.find_label("Export").unwrap();
        assert_eq!(export.role, Role::Button);
        assert_eq!(export.part, Part::Action(1));
    }

    #[test]
    fn empty_action_list_renders_no_action_controls() {
        let dialog: Dialog<Msg> = Dialog::new("Notice").open(true).on_dismiss(Msg::Dismiss);
        let tree = dialog.semantics().unwrap();

        assert!(tree
            .nodes()
            .iter()
            .all(|n| !matches!(n.part, Part::Action(_))));
        // The close affordance is the only button left
        assert_eq!(tree.count_role(Role::Button), 1);
    }

    #[test]
    fn out_of_range_action_click_is_ignored() {
        let dialog = confirm();
        assert!(dialog.update(&Event::Clicked(Part::Action(7))).is_none());
    }
}

use std::rc::Rc;

use yew::functional::Reducible;

/// Whether the innovation form is being filled in or showing its confirmation.
///
/// Only this flag is kept. The name, project and vision fields are never read:
/// submission is a local placeholder with no endpoint behind it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Editing,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    /// The browser accepted the required fields and fired `submit`.
    Submit,
    /// "Send another idea" on the confirmation view.
    SendAnother,
}

impl FormState {
    pub fn on(self, event: FormEvent) -> FormState {
        match event {
            FormEvent::Submit => FormState::Submitted,
            FormEvent::SendAnother => FormState::Editing,
        }
    }
}

impl Reducible for FormState {
    type Action = FormEvent;

    fn reduce(self: Rc<Self>, action: FormEvent) -> Rc<Self> {
        let next = self.on(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_then_send_another_round_trips() {
        let state = FormState::default();
        assert_eq!(state, FormState::Editing);

        let state = state.on(FormEvent::Submit);
        assert_eq!(state, FormState::Submitted);

        let state = state.on(FormEvent::SendAnother);
        assert_eq!(state, FormState::Editing);
    }

    #[test]
    fn repeated_submit_stays_submitted() {
        assert_eq!(FormState::Submitted.on(FormEvent::Submit), FormState::Submitted);
    }

    #[test]
    fn send_another_while_editing_changes_nothing() {
        let editing = Rc::new(FormState::Editing);
        let after = editing.clone().reduce(FormEvent::SendAnother);
        assert!(Rc::ptr_eq(&editing, &after));
    }
}

use std::rc::Rc;

use yew::functional::Reducible;

/// Open/closed flag of the mobile overlay menu. Owned by `Nav`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// Burger button pressed.
    Toggle,
    /// Any section link, inline or in the overlay.
    NavLinkActivated,
    /// The "Buy Now" button.
    CallToActionActivated,
}

impl MenuState {
    pub fn on(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::NavLinkActivated) => MenuState::Closed,
            (_, MenuEvent::CallToActionActivated) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: MenuEvent) -> Rc<Self> {
        let next = self.on(action);
        if next == *self {
            self
        } else {
            log::debug!("menu {:?} -> {:?} on {:?}", *self, next, action);
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_opens_then_nav_link_closes() {
        let open = MenuState::default().on(MenuEvent::Toggle);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.on(MenuEvent::NavLinkActivated), MenuState::Closed);
    }

    #[test]
    fn call_to_action_closes_an_open_menu() {
        assert_eq!(
            MenuState::Open.on(MenuEvent::CallToActionActivated),
            MenuState::Closed
        );
        assert_eq!(
            MenuState::Closed.on(MenuEvent::CallToActionActivated),
            MenuState::Closed
        );
    }

    #[test]
    fn nav_link_on_closed_menu_is_a_no_op() {
        assert_eq!(MenuState::Closed.on(MenuEvent::NavLinkActivated), MenuState::Closed);
    }

    #[test]
    fn two_open_close_cycles_return_to_initial() {
        let initial = MenuState::default();
        let end = [MenuEvent::Toggle; 4]
            .into_iter()
            .fold(initial, MenuState::on);
        assert_eq!(end, initial);
    }

    #[test]
    fn reducer_keeps_the_same_cell_when_nothing_changes() {
        let closed = Rc::new(MenuState::Closed);
        let after = closed.clone().reduce(MenuEvent::NavLinkActivated);
        assert!(Rc::ptr_eq(&closed, &after));

        let opened = closed.reduce(MenuEvent::Toggle);
        assert_eq!(*opened, MenuState::Open);
    }
}

use std::mem;

use lightsout_core::Position;

/// A user intent collected from the UI during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    ToggleTile(Position),
    NewGame,
    LoadGame,
    SaveGame,
    Hint,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue};
    use lightsout_core::Position;

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::ToggleTile(Position::new(1, 2)));
        queue.request(Action::Hint);

        let drained = queue.take_all();
        assert_eq!(
            drained,
            [Action::ToggleTile(Position::new(1, 2)), Action::Hint]
        );

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}

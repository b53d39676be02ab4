use std::{mem, sync::Arc};

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    List(ListAction),
    Editor(EditorAction),
    Ui(UiAction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ListAction {
    AddMeal,
    ShowMeal(usize),
    DeleteMeal(usize),
    RetrySave,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditorAction {
    SetName(String),
    TapStar(u8),
    SetPhoto(Arc<[u8]>),
    ClearPhoto,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UiAction {
    DismissNotice,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: impl Into<Action>) {
        self.actions.push(action.into());
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use super::{Action, ActionRequestQueue, EditorAction, ListAction};

    #[test]
    fn take_all_returns_actions_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(ListAction::AddMeal);
        queue.request(EditorAction::Cancel);

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], Action::List(ListAction::AddMeal)));
        assert!(matches!(drained[1], Action::Editor(EditorAction::Cancel)));

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}

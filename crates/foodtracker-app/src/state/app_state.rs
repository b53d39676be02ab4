use foodtracker_store::MealStore;

use crate::state::{ListSource, MealListState};

// AppState holds the state backed by the meal snapshot. UiState holds everything else.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) meal_list: MealListState,
}

impl AppState {
    /// Creates the state and activates the list screen.
    #[must_use]
    pub(crate) fn load(store: Box<dyn MealStore>) -> (Self, ListSource) {
        let mut meal_list = MealListState::new(store);
        let source = meal_list.activate();
        (Self { meal_list }, source)
    }
}

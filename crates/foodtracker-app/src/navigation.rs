//! Tagged navigation between the list and editor screens.

use foodtracker_core::Meal;

/// What the list screen asks the editor to show.
///
/// Carries only the data the editor needs, so the editor never inspects the
/// list it came from.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum NavigationIntent {
    /// Open an empty editor for a new meal.
    AddMeal,
    /// Open the editor on an existing meal.
    ShowMeal { row: usize, meal: Meal },
}

/// How the editor was left.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum EditorOutcome {
    Saved(Meal),
    Cancelled,
}

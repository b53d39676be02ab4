use std::path::PathBuf;

use foodtracker_core::{Meal, sample_meals};
use foodtracker_store::{LoadError, MealStore, SaveError};

use crate::navigation::{EditorOutcome, NavigationIntent};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum ListError {
    #[display("row {row} does not exist (list has {len} meals)")]
    RowOutOfRange { row: usize, len: usize },
    #[display("could not save meals: {_0}")]
    #[from]
    Save(SaveError),
}

/// Where the meals shown after activation came from.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum ListSource {
    Snapshot,
    Samples,
    /// A snapshot exists but could not be loaded; samples are shown instead.
    ///
    /// `backup` is where an undecodable snapshot was moved before anything
    /// can overwrite it.
    UnreadableSnapshot { backup: Option<PathBuf> },
}

// MealListState owns the meal list for the lifetime of the app. Every mutation is followed by a save.
#[derive(Debug)]
pub(crate) struct MealListState {
    meals: Vec<Meal>,
    selected_row: Option<usize>,
    store: Box<dyn MealStore>,
}

impl MealListState {
    #[must_use]
    pub(crate) fn new(store: Box<dyn MealStore>) -> Self {
        Self {
            meals: Vec::new(),
            selected_row: None,
            store,
        }
    }

    /// Loads the saved list, falling back to the sample meals.
    ///
    /// Seeding does not write anything; the samples are only saved once the
    /// user changes the list.
    pub(crate) fn activate(&mut self) -> ListSource {
        self.selected_row = None;
        match self.store.load() {
            Ok(Some(meals)) => {
                log::info!("loaded {} saved meals", meals.len());
                self.meals = meals;
                ListSource::Snapshot
            }
            Ok(None) => {
                log::info!("no saved meals, showing samples");
                self.meals = sample_meals();
                ListSource::Samples
            }
            Err(err) => {
                log::warn!("ignoring unreadable meal snapshot: {err}");
                self.meals = sample_meals();
                let backup = match err {
                    LoadError::Decode { .. } => self.back_up_unreadable(),
                    LoadError::Read { .. } => None,
                };
                ListSource::UnreadableSnapshot { backup }
            }
        }
    }

    fn back_up_unreadable(&mut self) -> Option<PathBuf> {
        match self.store.back_up_unreadable() {
            Ok(backup) => backup,
            Err(err) => {
                log::error!("{err}");
                None
            }
        }
    }

    #[must_use]
    pub(crate) fn meals(&self) -> &[Meal] {
        &self.meals
    }

    #[must_use]
    pub(crate) fn selected_row(&self) -> Option<usize> {
        self.selected_row
    }

    pub(crate) fn navigate_to(&self, row: usize) -> Result<NavigationIntent, ListError> {
        let meal = self.meals.get(row).ok_or(ListError::RowOutOfRange {
            row,
            len: self.meals.len(),
        })?;
        Ok(NavigationIntent::ShowMeal {
            row,
            meal: meal.clone(),
        })
    }

    pub(crate) fn prepare(&mut self, intent: &NavigationIntent) {
        self.selected_row = match intent {
            NavigationIntent::AddMeal => None,
            NavigationIntent::ShowMeal { row, .. } => Some(*row),
        };
    }

    pub(crate) fn finish(&mut self, outcome: EditorOutcome) -> Result<(), ListError> {
        match outcome {
            EditorOutcome::Saved(meal) => self.upsert(meal),
            EditorOutcome::Cancelled => {
                self.selected_row = None;
                Ok(())
            }
        }
    }

    /// Replaces the selected row, or appends when nothing is selected.
    ///
    /// On a save failure the list keeps the new meal; call [`Self::save`] to
    /// retry.
    pub(crate) fn upsert(&mut self, meal: Meal) -> Result<(), ListError> {
        match self.selected_row.take() {
            Some(row) if row < self.meals.len() => {
                log::debug!("replacing meal at row {row}");
                self.meals[row] = meal;
            }
            Some(row) => {
                return Err(ListError::RowOutOfRange {
                    row,
                    len: self.meals.len(),
                });
            }
            None => {
                log::debug!("appending meal at row {}", self.meals.len());
                self.meals.push(meal);
            }
        }
        self.save()
    }

    pub(crate) fn delete(&mut self, row: usize) -> Result<Meal, ListError> {
        if row >= self.meals.len() {
            return Err(ListError::RowOutOfRange {
                row,
                len: self.meals.len(),
            });
        }
        let removed = self.meals.remove(row);
        self.selected_row = match self.selected_row {
            Some(selected) if selected == row => None,
            Some(selected) if selected > row => Some(selected - 1),
            other => other,
        };
        log::debug!("deleted meal {:?} at row {row}", removed.name());
        self.save()?;
        Ok(removed)
    }

    pub(crate) fn save(&mut self) -> Result<(), ListError> {
        self.store.save(&self.meals)?;
        Ok(())
    }
}

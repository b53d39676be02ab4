use std::sync::Arc;

use foodtracker_core::{Meal, MealError, Photo, PhotoError};

use crate::{
    navigation::NavigationIntent,
    rating_control::{RatingControl, RatingControlError, RatingRender},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub(crate) enum EditorMode {
    Create,
    Edit { row: usize },
}

// MealEditorState holds the fields of the meal being edited. Nothing is written back until confirm.
#[derive(Debug, Clone)]
pub(crate) struct MealEditorState {
    mode: EditorMode,
    name: String,
    photo: Option<Photo>,
    rating: RatingControl,
    can_confirm: bool,
}

impl MealEditorState {
    #[must_use]
    pub(crate) fn from_intent(intent: &NavigationIntent) -> Self {
        let mut rating = RatingControl::default();
        let mut this = match intent {
            NavigationIntent::AddMeal => Self {
                mode: EditorMode::Create,
                name: String::new(),
                photo: None,
                rating,
                can_confirm: false,
            },
            NavigationIntent::ShowMeal { row, meal } => {
                if let Err(err) = rating.set_rating(meal.rating().value()) {
                    log::warn!("meal rating does not fit the control: {err}");
                }
                Self {
                    mode: EditorMode::Edit { row: *row },
                    name: meal.name().to_owned(),
                    photo: meal.photo().cloned(),
                    rating,
                    can_confirm: false,
                }
            }
        };
        this.update_can_confirm();
        this
    }

    #[must_use]
    pub(crate) fn mode(&self) -> EditorMode {
        self.mode
    }

    #[must_use]
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub(crate) fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    #[must_use]
    pub(crate) fn rating(&self) -> &RatingControl {
        &self.rating
    }

    #[must_use]
    pub(crate) fn can_confirm(&self) -> bool {
        self.can_confirm
    }

    /// Title shown above the editor: the meal name, or "New Meal" while
    /// creating.
    #[must_use]
    pub(crate) fn title(&self) -> &str {
        match self.mode {
            EditorMode::Create => "New Meal",
            EditorMode::Edit { .. } if self.name.is_empty() => "Untitled Meal",
            EditorMode::Edit { .. } => &self.name,
        }
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.update_can_confirm();
    }

    pub(crate) fn tap_star(&mut self, star: u8) -> Result<RatingRender, RatingControlError> {
        self.rating.tap(star)
    }

    pub(crate) fn set_photo(&mut self, bytes: impl Into<Arc<[u8]>>) -> Result<(), PhotoError> {
        self.photo = Some(Photo::from_bytes(bytes)?);
        Ok(())
    }

    pub(crate) fn clear_photo(&mut self) {
        self.photo = None;
    }

    pub(crate) fn confirm(&self) -> Result<Meal, MealError> {
        Meal::new(
            self.name.clone(),
            self.photo.clone(),
            i64::from(self.rating.rating()),
        )
    }

    fn update_can_confirm(&mut self) {
        self.can_confirm = !self.name.is_empty();
    }
}

#[cfg(test)]
mod tests {
    use foodtracker_core::Rating;

    use super::*;

    fn caprese() -> Meal {
        Meal::new("Caprese Salad", None, 4).unwrap()
    }

    #[test]
    fn add_intent_starts_empty() {
        let editor = MealEditorState::from_intent(&NavigationIntent::AddMeal);
        assert!(editor.mode().is_create());
        assert_eq!(editor.name(), "");
        assert!(editor.photo().is_none());
        assert_eq!(editor.rating().rating(), 0);
        assert!(!editor.can_confirm());
        assert_eq!(editor.title(), "New Meal");
    }

    #[test]
    fn show_intent_prefills_fields() {
        let editor = MealEditorState::from_intent(&NavigationIntent::ShowMeal {
            row: 2,
            meal: caprese(),
        });
        assert_eq!(editor.mode(), EditorMode::Edit { row: 2 });
        assert_eq!(editor.name(), "Caprese Salad");
        assert_eq!(editor.rating().rating(), 4);
        assert!(editor.can_confirm());
        assert_eq!(editor.title(), "Caprese Salad");
    }

    #[test]
    fn confirm_enabled_tracks_every_name_change() {
        let mut editor = MealEditorState::from_intent(&NavigationIntent::AddMeal);
        editor.set_name("T");
        assert!(editor.can_confirm());
        editor.set_name("");
        assert!(!editor.can_confirm());
        editor.set_name("Tacos");
        assert!(editor.can_confirm());
    }

    #[test]
    fn confirm_builds_meal_from_fields() {
        let mut editor = MealEditorState::from_intent(&NavigationIntent::AddMeal);
        editor.set_name("Tacos");
        editor.tap_star(2).unwrap();

        let meal = editor.confirm().unwrap();
        assert_eq!(meal, Meal::new("Tacos", None, 2).unwrap());
    }

    #[test]
    fn confirm_with_empty_name_is_recoverable() {
        let mut editor = MealEditorState::from_intent(&NavigationIntent::ShowMeal {
            row: 0,
            meal: caprese(),
        });
        editor.set_name("");
        assert_eq!(editor.confirm(), Err(MealError::EmptyName));
        assert_eq!(editor.title(), "Untitled Meal");

        editor.set_name("Caprese Salad v2");
        assert_eq!(editor.confirm().unwrap().rating(), Rating::new(4).unwrap());
    }

    #[test]
    fn photo_can_be_set_and_cleared() {
        let mut editor = MealEditorState::from_intent(&NavigationIntent::AddMeal);
        assert_eq!(
            editor.set_photo(b"not an image".as_slice()),
            Err(PhotoError::UnrecognizedFormat)
        );
        assert!(editor.photo().is_none());

        editor
            .set_photo([0xff, 0xd8, 0xff, 0xe0].as_slice())
            .unwrap();
        assert!(editor.photo().unwrap().format().is_jpeg());

        editor.clear_photo();
        assert!(editor.photo().is_none());
    }
}

use std::sync::Arc;

use foodtracker_core::{Photo, Rating};

use crate::{
    state::{AppState, MealEditorState, UiState},
    ui::{
        PhotoViewModel,
        meal_editor::MealEditorViewModel,
        meal_list::{MealListViewModel, MealRowViewModel},
        screen::ScreenViewModel,
        status_line::StatusLineViewModel,
    },
};

fn build_photo_vm(photo: &Photo) -> PhotoViewModel {
    PhotoViewModel {
        uri: photo.uri(),
        bytes: Arc::clone(photo.bytes()),
    }
}

#[must_use]
pub(crate) fn build_meal_list_vm(app_state: &AppState) -> MealListViewModel {
    let rows = app_state
        .meal_list
        .meals()
        .iter()
        .map(|meal| MealRowViewModel {
            name: meal.name().to_owned(),
            rating: meal.rating().value(),
            star_count: Rating::MAX,
            photo: meal.photo().map(build_photo_vm),
        })
        .collect();
    MealListViewModel { rows }
}

#[must_use]
pub(crate) fn build_meal_editor_vm(editor: &MealEditorState) -> MealEditorViewModel {
    MealEditorViewModel {
        title: editor.title().to_owned(),
        name: editor.name().to_owned(),
        photo: editor.photo().map(build_photo_vm),
        rating: editor.rating().render(),
        can_confirm: editor.can_confirm(),
        is_new: editor.mode().is_create(),
    }
}

#[must_use]
pub(crate) fn build_screen_vm(app_state: &AppState, ui_state: &UiState) -> ScreenViewModel {
    match ui_state.screen.as_editor() {
        Some(editor) => ScreenViewModel::MealEditor(build_meal_editor_vm(editor)),
        None => ScreenViewModel::MealList(build_meal_list_vm(app_state)),
    }
}

#[must_use]
pub(crate) fn build_status_line_vm(ui_state: &UiState) -> Option<StatusLineViewModel> {
    ui_state.notice.as_ref().map(|notice| StatusLineViewModel {
        kind: notice.kind,
        message: notice.message.clone(),
        retry_save: notice.retry_save,
    })
}

#[cfg(test)]
mod tests {
    use foodtracker_core::Meal;
    use foodtracker_store::FileMealStore;
    use tempfile::tempdir;

    use super::*;
    use crate::{
        navigation::NavigationIntent,
        state::{Notice, NoticeKind, Screen},
    };

    const JPEG_HEADER: &[u8] = &[0xff, 0xd8, 0xff, 0xe0];

    fn sample_state() -> AppState {
        let dir = tempdir().unwrap();
        let (app_state, _) =
            AppState::load(Box::new(FileMealStore::new(dir.path().join("meals.cbor"))));
        app_state
    }

    #[test]
    fn list_rows_follow_meal_order() {
        let app_state = sample_state();
        let vm = build_meal_list_vm(&app_state);

        let rows: Vec<_> = vm
            .rows
            .iter()
            .map(|row| (row.name.as_str(), row.rating))
            .collect();
        assert_eq!(
            rows,
            [
                ("Caprese Salad", 4),
                ("Chicken and Potatoes", 5),
                ("Pasta with Meatballs", 3)
            ]
        );
        assert!(vm.rows.iter().all(|row| row.star_count == 5));
        assert!(vm.rows.iter().all(|row| row.photo.is_none()));
    }

    #[test]
    fn editor_vm_mirrors_editor_state() {
        let meal = Meal::new("Tacos", None, 2).unwrap();
        let mut editor =
            MealEditorState::from_intent(&NavigationIntent::ShowMeal { row: 0, meal });
        editor.set_photo(JPEG_HEADER).unwrap();

        let vm = build_meal_editor_vm(&editor);
        assert_eq!(vm.title, "Tacos");
        assert_eq!(vm.name, "Tacos");
        assert!(vm.can_confirm);
        assert!(!vm.is_new);
        assert_eq!(vm.rating.rating, 2);
        assert_eq!(vm.rating.stars.len(), 5);

        let photo = vm.photo.unwrap();
        assert!(photo.uri.starts_with("bytes://meal-photo/"));
        assert!(photo.uri.ends_with(".jpg"));
        assert_eq!(&*photo.bytes, JPEG_HEADER);
    }

    #[test]
    fn screen_vm_follows_active_screen() {
        let app_state = sample_state();
        let mut ui_state = UiState::default();
        assert!(matches!(
            build_screen_vm(&app_state, &ui_state),
            ScreenViewModel::MealList(_)
        ));

        ui_state.screen =
            Screen::MealEditor(MealEditorState::from_intent(&NavigationIntent::AddMeal));
        let ScreenViewModel::MealEditor(vm) = build_screen_vm(&app_state, &ui_state) else {
            panic!("expected editor view model");
        };
        assert_eq!(vm.title, "New Meal");
        assert!(!vm.can_confirm);
        assert!(vm.is_new);
    }

    #[test]
    fn status_line_only_with_notice() {
        let mut ui_state = UiState::default();
        assert!(build_status_line_vm(&ui_state).is_none());

        ui_state.notice = Some(Notice::save_failed("could not save meals"));
        let vm = build_status_line_vm(&ui_state).unwrap();
        assert_eq!(vm.kind, NoticeKind::Error);
        assert_eq!(vm.message, "could not save meals");
        assert!(vm.retry_save);
    }
}

use crate::{
    action::{Action, ActionRequestQueue, EditorAction, ListAction, UiAction},
    navigation::{EditorOutcome, NavigationIntent},
    state::{AppState, EditorMode, ListError, MealEditorState, Notice, Screen, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
    };

    match action {
        Action::List(action) => ctx.handle_list(action),
        Action::Editor(action) => ctx.handle_editor(action),
        Action::Ui(UiAction::DismissNotice) => ctx.ui_state.notice = None,
    }
}

impl ActionContext<'_> {
    fn handle_list(&mut self, action: ListAction) {
        match action {
            ListAction::AddMeal => self.open_editor(NavigationIntent::AddMeal),
            ListAction::ShowMeal(row) => match self.app_state.meal_list.navigate_to(row) {
                Ok(intent) => self.open_editor(intent),
                Err(err) => self.report_list_error(&err),
            },
            ListAction::DeleteMeal(row) => match self.app_state.meal_list.delete(row) {
                Ok(meal) => {
                    self.ui_state.notice = Some(Notice::info(format!("Deleted “{}”", meal.name())));
                }
                Err(err) => self.report_list_error(&err),
            },
            ListAction::RetrySave => match self.app_state.meal_list.save() {
                Ok(()) => {
                    log::info!("retried save succeeded");
                    self.ui_state.notice = None;
                }
                Err(err) => self.report_list_error(&err),
            },
        }
    }

    fn handle_editor(&mut self, action: EditorAction) {
        let Some(editor) = self.ui_state.screen.as_editor_mut() else {
            log::warn!("ignoring {action:?}: editor is not open");
            return;
        };

        match action {
            EditorAction::SetName(name) => editor.set_name(name),
            EditorAction::TapStar(star) => {
                if let Err(err) = editor.tap_star(star) {
                    log::warn!("ignoring star tap: {err}");
                }
            }
            EditorAction::SetPhoto(bytes) => match editor.set_photo(bytes) {
                Ok(()) => self.ui_state.notice = None,
                Err(err) => {
                    log::warn!("rejected photo: {err}");
                    self.ui_state.notice = Some(Notice::error(format!("Cannot use photo: {err}")));
                }
            },
            EditorAction::ClearPhoto => editor.clear_photo(),
            EditorAction::Confirm => match editor.confirm() {
                Ok(meal) => {
                    match editor.mode() {
                        EditorMode::Create => log::debug!("adding meal {:?}", meal.name()),
                        EditorMode::Edit { row } => {
                            log::debug!("updating meal {:?} at row {row}", meal.name());
                        }
                    }
                    self.close_editor(EditorOutcome::Saved(meal));
                }
                Err(err) => {
                    log::warn!("cannot save meal: {err}");
                    self.ui_state.notice = Some(Notice::error(format!("Cannot save meal: {err}")));
                }
            },
            EditorAction::Cancel => self.close_editor(EditorOutcome::Cancelled),
        }
    }

    fn open_editor(&mut self, intent: NavigationIntent) {
        self.app_state.meal_list.prepare(&intent);
        log::debug!(
            "opening editor, selected row {:?}",
            self.app_state.meal_list.selected_row()
        );
        self.ui_state.screen = Screen::MealEditor(MealEditorState::from_intent(&intent));
        self.ui_state.notice = None;
    }

    fn close_editor(&mut self, outcome: EditorOutcome) {
        self.ui_state.screen = Screen::MealList;
        self.ui_state.notice = None;
        if let Err(err) = self.app_state.meal_list.finish(outcome) {
            self.report_list_error(&err);
        }
    }

    fn report_list_error(&mut self, err: &ListError) {
        log::error!("{err}");
        self.ui_state.notice = Some(match err {
            ListError::Save(_) => Notice::save_failed(err.to_string()),
            ListError::RowOutOfRange { .. } => Notice::error(err.to_string()),
        });
    }
}

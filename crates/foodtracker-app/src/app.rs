//! FoodTracker desktop application.
//!
//! # Design Notes
//! - Two screens: the meal list and the meal editor. Only one is shown at a time.
//! - UI code only queues actions; state changes happen in `action::handler`.
//! - Every list mutation is written to the snapshot file immediately.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, TopBottomPanel},
};
use foodtracker_store::FileMealStore;

use crate::{
    action::{self, ActionRequestQueue},
    config::AppConfig,
    state::{AppState, ListSource, Notice, UiState},
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct FoodTrackerApp {
    app_state: AppState,
    ui_state: UiState,
}

impl FoodTrackerApp {
    #[must_use]
    pub fn new(cc: &CreationContext<'_>, config: &AppConfig) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let store =
            FileMealStore::new(&config.data_file).with_rating_policy(config.rating_policy);
        let (app_state, source) = AppState::load(Box::new(store));

        let mut ui_state = UiState::default();
        if let ListSource::UnreadableSnapshot { backup } = source {
            let message = match backup {
                Some(backup) => format!(
                    "Could not read {}; it was kept as {}. Showing sample meals",
                    config.data_file.display(),
                    backup.display()
                ),
                None => format!(
                    "Could not read {}; showing sample meals",
                    config.data_file.display()
                ),
            };
            ui_state.notice = Some(Notice::error(message));
        }

        Self {
            app_state,
            ui_state,
        }
    }
}

impl App for FoodTrackerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        let editor_open = self.ui_state.screen.is_meal_editor();
        let dropped_files = ctx.input(|i| {
            ui::input::handle_input(i, editor_open, &mut action_queue);
            i.raw.dropped_files.clone()
        });
        ui::input::handle_dropped_files(&dropped_files, editor_open, &mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let screen_vm = view_model_builder::build_screen_vm(&self.app_state, &self.ui_state);
        let status_line_vm = view_model_builder::build_status_line_vm(&self.ui_state);

        if let Some(status_line_vm) = &status_line_vm {
            TopBottomPanel::bottom("status_line").show(ctx, |ui| {
                ui::status_line::show(ui, status_line_vm, &mut action_queue);
            });
        }

        CentralPanel::default().show(ctx, |ui| {
            ui::screen::show(ui, &screen_vm, &mut action_queue);
        });

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);
    }
}

use eframe::egui::Ui;

use crate::{
    action::ActionRequestQueue,
    ui::{
        meal_editor::{self, MealEditorViewModel},
        meal_list::{self, MealListViewModel},
    },
};

#[derive(Debug, Clone)]
pub(crate) enum ScreenViewModel {
    MealList(MealListViewModel),
    MealEditor(MealEditorViewModel),
}

pub(crate) fn show(ui: &mut Ui, vm: &ScreenViewModel, action_queue: &mut ActionRequestQueue) {
    match vm {
        ScreenViewModel::MealList(vm) => meal_list::show(ui, vm, action_queue),
        ScreenViewModel::MealEditor(vm) => meal_editor::show(ui, vm, action_queue),
    }
}

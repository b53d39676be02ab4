use eframe::egui::{Align, Layout, RichText, Ui, vec2};
use egui_extras::{Column, TableBuilder};

use crate::{
    action::{ActionRequestQueue, ListAction},
    ui::{self, PhotoViewModel, icon, rating},
};

const ROW_HEIGHT: f32 = 72.0;
const THUMBNAIL_SIZE: f32 = 64.0;

#[derive(Debug, Clone)]
pub(crate) struct MealListViewModel {
    pub(crate) rows: Vec<MealRowViewModel>,
}

#[derive(Debug, Clone)]
pub(crate) struct MealRowViewModel {
    pub(crate) name: String,
    pub(crate) rating: u8,
    pub(crate) star_count: u8,
    pub(crate) photo: Option<PhotoViewModel>,
}

pub(crate) fn show(ui: &mut Ui, vm: &MealListViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        ui.heading("Your Meals");
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button(format!("{} Add", icon::PLUS)).clicked() {
                action_queue.request(ListAction::AddMeal);
            }
        });
    });
    ui.separator();

    if vm.rows.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak("No meals yet. Add one to get started.");
        });
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(THUMBNAIL_SIZE + 8.0))
        .column(Column::remainder().at_least(120.0))
        .column(Column::auto())
        .column(Column::auto())
        .body(|body| {
            body.rows(ROW_HEIGHT, vm.rows.len(), |mut row| {
                let index = row.index();
                let meal = &vm.rows[index];
                row.col(|ui| match &meal.photo {
                    Some(photo) => ui::show_photo(ui, photo, vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE)),
                    None => {
                        ui.label(RichText::new(icon::CAMERA).size(THUMBNAIL_SIZE / 2.0).weak());
                    }
                });
                row.col(|ui| {
                    if ui.link(RichText::new(&meal.name).size(18.0)).clicked() {
                        action_queue.request(ListAction::ShowMeal(index));
                    }
                });
                row.col(|ui| rating::show_static(ui, meal.rating, meal.star_count));
                row.col(|ui| {
                    if ui
                        .button(icon::TRASH)
                        .on_hover_text(format!("Delete “{}”", meal.name))
                        .clicked()
                    {
                        action_queue.request(ListAction::DeleteMeal(index));
                    }
                });
            });
        });
}

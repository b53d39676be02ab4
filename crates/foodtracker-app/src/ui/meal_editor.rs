use eframe::egui::{Button, Frame, TextEdit, Ui, vec2};

use crate::{
    action::{ActionRequestQueue, EditorAction},
    rating_control::RatingRender,
    ui::{self, PhotoViewModel, icon, rating},
};

const PHOTO_SIZE: f32 = 240.0;

#[derive(Debug, Clone)]
pub(crate) struct MealEditorViewModel {
    pub(crate) title: String,
    pub(crate) name: String,
    pub(crate) photo: Option<PhotoViewModel>,
    pub(crate) rating: RatingRender,
    pub(crate) can_confirm: bool,
    pub(crate) is_new: bool,
}

pub(crate) fn show(ui: &mut Ui, vm: &MealEditorViewModel, action_queue: &mut ActionRequestQueue) {
    ui.heading(&vm.title);
    ui.separator();

    let mut name = vm.name.clone();
    let response = ui.add(
        TextEdit::singleline(&mut name)
            .hint_text("Enter meal name")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        action_queue.request(EditorAction::SetName(name));
    }
    ui.add_space(8.0);

    Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_size(vec2(PHOTO_SIZE, PHOTO_SIZE));
        ui.vertical_centered(|ui| match &vm.photo {
            Some(photo) => {
                ui::show_photo(ui, photo, vec2(PHOTO_SIZE, PHOTO_SIZE));
                if ui.button("Remove photo").clicked() {
                    action_queue.request(EditorAction::ClearPhoto);
                }
            }
            None => {
                ui.add_space(PHOTO_SIZE / 3.0);
                ui.label(icon::CAMERA);
                ui.weak("Drop an image file here to add a photo");
            }
        });
    });
    ui.add_space(8.0);

    rating::show(ui, &vm.rating, action_queue);
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button(format!("{} Cancel", icon::CROSS)).clicked() {
            action_queue.request(EditorAction::Cancel);
        }
        let label = if vm.is_new { "Add" } else { "Save" };
        let save = Button::new(format!("{} {label}", icon::CHECK));
        if ui.add_enabled(vm.can_confirm, save).clicked() {
            action_queue.request(EditorAction::Confirm);
        }
    });
}

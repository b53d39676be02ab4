use std::sync::Arc;

use eframe::egui::{self, Image, Ui, Vec2};

pub(crate) mod icon;
pub(crate) mod input;
pub(crate) mod meal_editor;
pub(crate) mod meal_list;
pub(crate) mod rating;
pub(crate) mod screen;
pub(crate) mod status_line;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PhotoViewModel {
    pub(crate) uri: String,
    pub(crate) bytes: Arc<[u8]>,
}

pub(crate) fn show_photo(ui: &mut Ui, photo: &PhotoViewModel, size: Vec2) {
    let bytes = egui::load::Bytes::Shared(Arc::clone(&photo.bytes));
    ui.add(Image::from_bytes(photo.uri.clone(), bytes).fit_to_exact_size(size));
}

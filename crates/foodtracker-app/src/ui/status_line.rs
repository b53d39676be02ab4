use eframe::egui::{RichText, Ui};

use crate::{
    action::{ActionRequestQueue, ListAction, UiAction},
    state::NoticeKind,
    ui::icon,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    pub(crate) kind: NoticeKind,
    pub(crate) message: String,
    pub(crate) retry_save: bool,
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        let text = RichText::new(&vm.message);
        let text = match vm.kind {
            NoticeKind::Info => text,
            NoticeKind::Error => text.color(ui.visuals().error_fg_color),
        };
        ui.label(text);

        ui.with_layout(
            eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
            |ui| {
                if ui.button(format!("{} Dismiss", icon::CROSS)).clicked() {
                    action_queue.request(UiAction::DismissNotice);
                }
                if vm.retry_save && ui.button(format!("{} Retry", icon::REFRESH)).clicked() {
                    action_queue.request(ListAction::RetrySave);
                }
            },
        );
    });
}

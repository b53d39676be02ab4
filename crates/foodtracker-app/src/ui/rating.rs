use eframe::egui::{Button, RichText, Ui, WidgetInfo, WidgetType};

use crate::{
    action::{ActionRequestQueue, EditorAction},
    rating_control::{RatingRender, StarRender, rating_description},
    ui::icon,
};

const STAR_SIZE: f32 = 28.0;

fn star_glyph(filled: bool) -> &'static str {
    if filled {
        icon::STAR_FILLED
    } else {
        icon::STAR_EMPTY
    }
}

fn hover_text(star: &StarRender) -> String {
    let accessibility = &star.accessibility;
    match accessibility.hint {
        Some(hint) => format!("{}\n{hint}", accessibility.label),
        None => accessibility.label.clone(),
    }
}

// Screen readers get the label and hint as the name, the rating as the value.
fn widget_info(star: &StarRender) -> WidgetInfo {
    let accessibility = &star.accessibility;
    let mut info = WidgetInfo::labeled(WidgetType::Button, true, hover_text(star));
    info.selected = Some(star.filled);
    info.current_text_value = Some(accessibility.value.clone());
    info
}

/// Interactive stars for the editor.
pub(crate) fn show(ui: &mut Ui, render: &RatingRender, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        for star in &render.stars {
            let text = RichText::new(star_glyph(star.filled)).size(STAR_SIZE);
            let response = ui
                .add(Button::new(text).frame(false))
                .on_hover_text(hover_text(star));
            response.widget_info(|| widget_info(star));
            if response.clicked() {
                action_queue.request(EditorAction::TapStar(star.index + 1));
            }
        }
    });
    ui.weak(rating_description(render.rating));
}

/// Read-only stars for list rows.
pub(crate) fn show_static(ui: &mut Ui, rating: u8, star_count: u8) {
    let stars: String = (0..star_count).map(|index| star_glyph(index < rating)).collect();
    ui.label(stars).on_hover_text(rating_description(rating));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating_control::RatingControl;

    #[test]
    fn widget_info_carries_accessibility_text() {
        let mut control = RatingControl::default();
        let render = control.tap(2).unwrap();

        let info = widget_info(&render.stars[1]);
        assert_eq!(
            info.label.as_deref(),
            Some("Set 2 star rating\nTap to reset the rating to zero.")
        );
        assert_eq!(info.current_text_value.as_deref(), Some("2 stars set"));
        assert_eq!(info.selected, Some(true));

        let info = widget_info(&render.stars[4]);
        assert_eq!(info.label.as_deref(), Some("Set 5 star rating"));
        assert_eq!(info.selected, Some(false));
    }
}

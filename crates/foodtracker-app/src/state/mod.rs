pub(crate) use self::{app_state::*, meal_editor::*, meal_list::*, ui_state::*};

mod app_state;
mod meal_editor;
mod meal_list;
mod ui_state;

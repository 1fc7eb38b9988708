use druid::{widget::SizedBox, Data, Widget, WidgetExt};

use super::theme;

pub fn placeholder_widget<T: Data>() -> impl Widget<T> {
    SizedBox::empty().background(theme::BACKGROUND_DARK)
}

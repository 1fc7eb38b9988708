use druid::{
    widget::{Button, CrossAxisAlignment, Either, Flex, Label},
    Widget, WidgetExt, WindowDesc,
};
use folio_core::Catalog;

use crate::{
    cmd,
    data::{AppState, Config},
    widget::ThemeScope,
};

pub mod detail;
pub mod list;
pub mod preferences;
pub mod search;
pub mod theme;
pub mod utils;

pub fn main_window(catalog: &Catalog, config: &Config) -> WindowDesc<AppState> {
    WindowDesc::new(root_widget(catalog))
        .title("Folio")
        .with_min_size((theme::grid(50.0), theme::grid(40.0)))
        .window_size(config.window_size)
}

fn root_widget(catalog: &Catalog) -> impl Widget<AppState> {
    let content = Either::new(
        |data: &AppState, _| data.detail.open,
        detail::detail_widget(),
        list::list_widget(),
    );
    let main = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .must_fill_main_axis(true)
        .with_child(header_widget())
        .with_child(search::form_widget(catalog))
        .with_child(preferences::form_widget())
        .with_flex_child(content, 1.0)
        .background(theme::BACKGROUND_LIGHT);
    ThemeScope::new(main, |data: &AppState| data.palette)
}

fn header_widget() -> impl Widget<AppState> {
    let title = Label::new("Folio")
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_size(theme::TEXT_SIZE_LARGE);
    let search = Button::new("Search").on_click(|ctx, _, _| ctx.submit_command(cmd::OPEN_SEARCH));
    let preferences =
        Button::new("Theme").on_click(|ctx, _, _| ctx.submit_command(cmd::OPEN_PREFERENCES));
    Flex::row()
        .with_child(title)
        .with_flex_spacer(1.0)
        .with_child(search)
        .with_default_spacer()
        .with_child(preferences)
        .padding(theme::grid(2.0))
        .background(theme::BACKGROUND_DARK)
}

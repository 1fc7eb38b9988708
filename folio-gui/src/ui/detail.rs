use druid::{
    widget::{Button, CrossAxisAlignment, Flex, Label, LineBreaking, MainAxisAlignment},
    Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{AppState, DetailPanel},
    widget::CoverImage,
};

use super::{theme, utils};

pub fn detail_widget() -> impl Widget<AppState> {
    let cover = CoverImage::new(utils::placeholder_widget(), |detail: &DetailPanel, _| {
        Some(detail.image.clone())
    })
    .fix_size(theme::grid(20.0), theme::grid(30.0));

    let title = Label::raw()
        .with_font(theme::UI_FONT_MEDIUM)
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(DetailPanel::title);

    let subtitle = Label::raw()
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .lens(DetailPanel::subtitle);

    let genres = Label::raw()
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .lens(DetailPanel::genres);

    let description = Label::raw()
        .with_line_break_mode(LineBreaking::WordWrap)
        .lens(DetailPanel::description);

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(title)
        .with_spacer(theme::grid(1.0))
        .with_child(subtitle)
        .with_spacer(theme::grid(0.5))
        .with_child(genres)
        .with_spacer(theme::grid(2.0))
        .with_child(description);

    let body = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(cover)
        .with_spacer(theme::grid(3.0))
        .with_flex_child(info, 1.0);

    let close = Button::new("Close").on_click(|ctx, _, _| ctx.submit_command(cmd::CLOSE_DETAIL));

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(body)
        .with_spacer(theme::grid(3.0))
        .with_child(
            Flex::row()
                .main_axis_alignment(MainAxisAlignment::End)
                .must_fill_main_axis(true)
                .with_child(close),
        )
        .padding(theme::grid(4.0))
        .scroll()
        .vertical()
        .lens(AppState::detail)
}

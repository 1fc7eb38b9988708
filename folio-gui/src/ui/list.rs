use std::sync::Arc;

use druid::{
    widget::{
        Button, CrossAxisAlignment, Either, Flex, Label, LineBreaking, List, Scroll, SizedBox,
    },
    Widget, WidgetExt,
};
use folio_core::Preview;

use crate::{
    cmd,
    data::AppState,
    widget::{CoverImage, MyWidgetExt},
};

use super::{theme, utils};

const COVER_WIDTH: f64 = 48.0;
const COVER_HEIGHT: f64 = 72.0;

pub fn list_widget() -> impl Widget<AppState> {
    let previews = List::new(preview_widget).lens(AppState::previews);
    let content = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(no_results_widget())
        .with_child(previews)
        .with_spacer(theme::grid(2.0))
        .with_child(show_more_widget().center())
        .padding(theme::grid(2.0));
    Scroll::new(content).vertical().expand()
}

fn no_results_widget() -> impl Widget<AppState> {
    let message = Label::new("No results found. Your filters might be too narrow.")
        .with_text_size(theme::TEXT_SIZE_LARGE)
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .padding(theme::grid(6.0))
        .center();
    Either::new(|data: &AppState, _| data.no_results, message, SizedBox::empty())
}

fn preview_widget() -> impl Widget<Arc<Preview>> {
    let cover = CoverImage::new(utils::placeholder_widget(), |preview: &Arc<Preview>, _| {
        Some(preview.image.clone())
    })
    .fix_size(COVER_WIDTH, COVER_HEIGHT);

    let title = Label::dynamic(|preview: &Arc<Preview>, _| preview.title.to_string())
        .with_font(theme::UI_FONT_MEDIUM)
        .with_line_break_mode(LineBreaking::WordWrap);

    let author = Label::dynamic(|preview: &Arc<Preview>, _| preview.author.to_string())
        .with_text_size(theme::TEXT_SIZE_SMALL)
        .with_text_color(theme::PLACEHOLDER_COLOR);

    let info = Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(title)
        .with_spacer(theme::grid(0.5))
        .with_child(author);

    Flex::row()
        .with_child(cover)
        .with_default_spacer()
        .with_flex_child(info, 1.0)
        .padding(theme::grid(1.0))
        .link()
        .rounded(theme::BUTTON_BORDER_RADIUS)
        .on_click(|ctx, preview, _| ctx.submit_command(cmd::SHOW_DETAIL.with(preview.id.clone())))
}

/// Shows the count still hidden; inert once everything is revealed.
fn show_more_widget() -> impl Widget<AppState> {
    let button = Button::dynamic(|data: &AppState, _| format!("Show more ({})", data.remaining))
        .on_click(|ctx, _, _| ctx.submit_command(cmd::SHOW_MORE));
    let exhausted = Label::new("Show more (0)")
        .with_text_color(theme::PLACEHOLDER_COLOR)
        .padding(theme::grid(1.0));
    Either::new(|data: &AppState, _| data.remaining == 0, exhausted, button)
}

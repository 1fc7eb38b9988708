use std::sync::Arc;

use druid::{
    widget::{
        Button, CrossAxisAlignment, Either, Flex, Label, MainAxisAlignment, RadioGroup, SizedBox,
        TextBox,
    },
    Widget, WidgetExt,
};
use folio_core::{Catalog, Choice, Lookup};

use crate::{
    cmd,
    controller::InputController,
    data::{AppState, SearchForm},
};

use super::theme;

pub fn form_widget(catalog: &Catalog) -> impl Widget<AppState> {
    Either::new(
        |data: &AppState, _| data.search.open,
        open_form_widget(catalog),
        SizedBox::empty(),
    )
}

fn open_form_widget(catalog: &Catalog) -> impl Widget<AppState> {
    let title = TextBox::new()
        .with_placeholder("Title")
        .controller(
            InputController::new()
                .on_submit(|ctx, _, _| ctx.submit_command(cmd::SUBMIT_SEARCH))
                .on_cancel(|ctx, _, _| ctx.submit_command(cmd::CANCEL_SEARCH)),
        )
        .with_id(cmd::WIDGET_SEARCH_INPUT)
        .expand_width()
        .lens(SearchForm::title);

    let choices = Flex::row()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_flex_child(
            choice_widget("Genre", "All Genres", catalog.genres()).lens(SearchForm::genre),
            1.0,
        )
        .with_default_spacer()
        .with_flex_child(
            choice_widget("Author", "All Authors", catalog.authors()).lens(SearchForm::author),
            1.0,
        );

    let buttons = Flex::row()
        .main_axis_alignment(MainAxisAlignment::End)
        .must_fill_main_axis(true)
        .with_child(Button::new("Cancel").on_click(|ctx, _, _| ctx.submit_command(cmd::CANCEL_SEARCH)))
        .with_default_spacer()
        .with_child(Button::new("Search").on_click(|ctx, _, _| ctx.submit_command(cmd::SUBMIT_SEARCH)));

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Fill)
        .with_child(title)
        .with_spacer(theme::grid(2.0))
        .with_child(choices)
        .with_spacer(theme::grid(2.0))
        .with_child(buttons)
        .padding(theme::grid(2.0))
        .background(theme::BACKGROUND_DARK)
        .lens(AppState::search)
}

/// Single choice over `lookup`, in dataset order, headed by the "any" entry.
fn choice_widget(label: &str, any_label: &str, lookup: &Lookup) -> impl Widget<Arc<str>> {
    let mut choices: Vec<(String, Arc<str>)> = vec![(any_label.to_string(), Choice::ANY.into())];
    choices.extend(lookup.iter().map(|(id, name)| (name.to_string(), id.clone())));

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(Label::new(label.to_string()).with_font(theme::UI_FONT_MEDIUM))
        .with_spacer(theme::grid(1.0))
        .with_child(
            RadioGroup::column(choices)
                .scroll()
                .vertical()
                .fix_height(theme::grid(20.0)),
        )
}

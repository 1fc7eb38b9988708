use druid::{
    widget::{
        Button, CrossAxisAlignment, Either, Flex, Label, MainAxisAlignment, RadioGroup, SizedBox,
    },
    Widget, WidgetExt,
};

use crate::{
    cmd,
    data::{AppState, PreferencesForm, Theme},
};

use super::theme;

pub fn form_widget() -> impl Widget<AppState> {
    Either::new(
        |data: &AppState, _| data.preferences.open,
        open_form_widget(),
        SizedBox::empty(),
    )
}

fn open_form_widget() -> impl Widget<AppState> {
    let buttons = Flex::row()
        .main_axis_alignment(MainAxisAlignment::End)
        .must_fill_main_axis(true)
        .with_child(
            Button::new("Cancel").on_click(|ctx, _, _| ctx.submit_command(cmd::CANCEL_PREFERENCES)),
        )
        .with_default_spacer()
        .with_child(
            Button::new("Save").on_click(|ctx, _, _| ctx.submit_command(cmd::SUBMIT_PREFERENCES)),
        );

    Flex::column()
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .with_child(Label::new("Theme").with_font(theme::UI_FONT_MEDIUM))
        .with_spacer(theme::grid(2.0))
        .with_child(
            RadioGroup::column(vec![("Day", Theme::Day), ("Night", Theme::Night)])
                .lens(PreferencesForm::theme),
        )
        .with_spacer(theme::grid(2.0))
        .with_child(buttons)
        .padding(theme::grid(2.0))
        .background(theme::BACKGROUND_DARK)
        .lens(AppState::preferences)
}

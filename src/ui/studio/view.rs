// SPDX-License-Identifier: MPL-2.0
//! Studio view composition.

use super::{Message, State, ViewContext};
use crate::domain::{EncodedImage, Tool};
use crate::i18n::fluent::I18n;
use crate::session::Status;
use crate::ui::comparator::Comparator;
use crate::ui::components::checkerboard;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{
    button, container, image, scrollable, text, text_input, Column, Container, Row, Space, Stack,
};
use iced::{alignment, ContentFit, Element, Length};

const RESULT_DOT: f32 = 8.0;

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let main: Element<'a, Message> = if state.has_image() {
        workspace(state, &ctx)
    } else {
        empty_state(state, &ctx)
    };

    Row::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(sidebar(state, &ctx))
        .push(
            Container::new(main)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .into()
}

fn sidebar<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = state.active_tool();
    let session = state.session();

    let tools = Tool::ALL.into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, tool| {
            let info = tool.info();
            let mut entry = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(
                    text(info.icon.to_string())
                        .size(sizing::ICON_SM)
                        .width(Length::Fixed(sizing::ICON_MD)),
                )
                .push(
                    text(ctx.i18n.tr(info.name_key))
                        .size(typography::BODY)
                        .width(Length::Fill),
                );
            if session.result_for(tool).is_some() {
                entry = entry.push(
                    Container::new(Space::new().width(RESULT_DOT).height(RESULT_DOT))
                        .style(styles::container::result_dot),
                );
            }

            column.push(
                button(entry)
                    .width(Length::Fill)
                    .padding(spacing::XS)
                    .on_press(Message::SelectTool(tool))
                    .style(styles::button::tool(tool == active)),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(text(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(
            text(ctx.i18n.tr("sidebar-tools-heading"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(scrollable(tools).height(Length::Fill));

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn empty_state<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let content: Element<'a, Message> = if *state.session().status() == Status::Uploading {
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(
                AnimatedSpinner::new(palette::PRIMARY_500, state.spinner_rotation)
                    .into_element(),
            )
            .push(text(ctx.i18n.tr("label-uploading")).size(typography::BODY))
            .into()
    } else {
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text(ctx.i18n.tr("empty-title")).size(typography::TITLE_LG))
            .push(
                text(ctx.i18n.tr("empty-drop-hint"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .push(
                button(text(ctx.i18n.tr("button-open")))
                    .padding([spacing::XS, spacing::LG])
                    .on_press(Message::OpenRequested)
                    .style(styles::button::primary),
            )
            .into()
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::preview)
        .into()
}

fn workspace<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let info = state.active_tool().info();

    let header = Column::new()
        .spacing(spacing::XXS)
        .push(text(ctx.i18n.tr(info.name_key)).size(typography::TITLE_MD))
        .push(
            text(ctx.i18n.tr(info.description_key))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(preview(state, ctx))
        .push(controls(state, ctx))
        .into()
}

fn preview<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = state.session();
    let tool = session.active_tool();

    let picture: Element<'a, Message> = match (state.comparison_key(), session.comparison()) {
        (Some(key), Some((before, after))) => {
            match (state.handle(before), state.handle(after)) {
                (Some(before_handle), Some(after_handle)) => Comparator::new(
                    key,
                    before_handle.clone(),
                    after_handle.clone(),
                    before.dimensions(),
                )
                .labels(
                    ctx.i18n.tr("comparator-before"),
                    ctx.i18n.tr("comparator-after"),
                )
                .into_element(),
                _ => filler(),
            }
        }
        _ => match session.current_result() {
            Some(result) if tool == Tool::RemoveBackground => {
                checkerboard::behind(picture_of(state, result))
            }
            Some(result) => picture_of(state, result),
            None => session
                .original()
                .map_or_else(filler, |original| picture_of(state, original)),
        },
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(picture);

    if session.is_processing() {
        layers = layers.push(
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .align_x(alignment::Horizontal::Center)
                    .push(
                        AnimatedSpinner::new(palette::WHITE, state.spinner_rotation)
                            .into_element(),
                    )
                    .push(text(ctx.i18n.tr("label-processing")).size(typography::BODY)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::scrim),
        );
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XS)
        .style(styles::container::preview)
        .into()
}

fn picture_of<'a>(state: &'a State, image_data: &EncodedImage) -> Element<'a, Message> {
    match state.handle(image_data) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => filler(),
    }
}

fn filler<'a>() -> Element<'a, Message> {
    Space::new().width(Length::Fill).height(Length::Fill).into()
}

fn controls<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let session = state.session();
    let tool = session.active_tool();
    let info = tool.info();
    let processing = session.is_processing();

    let mut column = Column::new().spacing(spacing::SM);

    if tool.takes_prompt() {
        column = column.push(
            text_input(&ctx.i18n.tr("prompt-placeholder"), session.edit_prompt())
                .on_input(Message::PromptChanged)
                .on_submit(Message::Process)
                .padding(spacing::XS)
                .size(typography::BODY),
        );
    }

    let cta_label = if processing {
        ctx.i18n.tr("label-processing")
    } else {
        ctx.i18n.tr(info.call_to_action_key)
    };

    let actions = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            button(text(cta_label))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::LG])
                .on_press_maybe((!processing && session.has_image()).then_some(Message::Process))
                .style(styles::button::primary),
        )
        .push(
            button(text(ctx.i18n.tr("button-download")))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .on_press_maybe(
                    session
                        .current_result()
                        .is_some()
                        .then_some(Message::DownloadRequested),
                )
                .style(styles::button::secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(ctx.i18n.tr("button-open")))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::OpenRequested)
                .style(styles::button::secondary),
        )
        .push(
            button(text(ctx.i18n.tr("button-reset")))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::MD])
                .on_press(Message::ResetRequested)
                .style(styles::button::secondary),
        );

    column = column.push(actions);

    if let Some(message) = error_line(state, ctx.i18n) {
        column = column.push(
            text(message)
                .size(typography::BODY)
                .color(palette::ERROR_500),
        );
    }

    container(column).width(Length::Fill).into()
}

/// Inline error text under the controls: a validation notice first, then the
/// last transform failure, both in the current locale.
pub(super) fn error_line(state: &State, i18n: &I18n) -> Option<String> {
    if let Some(notice) = state.notice() {
        return Some(i18n.tr(notice.i18n_key()));
    }

    let err = state.session().status().error()?;
    let args = err.i18n_args();
    let args: Vec<(&str, &str)> = args
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    Some(i18n.tr_with_args(err.i18n_key(), &args))
}

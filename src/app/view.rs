// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The studio fills the window; toasts float above it.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::studio;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub studio: &'a studio::State,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let studio_view = ctx
        .studio
        .view(studio::ViewContext { i18n: ctx.i18n })
        .map(Message::Studio);

    let base = Container::new(studio_view)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

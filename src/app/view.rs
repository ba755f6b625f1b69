// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{Manager, Toast};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notifications: &'a Manager,
    pub columns: u16,
    pub thumbnail_height: f32,
}

/// Renders the gallery with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = ctx
        .gallery
        .view(gallery::ViewEnv {
            i18n: ctx.i18n,
            columns: ctx.columns,
            thumbnail_height: ctx.thumbnail_height,
        })
        .map(Message::Gallery);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Container::new(
        Stack::new()
            .push(gallery_view)
            .push(toasts)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Modal preview of one document with previous/next/close controls.
//!
//! Clicking the dimmed backdrop closes the preview; clicks on the panel
//! itself are absorbed.

use super::card::missing_image;
use super::component::Message;
use crate::domain::document::DocumentRecord;
use crate::i18n::fluent::I18n;
use crate::navigator::PreviewAction;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::keyboard::{self, key::Named};
use iced::widget::image::Handle;
use iced::widget::{
    button, center, image, mouse_area, opaque, tooltip, Column, Container, Row, Space, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Maps a key press to a preview action.
///
/// Only Escape, ArrowLeft and ArrowRight are bound.
#[must_use]
pub fn preview_action_for_key(key: &keyboard::Key) -> Option<PreviewAction> {
    match key {
        keyboard::Key::Named(Named::Escape) => Some(PreviewAction::Close),
        keyboard::Key::Named(Named::ArrowLeft) => Some(PreviewAction::Previous),
        keyboard::Key::Named(Named::ArrowRight) => Some(PreviewAction::Next),
        _ => None,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a DocumentRecord,
    /// Index of the record in the filtered view.
    pub index: usize,
    /// Length of the filtered view.
    pub count: usize,
    pub image_available: bool,
}

/// Translation key naming the control that performs `action`.
fn action_label_key(action: PreviewAction) -> &'static str {
    match action {
        PreviewAction::Next => "preview-next",
        PreviewAction::Previous => "preview-previous",
        PreviewAction::Close => "preview-close",
    }
}

fn nav_button<'a>(i18n: &I18n, glyph: &'a str, action: PreviewAction) -> Element<'a, Message> {
    let control = button(Text::new(glyph).size(typography::TITLE_MD).center())
        .width(Length::Fixed(sizing::NAV_BUTTON))
        .height(Length::Fixed(sizing::NAV_BUTTON))
        .style(styles::button::overlay)
        .on_press(Message::Preview(action));

    styles::tooltip::styled(
        control,
        i18n.tr(action_label_key(action)),
        tooltip::Position::Bottom,
    )
    .into()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(ctx.record.title())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(nav_button(ctx.i18n, "✕", PreviewAction::Close));

    let picture: Element<'a, Message> = if ctx.image_available {
        image(Handle::from_path(ctx.record.image()))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::LIGHTBOX_IMAGE_HEIGHT))
            .into()
    } else {
        missing_image(ctx.i18n, sizing::LIGHTBOX_IMAGE_HEIGHT)
    };

    let stage = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(nav_button(ctx.i18n, "◀", PreviewAction::Previous))
        .push(picture)
        .push(nav_button(ctx.i18n, "▶", PreviewAction::Next));

    let counter = Container::new(
        Text::new(ctx.i18n.tr_with_args(
            "preview-position",
            &[
                ("current", &(ctx.index + 1).to_string()),
                ("total", &ctx.count.to_string()),
            ],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::counter);

    let footer = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(counter)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("document-view")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::ViewDocument(ctx.index)),
        )
        .push(
            button(Text::new(ctx.i18n.tr("document-download")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary)
                .on_press(Message::DownloadDocument(ctx.index)),
        );

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(stage)
            .push(footer),
    )
    .padding(spacing::LG)
    .max_width(sizing::LIGHTBOX_MAX_WIDTH)
    .style(styles::container::lightbox);

    opaque(
        mouse_area(
            center(opaque(panel))
                .padding(spacing::XL)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Preview(PreviewAction::Close)),
    )
}

// SPDX-License-Identifier: MPL-2.0
//! A single document card: thumbnail, title, category badge, actions.

use super::component::Message;
use super::toolbar::category_label;
use crate::domain::document::DocumentRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Index of this card in the filtered view.
    pub index: usize,
    pub record: &'a DocumentRecord,
    pub thumbnail_height: f32,
    pub image_available: bool,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = if ctx.image_available {
        image(Handle::from_path(ctx.record.image()))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fixed(ctx.thumbnail_height))
            .into()
    } else {
        missing_image(ctx.i18n, ctx.thumbnail_height)
    };

    let thumbnail = button(thumbnail)
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::thumbnail)
        .on_press(Message::ThumbnailPressed(ctx.index));

    let title = Text::new(ctx.record.title()).size(typography::TITLE_SM);

    let category = ctx.record.category();
    let badge = Container::new(
        Text::new(category_label(ctx.i18n, category.into())).size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::container::badge(category));

    let actions = Row::new()
        .spacing(spacing::XS)
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

    let content = Column::new()
        .spacing(spacing::SM)
        .push(thumbnail)
        .push(title)
        .push(badge)
        .push(actions);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

/// Placeholder drawn instead of a thumbnail whose file is missing.
pub(super) fn missing_image<'a>(i18n: &I18n, height: f32) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("document-image-missing")).size(typography::BODY_SM))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::missing_image)
        .into()
}

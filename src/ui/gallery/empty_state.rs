// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when no document matches the filters.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Renders the empty state.
///
/// With active filters it offers to clear them; an empty catalog only gets
/// the message.
pub fn view(i18n: &I18n, filters_active: bool) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title);

    if filters_active {
        content = content
            .push(
                Text::new(i18n.tr("empty-state-subtitle"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .push(
                button(Text::new(i18n.tr("gallery-clear-filters")))
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::ClearFilters),
            );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Search box, category picker, and result counter above the grid.

use super::component::Message;
use crate::domain::document::{CategoryFilter, FilterState};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text_input, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::fmt;

/// Context for rendering the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub filter: &'a FilterState,
    /// Number of documents in the filtered view.
    pub shown: usize,
    /// Number of documents in the catalog.
    pub total: usize,
}

/// Pick list entry pairing a filter with its translated label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    label: String,
}

impl fmt::Display for CategoryOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Translated label of a category selector entry.
pub fn category_label(i18n: &I18n, filter: CategoryFilter) -> String {
    i18n.tr(&format!("category-{}", filter.as_str()))
}

fn category_options(i18n: &I18n) -> Vec<CategoryOption> {
    CategoryFilter::ALL
        .iter()
        .map(|&filter| CategoryOption {
            filter,
            label: category_label(i18n, filter),
        })
        .collect()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let search = text_input(&ctx.i18n.tr("gallery-search-placeholder"), &ctx.filter.query)
        .on_input(Message::QueryChanged)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let options = category_options(ctx.i18n);
    let selected = options
        .iter()
        .find(|option| option.filter == ctx.filter.category)
        .cloned();
    let picker = pick_list(options, selected, |option: CategoryOption| {
        Message::CategorySelected(option.filter)
    })
    .padding(spacing::XS)
    .text_size(typography::BODY)
    .width(Length::Fixed(sizing::CATEGORY_PICKER_WIDTH));

    let clear = button(Text::new(ctx.i18n.tr("gallery-clear-filters")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press_maybe(ctx.filter.is_active().then_some(Message::ClearFilters));

    let counter = Text::new(ctx.i18n.tr_with_args(
        "gallery-count",
        &[
            ("shown", &ctx.shown.to_string()),
            ("total", &ctx.total.to_string()),
        ],
    ))
    .size(typography::BODY_SM);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG))
        .push(Space::new().width(Length::Fill))
        .push(search)
        .push(picker)
        .push(clear)
        .push(counter)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn options_follow_selector_order() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let options = category_options(&i18n);

        let filters: Vec<_> = options.iter().map(|o| o.filter).collect();
        assert_eq!(filters, CategoryFilter::ALL.to_vec());
        assert_eq!(options[0].to_string(), "All");
        assert_eq!(options[2].to_string(), "Offer Letters");
    }
}

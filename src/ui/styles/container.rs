// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::document::DocumentCategory;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Document card surface.
///
/// Derived from the active theme background with a slight opacity so cards
/// read well in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Pill-shaped category label.
pub fn badge(category: DocumentCategory) -> impl Fn(&Theme) -> container::Style {
    let color = badge_color(category);
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Accent color of a category badge.
#[must_use]
pub fn badge_color(category: DocumentCategory) -> Color {
    match category {
        DocumentCategory::Certification => palette::CERTIFICATION,
        DocumentCategory::Offer => palette::OFFER,
    }
}

/// Dimmed layer behind the lightbox.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Lightbox frame holding the enlarged document.
pub fn lightbox(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Translucent chip used for the "2 / 3" position counter.
pub fn counter(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Frame shown in place of a thumbnail whose image cannot be found.
pub fn missing_image(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

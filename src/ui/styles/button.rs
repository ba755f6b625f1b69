// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (View).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(),
    }
}

/// Secondary action (Download, Clear filters).
/// Adapts to light/dark theme while keeping the brand hover border.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        button::Status::Disabled => disabled(),
    }
}

fn disabled() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent buttons drawn over the lightbox (previous, next, close).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        button::Status::Pressed => opacity::OVERLAY_PRESSED,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Thumbnail tile: no chrome, a brand border on hover.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

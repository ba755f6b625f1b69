// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for the lightbox controls.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{GRAY_100, GRAY_400, GRAY_900},
    radius, shadow, spacing, typography,
};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Tooltip surface contrasting with the current theme.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let (background, text) = if theme.extended_palette().is_dark {
        (GRAY_100, GRAY_900)
    } else {
        (GRAY_900, GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..background
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        text_color: Some(text),
        ..Default::default()
    }
}

/// Wraps `content` with a styled text tooltip.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tooltip_contrasts_with_theme() {
        let light = tooltip_container(&Theme::Light);
        let dark = tooltip_container(&Theme::Dark);

        assert_eq!(light.text_color, Some(GRAY_100));
        assert_eq!(dark.text_color, Some(GRAY_900));
        assert!(light.background.is_some());
        assert!(light.shadow.blur_radius > 0.0);
    }
}

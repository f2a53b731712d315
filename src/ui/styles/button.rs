// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::domain::background::Rgb;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use crate::ui::theming::to_color;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (Start/Pause).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, edge, elevation) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Active mode in the mode switch.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_STRONG,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: WHITE,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Inactive mode and secondary actions.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let background = match status {
        button::Status::Hovered if is_light => palette::GRAY_200,
        button::Status::Hovered => Color::from_rgb(0.35, 0.35, 0.35),
        _ => bg_color,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..background
        })),
        text_color: if matches!(status, button::Status::Disabled) {
            palette::GRAY_400
        } else {
            text_color
        },
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round button over the background (bell, thumbnail remove).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Color swatch; the current color gets a white ring.
pub fn swatch(color: Rgb, is_current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let ring = if is_current || matches!(status, button::Status::Hovered) {
            border::WIDTH_MD
        } else {
            border::WIDTH_SM
        };
        button::Style {
            background: Some(Background::Color(to_color(color))),
            text_color: WHITE,
            border: Border {
                color: WHITE,
                width: ring,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

/// Thumbnail frame; the displayed image gets a brand outline.
pub fn thumbnail(is_current: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (color, width) = if is_current {
            (palette::PRIMARY_500, border::WIDTH_MD)
        } else if matches!(status, button::Status::Hovered) {
            (WHITE, border::WIDTH_SM)
        } else {
            (Color::TRANSPARENT, border::WIDTH_SM)
        };
        button::Style {
            background: None,
            text_color: WHITE,
            border: Border {
                color,
                width,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn overlay_button_alpha_changes_on_hover() {
        let theme = Theme::Dark;
        let style_fn = overlay(WHITE, 0.5, 0.8);

        let normal = style_fn(&theme, button::Status::Active);
        let hover = style_fn(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn current_swatch_has_thicker_ring() {
        let theme = Theme::Light;
        let color = Rgb::new(0x60, 0xa5, 0xfa);
        let current = swatch(color, true)(&theme, button::Status::Active);
        let other = swatch(color, false)(&theme, button::Status::Active);
        assert!(current.border.width > other.border.width);
        assert_eq!(current.background, Some(Background::Color(to_color(color))));
    }

    #[test]
    fn current_thumbnail_is_outlined() {
        let theme = Theme::Dark;
        let current = thumbnail(true)(&theme, button::Status::Active);
        let other = thumbnail(false)(&theme, button::Status::Active);
        assert_eq!(current.border.color, palette::PRIMARY_500);
        assert_eq!(other.border.color, Color::TRANSPARENT);
    }
}

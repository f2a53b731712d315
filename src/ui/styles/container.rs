// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::background::Rgb;
use crate::ui::design_tokens::{opacity, radius};
use crate::ui::theming::to_color;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface drawn over the background (clock card, background panel).
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the backdrop shows through in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-window solid color backdrop at `alpha`.
pub fn solid_background(color: Rgb, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..to_color(color)
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_translucent() {
        let style = panel(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            other => panic!("expected color background, got {other:?}"),
        }
    }

    #[test]
    fn solid_background_applies_alpha() {
        let style = solid_background(Rgb::new(0xf8, 0x71, 0x71), opacity::FADED)(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!((color.a - opacity::FADED).abs() < f32::EPSILON),
            other => panic!("expected color background, got {other:?}"),
        }
    }
}

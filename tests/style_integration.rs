// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use iced_pomodoro::domain::background::SWATCHES;
    use iced_pomodoro::domain::timer::Mode;
    use iced_pomodoro::ui::design_tokens::{opacity, palette, sizing};
    use iced_pomodoro::ui::styles::{button, container};
    use iced_pomodoro::ui::theming::{text_on, ThemeMode};

    #[test]
    fn all_button_styles_are_callable() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, Status::Active);
        let _ = button::selected(&theme, Status::Hovered);
        let _ = button::unselected(&theme, Status::Pressed);
        let _ = button::overlay(palette::WHITE, 0.5, 0.8)(&theme, Status::Active);
        let _ = button::thumbnail(true)(&theme, Status::Active);
        for swatch in SWATCHES {
            let _ = button::swatch(swatch.color, false)(&theme, Status::Active);
        }
    }

    #[test]
    fn fade_dims_but_keeps_the_backdrop_visible() {
        assert!(opacity::FADED > opacity::TRANSPARENT);
        assert!(opacity::FADED < opacity::OPAQUE);

        let style = container::solid_background(Mode::Pomodoro.accent(), opacity::FADED)(
            &Theme::Light,
        );
        assert!(style.background.is_some());
    }

    #[test]
    fn thumbnails_fit_inside_the_panel() {
        assert!(sizing::THUMBNAIL * 4.0 < sizing::CARD_WIDTH);
        assert!(sizing::SWATCH * SWATCHES.len() as f32 <= sizing::CARD_WIDTH);
    }

    #[test]
    fn every_mode_accent_has_readable_text() {
        for mode in [Mode::Pomodoro, Mode::ShortBreak, Mode::LongBreak] {
            let text = text_on(mode.accent());
            assert!(text == palette::WHITE || text == palette::GRAY_900);
        }
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
    }
}

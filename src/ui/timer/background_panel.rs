// SPDX-License-Identifier: MPL-2.0
//! Background panel: image list, rotation settings and color swatches.

use crate::app::i18n::fluent::I18n;
use crate::domain::background::{Rgb, SWATCHES};
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::timer::subcomponents::carousel;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, container, image, scrollable, text_input, toggler, tooltip, Column, Row, Space,
        Stack, Text,
    },
    ContentFit, Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open the file picker.
    AddImages,
    ClearImages,
    RemoveImage(usize),
    SelectImage(usize),
    SetRotation(bool),
    IntervalInput(String),
    SetColor(Rgb),
}

pub fn view<'a>(ctx: ViewContext<'a>, carousel: &'a carousel::State) -> Element<'a, Message> {
    let heading = Text::new(ctx.i18n.tr("background-heading")).size(typography::BODY_LG);

    let add = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(
                icons::image_plus(),
                sizing::ICON_SM,
                palette::GRAY_400,
            ))
            .push(Text::new(ctx.i18n.tr("button-add-image")).size(typography::BODY)),
    )
    .on_press(Message::AddImages)
    .padding([spacing::XXS, spacing::SM])
    .style(styles::button::unselected);

    let mut actions = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(add);

    if !carousel.images().is_empty() {
        actions = actions.push(
            button(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(icons::tinted(icons::trash(), sizing::ICON_SM, palette::GRAY_400))
                    .push(Text::new(ctx.i18n.tr("button-clear-images")).size(typography::BODY)),
            )
            .on_press(Message::ClearImages)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected),
        );
    }

    let mut content = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Row::new()
                .align_y(Vertical::Center)
                .push(heading)
                .push(Space::new().width(Length::Fill))
                .push(actions),
        );

    if carousel.can_rotate() {
        content = content.push(rotation_row(&ctx, carousel));
    }

    if !carousel.images().is_empty() {
        content = content.push(thumbnails(carousel));
    }

    if carousel.show_color_options() {
        content = content.push(swatches(&ctx, carousel));
    }

    container(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn rotation_row<'a>(ctx: &ViewContext<'a>, carousel: &'a carousel::State) -> Element<'a, Message> {
    let toggle = toggler(carousel.rotation_enabled())
        .label(ctx.i18n.tr("rotation-toggle"))
        .on_toggle(Message::SetRotation)
        .size(20.0);

    let seconds = carousel.interval().secs().to_string();
    let label = Text::new(
        ctx.i18n
            .tr_with_args("rotation-interval-label", &[("seconds", seconds.as_str())]),
    )
    .size(typography::CAPTION);

    let input = text_input(
        &ctx.i18n.tr("rotation-interval-placeholder"),
        carousel.interval_input(),
    )
    .on_input(Message::IntervalInput)
    .padding(spacing::XXS)
    .size(typography::BODY)
    .width(Length::Fixed(sizing::INTERVAL_INPUT_WIDTH));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle)
        .push(Space::new().width(Length::Fill))
        .push(input)
        .push(label)
        .into()
}

fn thumbnails(carousel: &carousel::State) -> Element<'_, Message> {
    let current = carousel.current_index();
    let row = carousel
        .images()
        .iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, background)| {
            let picture = button(
                image(background.handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(sizing::THUMBNAIL))
                    .height(Length::Fixed(sizing::THUMBNAIL)),
            )
            .on_press(Message::SelectImage(index))
            .padding(0)
            .style(styles::button::thumbnail(index == current));

            let remove = button(icons::tinted(icons::cross(), sizing::ICON_SM / 2.0, palette::WHITE))
                .on_press(Message::RemoveImage(index))
                .padding(spacing::XXS / 2.0)
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_STRONG,
                    opacity::OVERLAY_PRESSED,
                ));

            let corner = container(remove)
                .width(Length::Fixed(sizing::THUMBNAIL))
                .align_x(Horizontal::Right)
                .padding(spacing::XXS / 2.0);

            let picture = tooltip(
                picture,
                Text::new(background.name.as_str()).size(typography::CAPTION),
                tooltip::Position::Bottom,
            );

            row.push(Stack::new().push(picture).push(corner))
        });

    scrollable(row)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .width(Length::Fill)
        .into()
}

fn swatches<'a>(ctx: &ViewContext<'a>, carousel: &'a carousel::State) -> Element<'a, Message> {
    // Ring the current color only while it is actually shown.
    let shown = carousel.images().is_empty().then_some(carousel.color());

    let row = SWATCHES.iter().fold(
        Row::new().spacing(spacing::SM).align_y(Vertical::Center),
        |row, swatch| {
            let chip = button(
                Space::new()
                    .width(Length::Fixed(sizing::SWATCH))
                    .height(Length::Fixed(sizing::SWATCH)),
            )
            .on_press(Message::SetColor(swatch.color))
            .padding(0)
            .style(styles::button::swatch(
                swatch.color,
                shown == Some(swatch.color),
            ));
            row.push(tooltip(
                chip,
                Text::new(ctx.i18n.tr(swatch.name_key)).size(typography::CAPTION),
                tooltip::Position::Top,
            ))
        },
    );

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("color-heading")).size(typography::CAPTION))
        .push(row)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::BackgroundImage;

    fn with_images(count: usize) -> carousel::State {
        let mut state = carousel::State::default();
        for i in 0..count {
            state.apply(carousel::Mutation::AddImage(BackgroundImage::from_rgba(
                format!("{i}.png"),
                1,
                1,
                vec![0, 0, 0, 255],
            )));
        }
        state
    }

    #[test]
    fn panel_renders_with_color_only() {
        let i18n = I18n::default();
        let carousel = carousel::State::default();
        let _element = view(ViewContext { i18n: &i18n }, &carousel);
    }

    #[test]
    fn panel_renders_with_rotating_images() {
        let i18n = I18n::default();
        let mut carousel = with_images(3);
        carousel.handle(carousel::Message::SetRotation(true));
        let _element = view(ViewContext { i18n: &i18n }, &carousel);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Clock card: mode switch, mm:ss face, start/pause, reset and bell.

use crate::app::i18n::fluent::I18n;
use crate::domain::timer::Mode;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::timer::subcomponents::clock;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, tooltip, Column, Row, Text},
    Element, Length,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Start when paused, pause when running.
    Toggle,
    Reset,
    SelectMode(Mode),
    /// Single chime from the bell button.
    RingBell,
}

pub fn view<'a>(ctx: ViewContext<'a>, clock: &'a clock::State) -> Element<'a, Message> {
    let modes = Mode::ALL.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, &mode| {
            let style = if mode == clock.mode() {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row.push(
                button(Text::new(ctx.i18n.tr(mode.i18n_key())).size(typography::BODY))
                    .on_press(Message::SelectMode(mode))
                    .padding([spacing::XXS, spacing::SM])
                    .style(style),
            )
        },
    );

    let face = Text::new(clock.remaining().to_string()).size(typography::CLOCK);

    let (toggle_icon, toggle_key) = if clock.is_running() {
        (icons::pause(), "button-pause")
    } else {
        (icons::play(), "button-start")
    };
    let toggle = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(toggle_icon, sizing::ICON_SM, palette::WHITE))
            .push(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY_LG)),
    )
    .on_press(Message::Toggle)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary);

    let reset = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(
                icons::rotate_ccw(),
                sizing::ICON_SM,
                palette::GRAY_400,
            ))
            .push(Text::new(ctx.i18n.tr("button-reset")).size(typography::BODY_LG)),
    )
    .on_press(Message::Reset)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::unselected);

    let bell = tooltip(
        button(icons::tinted(icons::bell(), sizing::ICON_MD, palette::WHITE))
            .on_press(Message::RingBell)
            .padding(spacing::XS)
            .style(styles::button::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            )),
        Text::new(ctx.i18n.tr("button-bell")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let actions = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle)
        .push(reset)
        .push(bell);

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(modes)
        .push(face)
        .push(actions);

    container(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::panel)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::app::i18n::fluent::I18n;
use crate::ui::timer;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub timer: &'a timer::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    ctx.timer.view(ctx.i18n).map(Message::Timer)
}

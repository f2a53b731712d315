// SPDX-License-Identifier: MPL-2.0
//! Background carousel sub-component.
//!
//! Holds the solid color, the ordered image list and the rotation settings.
//! Requests that change what is visible are not applied directly: they are
//! returned as [`Effect::Transition`] so the fade can hide the swap, and come
//! back through [`State::apply`].

use crate::domain::background::{Rgb, RotationInterval};
use crate::domain::timer::Mode;
use crate::media::BackgroundImage;

/// A change to the visible background, applied while it is faded out.
#[derive(Debug, Clone)]
pub enum Mutation {
    SetColor(Rgb),
    AddImage(BackgroundImage),
    RemoveImage(usize),
    ClearImages,
    Select(usize),
    /// Auto-rotation step.
    Advance,
}

/// What the window shows behind the timer.
#[derive(Debug, Clone, Copy)]
pub enum Background<'a> {
    SolidColor(Rgb),
    Image {
        image: &'a BackgroundImage,
        index: usize,
    },
}

#[derive(Debug, Clone)]
pub struct State {
    images: Vec<BackgroundImage>,
    current: usize,
    color: Rgb,
    show_color_options: bool,
    rotation_enabled: bool,
    interval: RotationInterval,
    /// Text of the interval field, kept even when it does not parse.
    interval_input: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    SetColor(Rgb),
    AddImage(BackgroundImage),
    RemoveImage(usize),
    ClearImages,
    /// Thumbnail click.
    Select(usize),
    SetRotation(bool),
    IntervalInput(String),
    RotationTick,
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Fade out, apply the mutation, fade back in.
    Transition(Mutation),
    RotationChanged(bool),
    IntervalChanged(RotationInterval),
}

impl Default for State {
    fn default() -> Self {
        Self::new(Mode::default().accent(), RotationInterval::default())
    }
}

impl State {
    #[must_use]
    pub fn new(color: Rgb, interval: RotationInterval) -> Self {
        Self {
            images: Vec::new(),
            current: 0,
            color,
            show_color_options: true,
            rotation_enabled: false,
            interval,
            interval_input: interval.secs().to_string(),
        }
    }

    /// Handle a carousel message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SetColor(color) => Effect::Transition(Mutation::SetColor(color)),
            Message::AddImage(image) => Effect::Transition(Mutation::AddImage(image)),
            Message::RemoveImage(index) => {
                if index < self.images.len() {
                    Effect::Transition(Mutation::RemoveImage(index))
                } else {
                    Effect::None
                }
            }
            Message::ClearImages => Effect::Transition(Mutation::ClearImages),
            Message::Select(index) => {
                if index < self.images.len() {
                    Effect::Transition(Mutation::Select(index))
                } else {
                    Effect::None
                }
            }
            Message::SetRotation(enabled) => {
                if enabled && self.images.len() < 2 {
                    return Effect::None;
                }
                if self.rotation_enabled == enabled {
                    return Effect::None;
                }
                self.rotation_enabled = enabled;
                Effect::RotationChanged(enabled)
            }
            Message::IntervalInput(text) => {
                let parsed = RotationInterval::parse(&text);
                self.interval_input = text;
                match parsed {
                    Some(interval) if interval != self.interval => {
                        self.interval = interval;
                        Effect::IntervalChanged(interval)
                    }
                    _ => Effect::None,
                }
            }
            Message::RotationTick => {
                if self.rotation_schedule().is_some() {
                    Effect::Transition(Mutation::Advance)
                } else {
                    // Tick from a schedule that was just torn down.
                    Effect::None
                }
            }
        }
    }

    /// Applies a mutation whose fade-out has finished.
    ///
    /// Indices are checked again because earlier mutations of the same batch
    /// may have shrunk the list.
    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetColor(color) => {
                self.images.clear();
                self.current = 0;
                self.color = color;
                self.rotation_enabled = false;
                self.show_color_options = true;
            }
            Mutation::AddImage(image) => {
                if self.images.is_empty() {
                    self.current = 0;
                }
                self.images.push(image);
                self.show_color_options = false;
            }
            Mutation::RemoveImage(index) => {
                if index >= self.images.len() {
                    return;
                }
                self.images.remove(index);
                if index <= self.current && self.current > 0 {
                    self.current -= 1;
                }
                if self.images.len() <= 1 {
                    self.rotation_enabled = false;
                    self.show_color_options = true;
                }
            }
            Mutation::ClearImages => {
                self.images.clear();
                self.current = 0;
                self.rotation_enabled = false;
                self.show_color_options = true;
            }
            Mutation::Select(index) => {
                if index < self.images.len() {
                    self.current = index;
                }
            }
            Mutation::Advance => {
                if !self.images.is_empty() {
                    self.current = (self.current + 1) % self.images.len();
                }
            }
        }
    }

    /// Shows the accent of `mode` unless images are set. Applied without fade.
    ///
    /// Returns true when the color changed.
    pub fn show_mode_accent(&mut self, mode: Mode) -> bool {
        if !self.images.is_empty() {
            return false;
        }
        let accent = mode.accent();
        let changed = self.color != accent;
        self.color = accent;
        changed
    }

    #[must_use]
    pub fn background(&self) -> Background<'_> {
        match self.images.get(self.current) {
            Some(image) => Background::Image {
                image,
                index: self.current,
            },
            None => Background::SolidColor(self.color),
        }
    }

    /// Key of the rotation subscription; `None` while rotation should not run.
    ///
    /// Changing the interval or the number of images changes the key, which
    /// restarts the schedule.
    #[must_use]
    pub fn rotation_schedule(&self) -> Option<(RotationInterval, usize)> {
        (self.rotation_enabled && self.images.len() > 1)
            .then_some((self.interval, self.images.len()))
    }

    #[must_use]
    pub fn images(&self) -> &[BackgroundImage] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn show_color_options(&self) -> bool {
        self.show_color_options
    }

    #[must_use]
    pub fn rotation_enabled(&self) -> bool {
        self.rotation_enabled
    }

    /// Rotation controls are only offered with two or more images.
    #[must_use]
    pub fn can_rotate(&self) -> bool {
        self.images.len() > 1
    }

    #[must_use]
    pub fn interval(&self) -> RotationInterval {
        self.interval
    }

    #[must_use]
    pub fn interval_input(&self) -> &str {
        &self.interval_input
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Timer domain types.
//!
//! - [`Mode`]: the three timer presets
//! - [`Remaining`]: the `mm:ss` value shown on the clock face
//! - [`ModeMinutes`]: a validated per-mode length
//! - [`ModeDurations`]: the configured length of every mode

mod newtypes;

pub use newtypes::{minutes_bounds, ModeMinutes, Remaining};

use crate::domain::background::Rgb;

/// Timer preset. Each mode has a default length and an accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// All modes in display order.
    pub const ALL: [Mode; 3] = [Mode::Pomodoro, Mode::ShortBreak, Mode::LongBreak];

    /// Accent color used as the solid background for this mode.
    #[must_use]
    pub fn accent(self) -> Rgb {
        match self {
            Mode::Pomodoro => Rgb::new(0xf8, 0x71, 0x71),
            Mode::ShortBreak => Rgb::new(0x60, 0xa5, 0xfa),
            Mode::LongBreak => Rgb::new(0x4a, 0xde, 0x80),
        }
    }

    /// Stable identifier used in diagnostics reports.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Mode::Pomodoro => "pomodoro",
            Mode::ShortBreak => "short_break",
            Mode::LongBreak => "long_break",
        }
    }

    /// Fluent key of the mode label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Mode::Pomodoro => "mode-pomodoro",
            Mode::ShortBreak => "mode-short-break",
            Mode::LongBreak => "mode-long-break",
        }
    }
}

/// Configured length of each mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDurations {
    pub pomodoro: ModeMinutes,
    pub short_break: ModeMinutes,
    pub long_break: ModeMinutes,
}

impl ModeDurations {
    /// Length of `mode` in minutes.
    #[must_use]
    pub fn minutes(&self, mode: Mode) -> ModeMinutes {
        match mode {
            Mode::Pomodoro => self.pomodoro,
            Mode::ShortBreak => self.short_break,
            Mode::LongBreak => self.long_break,
        }
    }

    /// Full remaining time for a fresh run of `mode`.
    #[must_use]
    pub fn remaining(&self, mode: Mode) -> Remaining {
        Remaining::from_minutes(self.minutes(mode))
    }
}

impl Default for ModeDurations {
    fn default() -> Self {
        Self {
            pomodoro: ModeMinutes::new(minutes_bounds::DEFAULT_POMODORO),
            short_break: ModeMinutes::new(minutes_bounds::DEFAULT_SHORT_BREAK),
            long_break: ModeMinutes::new(minutes_bounds::DEFAULT_LONG_BREAK),
        }
    }
}

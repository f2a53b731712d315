// SPDX-License-Identifier: MPL-2.0
//! Countdown clock sub-component.

use crate::app::config::COUNTDOWN_TICK_SECS;
use crate::domain::timer::{Mode, ModeDurations, Remaining};
use std::time::Duration;

/// Period of the countdown tick.
pub const TICK_PERIOD: Duration = Duration::from_secs(COUNTDOWN_TICK_SECS);

/// Countdown state: the selected mode, the time left and whether it runs.
#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    remaining: Remaining,
    running: bool,
    durations: ModeDurations,
}

/// Messages for the clock sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Start,
    Pause,
    /// Start when paused, pause when running.
    Toggle,
    /// Back to the full length of `mode`, or of the current mode when `None`.
    Reset(Option<Mode>),
    /// One second elapsed.
    Tick,
}

/// Effects produced by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Started,
    Paused,
    /// The clock was reset to `mode`.
    Reset { mode: Mode },
    /// The countdown reached 00:00 and stopped.
    Completed { mode: Mode },
}

impl Default for State {
    fn default() -> Self {
        Self::new(ModeDurations::default())
    }
}

impl State {
    /// A stopped clock in Pomodoro mode.
    #[must_use]
    pub fn new(durations: ModeDurations) -> Self {
        let mode = Mode::default();
        Self {
            mode,
            remaining: durations.remaining(mode),
            running: false,
            durations,
        }
    }

    /// Handle a clock message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start => self.start(),
            Message::Pause => self.pause(),
            Message::Toggle => {
                if self.running {
                    self.pause()
                } else {
                    self.start()
                }
            }
            Message::Reset(mode) => {
                let mode = mode.unwrap_or(self.mode);
                self.mode = mode;
                self.remaining = self.durations.remaining(mode);
                self.running = false;
                Effect::Reset { mode }
            }
            Message::Tick => self.tick(),
        }
    }

    fn start(&mut self) -> Effect {
        if self.running {
            return Effect::None;
        }
        self.running = true;
        Effect::Started
    }

    fn pause(&mut self) -> Effect {
        if !self.running {
            return Effect::None;
        }
        self.running = false;
        Effect::Paused
    }

    fn tick(&mut self) -> Effect {
        // A tick queued before a pause may still arrive.
        if !self.running {
            return Effect::None;
        }

        match self.remaining.decremented() {
            Some(next) => {
                self.remaining = next;
                if next.is_zero() {
                    self.complete()
                } else {
                    Effect::None
                }
            }
            None => self.complete(),
        }
    }

    fn complete(&mut self) -> Effect {
        self.running = false;
        Effect::Completed { mode: self.mode }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn remaining(&self) -> Remaining {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Period of the countdown subscription; `None` while stopped.
    #[must_use]
    pub fn countdown_schedule(&self) -> Option<Duration> {
        self.running.then_some(TICK_PERIOD)
    }
}

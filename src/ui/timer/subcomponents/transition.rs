// SPDX-License-Identifier: MPL-2.0
//! Fade transition around background changes.
//!
//! ```text
//! Idle ──request──► FadingOut ──300 ms──► FadingIn ──50 ms──► Idle
//!                    │  ▲                   │
//!                    └──┘ request joins     └──request──► FadingOut (new generation)
//!                         the pending batch
//! ```
//!
//! Timer messages carry the generation they were scheduled for. A message
//! whose generation no longer matches the current phase is ignored.

use super::carousel::Mutation;
use crate::app::config::{FADE_IN_MS, FADE_OUT_MS};
use std::time::Duration;

/// Delay between dimming and applying the batch.
pub const FADE_OUT: Duration = Duration::from_millis(FADE_OUT_MS);

/// Delay between applying the batch and restoring full opacity.
pub const FADE_IN: Duration = Duration::from_millis(FADE_IN_MS);

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    FadingOut {
        generation: u64,
        pending: Vec<Mutation>,
    },
    FadingIn {
        generation: u64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
    next_generation: u64,
}

#[derive(Debug, Clone)]
pub enum Message {
    Request(Mutation),
    FadeOutElapsed(u64),
    FadeInElapsed(u64),
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Schedule [`Message::FadeOutElapsed`] after [`FADE_OUT`].
    ScheduleFadeOut(u64),
    /// Apply the batch in order, then schedule [`Message::FadeInElapsed`]
    /// after [`FADE_IN`].
    Apply {
        generation: u64,
        mutations: Vec<Mutation>,
    },
    /// Full opacity restored.
    Finished,
}

impl State {
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Request(mutation) => {
                if let Phase::FadingOut { pending, .. } = &mut self.phase {
                    pending.push(mutation);
                    return Effect::None;
                }
                let generation = self.bump_generation();
                self.phase = Phase::FadingOut {
                    generation,
                    pending: vec![mutation],
                };
                Effect::ScheduleFadeOut(generation)
            }
            Message::FadeOutElapsed(elapsed) => match &mut self.phase {
                Phase::FadingOut {
                    generation,
                    pending,
                } if *generation == elapsed => {
                    let mutations = std::mem::take(pending);
                    self.phase = Phase::FadingIn {
                        generation: elapsed,
                    };
                    Effect::Apply {
                        generation: elapsed,
                        mutations,
                    }
                }
                _ => Effect::None,
            },
            Message::FadeInElapsed(elapsed) => match self.phase {
                Phase::FadingIn { generation } if generation == elapsed => {
                    self.phase = Phase::Idle;
                    Effect::Finished
                }
                _ => Effect::None,
            },
        }
    }

    /// True from the first request until full opacity is back.
    #[must_use]
    pub fn is_fading(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Number of mutations waiting for the current fade-out.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        match &self.phase {
            Phase::FadingOut { pending, .. } => pending.len(),
            _ => 0,
        }
    }

    /// Generation of the fade in progress.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        match self.phase {
            Phase::Idle => None,
            Phase::FadingOut { generation, .. } | Phase::FadingIn { generation } => {
                Some(generation)
            }
        }
    }

    fn bump_generation(&mut self) -> u64 {
        self.next_generation = self.next_generation.wrapping_add(1);
        self.next_generation
    }
}

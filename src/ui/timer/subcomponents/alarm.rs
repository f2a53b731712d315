// SPDX-License-Identifier: MPL-2.0
//! Alarm sequence sub-component.
//!
//! Plays the chime a fixed number of times. The next repeat is scheduled only
//! once the previous playback reported that it started, followed by a gap.
//! Only one sequence is live: ringing again, or cancelling, supersedes the
//! current one and every message still in flight for it is dropped.

use crate::error::Error;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sequence {
    id: u64,
    total: u32,
    played: u32,
}

#[derive(Debug, Clone)]
pub struct State {
    sequence: Option<Sequence>,
    next_id: u64,
    gap: Duration,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Start a sequence of `repeats` chimes (at least one).
    Ring(u32),
    Cancel,
    PlaybackResolved {
        id: u64,
        result: Result<(), Error>,
    },
    DelayElapsed {
        id: u64,
    },
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// A new sequence began; play its first chime.
    Started { id: u64, repeats: u32 },
    /// Play the next chime.
    Play(u64),
    /// Wait `delay`, then send [`Message::DelayElapsed`].
    Wait { id: u64, delay: Duration },
    /// Every repeat played.
    Finished { repeats: u32 },
    /// A playback failed; the remaining repeats are dropped.
    Failed { error: Error, played: u32 },
}

impl Default for State {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::app::config::DEFAULT_ALARM_GAP_MS))
    }
}

impl State {
    #[must_use]
    pub fn new(gap: Duration) -> Self {
        Self {
            sequence: None,
            next_id: 0,
            gap,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Ring(repeats) => {
                let repeats = repeats.max(1);
                self.next_id = self.next_id.wrapping_add(1);
                let id = self.next_id;
                self.sequence = Some(Sequence {
                    id,
                    total: repeats,
                    played: 0,
                });
                Effect::Started { id, repeats }
            }
            Message::Cancel => {
                self.sequence = None;
                Effect::None
            }
            Message::PlaybackResolved { id, result } => {
                let Some(sequence) = self.live(id) else {
                    return Effect::None;
                };
                match result {
                    Ok(()) => {
                        sequence.played += 1;
                        if sequence.played >= sequence.total {
                            let repeats = sequence.total;
                            self.sequence = None;
                            Effect::Finished { repeats }
                        } else {
                            Effect::Wait {
                                id,
                                delay: self.gap,
                            }
                        }
                    }
                    Err(error) => {
                        let played = sequence.played;
                        self.sequence = None;
                        Effect::Failed { error, played }
                    }
                }
            }
            Message::DelayElapsed { id } => match self.live(id) {
                Some(_) => Effect::Play(id),
                None => Effect::None,
            },
        }
    }

    #[must_use]
    pub fn is_ringing(&self) -> bool {
        self.sequence.is_some()
    }

    /// Id of the live sequence.
    #[must_use]
    pub fn live_id(&self) -> Option<u64> {
        self.sequence.map(|sequence| sequence.id)
    }

    #[must_use]
    pub fn gap(&self) -> Duration {
        self.gap
    }

    fn live(&mut self, id: u64) -> Option<&mut Sequence> {
        self.sequence.as_mut().filter(|sequence| sequence.id == id)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Alarm sound playback.
//!
//! The timer only knows the [`Chime`] trait: "play a short clip and resolve
//! once playback has started". [`DeviceChime`] implements it on the default
//! output device; tests substitute their own implementation.

mod output;
mod synth;

pub use output::DeviceChime;
pub use synth::render_chime;

use crate::error::{Error, Result};
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::Arc;

/// A short audio cue.
pub trait Chime: Send + Sync {
    /// Starts one playback of the cue.
    ///
    /// The returned future resolves as soon as playback has started (not when
    /// it ends), or with an error if the cue could not be played.
    fn play(&self) -> BoxFuture<'static, Result<()>>;
}

/// Shared chime used by the UI.
pub type SharedChime = Arc<dyn Chime>;

/// Stand-in used when no output could be set up at startup.
///
/// Every playback fails with the startup error, so alarms are reported
/// instead of silently skipped.
#[derive(Debug, Clone)]
pub struct UnavailableChime {
    reason: String,
}

impl UnavailableChime {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Chime for UnavailableChime {
    fn play(&self) -> BoxFuture<'static, Result<()>> {
        let reason = self.reason.clone();
        async move { Err(Error::Audio(reason)) }.boxed()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Audio newtypes.

use std::time::Duration;

// =============================================================================
// Volume Bounds
// =============================================================================

/// Volume bounds (0.0 to 1.0).
pub mod volume_bounds {
    /// Minimum volume (silent).
    pub const MIN: f32 = 0.0;
    /// Maximum volume (unity gain).
    pub const MAX: f32 = 1.0;
    /// Default volume.
    pub const DEFAULT: f32 = 0.8;
}

// =============================================================================
// Volume
// =============================================================================

/// Chime volume level, guaranteed to be within 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN collapses to the default level.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self::default();
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if volume is effectively muted (below audible threshold).
    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 < 0.001
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// Tone
// =============================================================================

/// Description of the synthesized chime: a base note followed by its fifth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Frequency of the first note (Hz).
    pub frequency_hz: f32,
    /// Total length of the chime.
    pub length: Duration,
    pub volume: Volume,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency_hz: 880.0,
            length: Duration::from_millis(350),
            volume: Volume::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

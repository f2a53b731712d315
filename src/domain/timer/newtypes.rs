// SPDX-License-Identifier: MPL-2.0
//! Timer newtypes.
//!
//! This module provides type-safe wrappers for countdown values,
//! ensuring they are always within valid ranges.

use std::fmt;

// =============================================================================
// Minutes Bounds
// =============================================================================

/// Mode length bounds (1 to 99 minutes).
pub mod minutes_bounds {
    /// Minimum mode length.
    pub const MIN: u8 = 1;
    /// Maximum mode length (two digits on the clock face).
    pub const MAX: u8 = 99;
    /// Default Pomodoro length.
    pub const DEFAULT_POMODORO: u8 = 25;
    /// Default short break length.
    pub const DEFAULT_SHORT_BREAK: u8 = 5;
    /// Default long break length.
    pub const DEFAULT_LONG_BREAK: u8 = 15;
}

// =============================================================================
// ModeMinutes
// =============================================================================

/// Length of a mode in whole minutes, clamped to 1–99.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeMinutes(u8);

impl ModeMinutes {
    /// Creates a new mode length, clamping to the valid range.
    #[must_use]
    pub fn new(minutes: u8) -> Self {
        Self(minutes.clamp(minutes_bounds::MIN, minutes_bounds::MAX))
    }

    /// Returns the value in minutes.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

// =============================================================================
// Remaining
// =============================================================================

/// Time left on the clock face.
///
/// Minutes never exceed 99 and seconds always stay in `0..=59`. Counting down
/// saturates at `00:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Remaining {
    minutes: u8,
    seconds: u8,
}

impl Remaining {
    /// Creates a remaining time, clamping both fields into range.
    #[must_use]
    pub fn new(minutes: u8, seconds: u8) -> Self {
        Self {
            minutes: minutes.min(minutes_bounds::MAX),
            seconds: seconds.min(59),
        }
    }

    /// A full run of the given length.
    #[must_use]
    pub fn from_minutes(minutes: ModeMinutes) -> Self {
        Self::new(minutes.value(), 0)
    }

    #[must_use]
    pub fn minutes(self) -> u8 {
        self.minutes
    }

    #[must_use]
    pub fn seconds(self) -> u8 {
        self.seconds
    }

    /// Returns true at `00:00`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Total number of seconds left.
    #[must_use]
    pub fn total_seconds(self) -> u32 {
        u32::from(self.minutes) * 60 + u32::from(self.seconds)
    }

    /// The value one second later, or `None` at `00:00`.
    ///
    /// Crosses at most one second boundary: `mm:00` becomes `(mm-1):59`.
    #[must_use]
    pub fn decremented(self) -> Option<Self> {
        if self.seconds > 0 {
            Some(Self {
                seconds: self.seconds - 1,
                ..self
            })
        } else if self.minutes > 0 {
            Some(Self {
                minutes: self.minutes - 1,
                seconds: 59,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes, self.seconds)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_minutes_clamps() {
        assert_eq!(ModeMinutes::new(0).value(), minutes_bounds::MIN);
        assert_eq!(ModeMinutes::new(200).value(), minutes_bounds::MAX);
        assert_eq!(ModeMinutes::new(42).value(), 42);
    }

    #[test]
    fn remaining_clamps_fields() {
        let remaining = Remaining::new(150, 75);
        assert_eq!(remaining.minutes(), 99);
        assert_eq!(remaining.seconds(), 59);
    }

    #[test]
    fn decrement_borrows_a_minute() {
        assert_eq!(
            Remaining::new(3, 0).decremented(),
            Some(Remaining::new(2, 59))
        );
        assert_eq!(
            Remaining::new(3, 10).decremented(),
            Some(Remaining::new(3, 9))
        );
        assert_eq!(Remaining::new(0, 0).decremented(), None);
    }

    #[test]
    fn repeated_decrements_strictly_decrease_until_zero() {
        let mut current = Remaining::new(2, 5);
        let mut steps = 0;
        while let Some(next) = current.decremented() {
            assert!(next < current);
            assert_eq!(next.total_seconds() + 1, current.total_seconds());
            current = next;
            steps += 1;
        }
        assert!(current.is_zero());
        assert_eq!(steps, 125);
    }

    #[test]
    fn display_pads_with_zeros() {
        assert_eq!(Remaining::new(5, 3).to_string(), "05:03");
        assert_eq!(Remaining::new(25, 0).to_string(), "25:00");
        assert_eq!(Remaining::default().to_string(), "00:00");
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Background newtypes.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

// =============================================================================
// Rgb
// =============================================================================

/// Opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a hex color string is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRgbError(String);

impl fmt::Display for ParseRgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {}", self.0)
    }
}

impl std::error::Error for ParseRgbError {}

impl FromStr for Rgb {
    type Err = ParseRgbError;

    /// Accepts `#rrggbb` and `#rgb`, with or without the leading `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        let invalid = || ParseRgbError(s.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                Ok(Self::new(
                    channel(0).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                    channel(4).map_err(|_| invalid())?,
                ))
            }
            3 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map(|v| v * 17);
                Ok(Self::new(
                    channel(0).map_err(|_| invalid())?,
                    channel(1).map_err(|_| invalid())?,
                    channel(2).map_err(|_| invalid())?,
                ))
            }
            _ => Err(invalid()),
        }
    }
}

// =============================================================================
// Rotation Bounds
// =============================================================================

/// Rotation interval bounds (seconds).
pub mod rotation_bounds {
    /// Minimum interval; zero is rejected.
    pub const MIN_SECS: u32 = 1;
    /// Default interval.
    pub const DEFAULT_SECS: u32 = 5;
}

// =============================================================================
// RotationInterval
// =============================================================================

/// Auto-rotation period in whole seconds. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationInterval(u32);

impl RotationInterval {
    /// Creates an interval, returning `None` for zero.
    #[must_use]
    pub fn new(secs: u32) -> Option<Self> {
        (secs >= rotation_bounds::MIN_SECS).then_some(Self(secs))
    }

    /// Parses user input; only positive integers are accepted.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<u32>().ok().and_then(Self::new)
    }

    /// Returns the interval in seconds.
    #[must_use]
    pub fn secs(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(rotation_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Tests
// =============================================================================

// SPDX-License-Identifier: MPL-2.0
//! Background domain types.
//!
//! - [`Rgb`]: an opaque sRGB color with `#rrggbb` parsing
//! - [`RotationInterval`]: the auto-rotation period
//! - [`SWATCHES`]: the solid colors offered by the color picker

mod newtypes;

pub use newtypes::{rotation_bounds, Rgb, RotationInterval};

/// A named solid color offered by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    /// Fluent key of the color name (used as tooltip).
    pub name_key: &'static str,
    pub color: Rgb,
}

/// Colors offered by the solid color picker, in display order.
pub const SWATCHES: [Swatch; 6] = [
    Swatch {
        name_key: "color-red",
        color: Rgb::new(0xf8, 0x71, 0x71),
    },
    Swatch {
        name_key: "color-blue",
        color: Rgb::new(0x60, 0xa5, 0xfa),
    },
    Swatch {
        name_key: "color-green",
        color: Rgb::new(0x4a, 0xde, 0x80),
    },
    Swatch {
        name_key: "color-purple",
        color: Rgb::new(0xa7, 0x8b, 0xfa),
    },
    Swatch {
        name_key: "color-yellow",
        color: Rgb::new(0xfb, 0xbf, 0x24),
    },
    Swatch {
        name_key: "color-cyan",
        color: Rgb::new(0x22, 0xd3, 0xee),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timer::Mode;

    #[test]
    fn swatches_include_every_mode_accent() {
        for mode in Mode::ALL {
            assert!(SWATCHES.iter().any(|swatch| swatch.color == mode.accent()));
        }
    }

    #[test]
    fn swatch_names_are_unique() {
        for (i, a) in SWATCHES.iter().enumerate() {
            for b in SWATCHES.iter().skip(i + 1) {
                assert_ne!(a.name_key, b.name_key);
            }
        }
    }
}

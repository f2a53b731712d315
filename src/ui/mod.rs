// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`timer`] - Countdown clock with background customization
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and background contrast
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod timer;

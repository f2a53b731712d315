// SPDX-License-Identifier: MPL-2.0
//! `iced_pomodoro` is a Pomodoro countdown timer built with the Iced GUI framework.
//!
//! The window shows a mm:ss clock for three modes (Pomodoro, short break and
//! long break) over a customizable backdrop: a solid color or a carousel of
//! user images that can rotate on a timer, with a short fade on every change.
//! When a countdown reaches zero an alarm chime plays a configurable number
//! of times.

pub mod app;
pub mod audio;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod media;
pub mod ui;

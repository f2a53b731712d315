// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timer**: Mode durations and their bounds
//! - **Alarm**: Repeat count, spacing and chime synthesis
//! - **Background**: Rotation interval and fade timings
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Default length of a Pomodoro work session (minutes).
pub const DEFAULT_POMODORO_MINUTES: u8 = 25;

/// Default length of a short break (minutes).
pub const DEFAULT_SHORT_BREAK_MINUTES: u8 = 5;

/// Default length of a long break (minutes).
pub const DEFAULT_LONG_BREAK_MINUTES: u8 = 15;

/// Minimum configurable mode length (minutes).
pub const MIN_MODE_MINUTES: u8 = 1;

/// Maximum configurable mode length; the clock face only has two minute digits.
pub const MAX_MODE_MINUTES: u8 = 99;

/// Period of the countdown tick.
pub const COUNTDOWN_TICK_SECS: u64 = 1;

// ==========================================================================
// Alarm Defaults
// ==========================================================================

/// Number of chimes played when a countdown completes.
pub const DEFAULT_ALARM_REPEATS: u32 = 5;

/// Maximum number of chimes per alarm.
pub const MAX_ALARM_REPEATS: u32 = 20;

/// Delay between a chime starting and the next one being requested (ms).
pub const DEFAULT_ALARM_GAP_MS: u64 = 1000;

/// Default chime volume (0.0 to 1.0).
pub const DEFAULT_ALARM_VOLUME: f32 = 0.8;

/// Minimum chime volume.
pub const MIN_ALARM_VOLUME: f32 = 0.0;

/// Maximum chime volume.
pub const MAX_ALARM_VOLUME: f32 = 1.0;

/// Base frequency of the synthesized chime (Hz).
pub const DEFAULT_TONE_HZ: f32 = 880.0;

/// Length of one synthesized chime (ms).
pub const DEFAULT_TONE_MS: u32 = 350;

/// Maximum length of one chime (ms).
pub const MAX_TONE_MS: u32 = 3000;

// ==========================================================================
// Background Defaults
// ==========================================================================

/// Default auto-rotation interval (seconds).
pub const DEFAULT_ROTATION_INTERVAL_SECS: u32 = 5;

/// Delay between hiding the background and applying the change (ms).
pub const FADE_OUT_MS: u64 = 300;

/// Delay between applying the change and showing the background again (ms).
pub const FADE_IN_MS: u64 = 50;

/// Opacity of the background while a fade is in progress.
pub const FADE_OPACITY: f32 = 0.9;

/// Window during which dropped files are collected into one batch (ms).
///
/// The window reports one event per file; files dropped together arrive
/// within the same frame.
pub const DROP_BATCH_MS: u64 = 50;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Timer validation
    assert!(MIN_MODE_MINUTES > 0);
    assert!(MAX_MODE_MINUTES <= 99);
    assert!(DEFAULT_POMODORO_MINUTES >= MIN_MODE_MINUTES);
    assert!(DEFAULT_POMODORO_MINUTES <= MAX_MODE_MINUTES);
    assert!(DEFAULT_SHORT_BREAK_MINUTES >= MIN_MODE_MINUTES);
    assert!(DEFAULT_LONG_BREAK_MINUTES <= MAX_MODE_MINUTES);

    // Alarm validation
    assert!(DEFAULT_ALARM_REPEATS > 0);
    assert!(DEFAULT_ALARM_REPEATS <= MAX_ALARM_REPEATS);
    assert!(DEFAULT_ALARM_VOLUME >= MIN_ALARM_VOLUME);
    assert!(DEFAULT_ALARM_VOLUME <= MAX_ALARM_VOLUME);
    assert!(DEFAULT_TONE_MS > 0);
    assert!(DEFAULT_TONE_MS <= MAX_TONE_MS);

    // Background validation
    assert!(DEFAULT_ROTATION_INTERVAL_SECS > 0);
    assert!(FADE_OUT_MS > FADE_IN_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Timer Actions
    // ==========================================================================
    StartTimer,
    PauseTimer,
    ResetTimer,

    /// Switch to another timer mode (always resets the clock).
    SwitchMode {
        mode: String,
    },

    /// Play a single chime from the bell button.
    RingBell,

    // ==========================================================================
    // Background Actions
    // ==========================================================================
    /// Add a background image.
    AddImage {
        /// Where the file came from (`file_dialog`, `drag_drop`, `cli`).
        #[serde(skip_serializing_if = "Option::is_none")]
        source: Option<String>,
    },

    RemoveImage {
        index: usize,
    },

    ClearImages,

    /// Thumbnail click.
    SelectImage {
        index: usize,
    },

    ToggleRotation {
        enabled: bool,
    },

    SetRotationInterval {
        secs: u32,
    },

    /// Pick a solid background color (`#rrggbb`).
    SetColor {
        color: String,
    },
}

/// Application state changes that are not direct user actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AppStateEvent {
    /// A countdown reached 00:00.
    CountdownCompleted { mode: String },

    /// An alarm sequence started.
    AlarmStarted { repeats: u32 },

    /// An alarm sequence played every chime.
    AlarmFinished { repeats: u32 },

    /// Auto-rotation moved to another image.
    BackgroundRotated { index: usize },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        action: UserAction,
        /// Optional additional details (e.g., error context).
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Application state change.
    AppState { state: AppStateEvent },

    /// Non-critical issue, such as an undecodable image or an invalid config file.
    Warning { message: String },

    /// Failure of an operation, such as chime playback.
    Error { message: String },
}

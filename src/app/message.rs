// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::timer;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Timer(timer::Message),
    /// Result from the image picker; empty when cancelled.
    ImagesPicked(Vec<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The drop batch window closed; load every file dropped so far.
    DropBatchReady,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_POMODORO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_path: Option<PathBuf>,
    /// Images to preload as backgrounds, in order.
    pub images: Vec<PathBuf>,
}

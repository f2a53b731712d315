// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file at startup.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[timer]` - Length of each timer mode
//! - `[alarm]` - Chime repeats, spacing and synthesis
//! - `[background]` - Rotation interval and initial solid color
//!
//! Every field is optional; missing fields fall back to [`defaults`].
//! Timer and background state are never written back.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_POMODORO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_pomodoro::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let durations = config.timer.mode_durations();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::audio::{Tone, Volume};
use crate::domain::background::{Rgb, RotationInterval};
use crate::domain::timer::{ModeDurations, ModeMinutes};
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Length of each timer mode, in minutes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TimerConfig {
    #[serde(default = "default_pomodoro_minutes")]
    pub pomodoro_minutes: Option<u8>,

    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: Option<u8>,

    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: Option<u8>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            pomodoro_minutes: default_pomodoro_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
        }
    }
}

impl TimerConfig {
    /// Mode lengths with out-of-range values clamped.
    #[must_use]
    pub fn mode_durations(&self) -> ModeDurations {
        ModeDurations {
            pomodoro: ModeMinutes::new(self.pomodoro_minutes.unwrap_or(DEFAULT_POMODORO_MINUTES)),
            short_break: ModeMinutes::new(
                self.short_break_minutes
                    .unwrap_or(DEFAULT_SHORT_BREAK_MINUTES),
            ),
            long_break: ModeMinutes::new(
                self.long_break_minutes
                    .unwrap_or(DEFAULT_LONG_BREAK_MINUTES),
            ),
        }
    }
}

/// Completion alarm settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AlarmConfig {
    /// How many times the chime plays when a countdown completes.
    #[serde(default = "default_repeats")]
    pub repeats: Option<u32>,

    /// Delay after each chime starts before the next one is requested.
    #[serde(default = "default_gap_ms")]
    pub gap_ms: Option<u64>,

    /// Chime volume (0.0 to 1.0).
    #[serde(default = "default_volume")]
    pub volume: Option<f32>,

    /// Base frequency of the chime.
    #[serde(default = "default_tone_hz")]
    pub tone_hz: Option<f32>,

    /// Length of a single chime.
    #[serde(default = "default_tone_ms")]
    pub tone_ms: Option<u32>,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            repeats: default_repeats(),
            gap_ms: default_gap_ms(),
            volume: default_volume(),
            tone_hz: default_tone_hz(),
            tone_ms: default_tone_ms(),
        }
    }
}

impl AlarmConfig {
    /// Number of chimes per completion, within `1..=MAX_ALARM_REPEATS`.
    #[must_use]
    pub fn repeat_count(&self) -> u32 {
        self.repeats
            .unwrap_or(DEFAULT_ALARM_REPEATS)
            .clamp(1, MAX_ALARM_REPEATS)
    }

    #[must_use]
    pub fn gap(&self) -> Duration {
        Duration::from_millis(self.gap_ms.unwrap_or(DEFAULT_ALARM_GAP_MS))
    }

    /// The chime to synthesize.
    #[must_use]
    pub fn tone(&self) -> Tone {
        let frequency_hz = self
            .tone_hz
            .filter(|hz| hz.is_finite() && *hz > 0.0)
            .unwrap_or(DEFAULT_TONE_HZ);
        let length_ms = self
            .tone_ms
            .unwrap_or(DEFAULT_TONE_MS)
            .clamp(1, MAX_TONE_MS);

        Tone {
            frequency_hz,
            length: Duration::from_millis(u64::from(length_ms)),
            volume: Volume::new(self.volume.unwrap_or(DEFAULT_ALARM_VOLUME)),
        }
    }
}

/// Background settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BackgroundConfig {
    /// Default auto-rotation interval.
    #[serde(default = "default_rotation_interval_secs")]
    pub rotation_interval_secs: Option<u32>,

    /// Solid color shown at startup (`#rrggbb`). Defaults to the Pomodoro accent.
    #[serde(default)]
    pub initial_color: Option<String>,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            rotation_interval_secs: default_rotation_interval_secs(),
            initial_color: None,
        }
    }
}

impl BackgroundConfig {
    /// Configured rotation interval; zero falls back to the default.
    #[must_use]
    pub fn rotation_interval(&self) -> RotationInterval {
        self.rotation_interval_secs
            .and_then(RotationInterval::new)
            .unwrap_or_default()
    }

    /// Configured startup color, if present and well formed.
    #[must_use]
    pub fn initial_color(&self) -> Option<Rgb> {
        self.initial_color
            .as_deref()
            .and_then(|hex| hex.parse().ok())
    }

    /// Values present in the file but replaced by their default.
    fn ignored_values(&self) -> Vec<String> {
        let mut ignored = Vec::new();
        if let Some(Err(err)) = self.initial_color.as_deref().map(str::parse::<Rgb>) {
            ignored.push(format!("background.initial_color: {err}"));
        }
        if self.rotation_interval_secs == Some(0) {
            ignored.push("background.rotation_interval_secs: must be positive".to_string());
        }
        ignored
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with sectioned structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub timer: TimerConfig,

    #[serde(default)]
    pub alarm: AlarmConfig,

    #[serde(default)]
    pub background: BackgroundConfig,
}

impl Config {
    /// Describes well-typed values that were ignored, such as a malformed
    /// `initial_color`.
    #[must_use]
    pub fn validation_warning(&self) -> Option<String> {
        let ignored = self.background.ignored_values();
        (!ignored.is_empty()).then(|| ignored.join("; "))
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_pomodoro_minutes() -> Option<u8> {
    Some(DEFAULT_POMODORO_MINUTES)
}

fn default_short_break_minutes() -> Option<u8> {
    Some(DEFAULT_SHORT_BREAK_MINUTES)
}

fn default_long_break_minutes() -> Option<u8> {
    Some(DEFAULT_LONG_BREAK_MINUTES)
}

fn default_repeats() -> Option<u32> {
    Some(DEFAULT_ALARM_REPEATS)
}

fn default_gap_ms() -> Option<u64> {
    Some(DEFAULT_ALARM_GAP_MS)
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_ALARM_VOLUME)
}

fn default_tone_hz() -> Option<f32> {
    Some(DEFAULT_TONE_HZ)
}

fn default_tone_ms() -> Option<u32> {
    Some(DEFAULT_TONE_MS)
}

fn default_rotation_interval_secs() -> Option<u32> {
    Some(DEFAULT_ROTATION_INTERVAL_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    let warning = config.validation_warning().map(|ignored| {
                        format!("{}: {} (defaults used)", path.display(), ignored)
                    });
                    return (config, warning);
                }
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {}", path.display(), err)),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timer::{Mode, Remaining};
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.language, None);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.timer.pomodoro_minutes, Some(25));
        assert_eq!(config.alarm.repeat_count(), 5);
        assert_eq!(config.alarm.gap(), Duration::from_secs(1));
        assert_eq!(config.background.rotation_interval().secs(), 5);
        assert_eq!(config.background.initial_color(), None);
    }

    #[test]
    fn sectioned_file_loads_correctly() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r##"
[general]
language = "fr"
theme_mode = "Dark"

[timer]
pomodoro_minutes = 50
short_break_minutes = 10

[alarm]
repeats = 3
gap_ms = 250
volume = 0.5

[background]
rotation_interval_secs = 12
initial_color = "#60a5fa"
"##,
        )
        .expect("write file");

        let config = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        let durations = config.timer.mode_durations();
        assert_eq!(durations.remaining(Mode::Pomodoro), Remaining::new(50, 0));
        assert_eq!(durations.remaining(Mode::ShortBreak), Remaining::new(10, 0));
        // Unspecified field keeps its default.
        assert_eq!(durations.remaining(Mode::LongBreak), Remaining::new(15, 0));

        assert_eq!(config.alarm.repeat_count(), 3);
        assert_eq!(config.alarm.gap(), Duration::from_millis(250));
        assert_eq!(config.alarm.tone().volume, Volume::new(0.5));
        assert_eq!(config.alarm.tone().frequency_hz, DEFAULT_TONE_HZ);

        assert_eq!(config.background.rotation_interval().secs(), 12);
        assert_eq!(
            config.background.initial_color(),
            Some(Rgb::new(0x60, 0xa5, 0xfa))
        );
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config: Config = toml::from_str(
            r#"
[timer]
pomodoro_minutes = 0
long_break_minutes = 200

[alarm]
repeats = 0
volume = 4.0
tone_ms = 999999
tone_hz = -10.0

[background]
rotation_interval_secs = 0
initial_color = "not a color"
"#,
        )
        .expect("valid toml");

        let durations = config.timer.mode_durations();
        assert_eq!(durations.pomodoro.value(), MIN_MODE_MINUTES);
        assert_eq!(durations.long_break.value(), MAX_MODE_MINUTES);
        assert_eq!(config.alarm.repeat_count(), 1);

        let tone = config.alarm.tone();
        assert_eq!(tone.volume.value(), MAX_ALARM_VOLUME);
        assert_eq!(tone.length, Duration::from_millis(u64::from(MAX_TONE_MS)));
        assert_eq!(tone.frequency_hz, DEFAULT_TONE_HZ);

        assert_eq!(config.background.rotation_interval().secs(), 5);
        assert_eq!(config.background.initial_color(), None);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "[timer\npomodoro_minutes = ").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        let warning = warning.expect("should warn about parse error");
        assert!(warning.contains("settings.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "").expect("write file");

        let config = load_from_path(&config_path).expect("empty file is valid");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn malformed_initial_color_is_reported() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(
            base_dir.join("settings.toml"),
            "[background]\ninitial_color = \"#12zz45\"\n",
        )
        .expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        let warning = warning.expect("should warn about the color");
        assert!(warning.contains("background.initial_color"));
        assert!(warning.contains("#12zz45"));
        assert_eq!(config.background.initial_color(), None);
    }

    #[test]
    fn zero_rotation_interval_is_reported() {
        let config: Config =
            toml::from_str("[background]\nrotation_interval_secs = 0\n").expect("valid toml");
        let warning = config.validation_warning().expect("should warn");
        assert!(warning.contains("rotation_interval_secs"));
        assert_eq!(
            config.background.rotation_interval().secs(),
            DEFAULT_ROTATION_INTERVAL_SECS
        );
    }

    #[test]
    fn valid_file_has_no_warning() {
        let config: Config = toml::from_str(
            "[background]\ninitial_color = \"#0080ff\"\nrotation_interval_secs = 12\n",
        )
        .expect("valid toml");
        assert_eq!(config.validation_warning(), None);
        assert!(Config::default().validation_warning().is_none());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the timer screen.
//!
//! The `App` struct wires together localization, diagnostics, the alarm
//! output and the timer component, and turns top-level messages into side
//! effects like the image picker or the diagnostics export on close.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::audio::{DeviceChime, SharedChime, UnavailableChime};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::ui::theming::ThemeMode;
use crate::ui::timer::{self, ImageSource};
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    timer: timer::State,
    theme_mode: ThemeMode,
    diagnostics: DiagnosticsCollector,
    /// Report destination requested on the command line.
    diagnostics_path: Option<PathBuf>,
    /// Dropped files waiting for the batch window to close.
    pending_drops: Vec<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("timer", &self.timer)
            .field("theme_mode", &self.theme_mode)
            .field("diagnostics_path", &self.diagnostics_path)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 460;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close goes through `Message::WindowCloseRequested` so the
        // diagnostics report can be written first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, opens the audio output and queues the
    /// images passed on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = diagnostics.handle();
        if let Some(warning) = config_warning {
            eprintln!("{warning}");
            handle.log_warning(warning);
        }

        let chime: SharedChime = match DeviceChime::new(config.alarm.tone()) {
            Ok(chime) => Arc::new(chime),
            Err(err) => {
                let message = format!("Audio output unavailable: {err}");
                eprintln!("{message}");
                handle.log_error(message.clone());
                Arc::new(UnavailableChime::new(message))
            }
        };

        let timer = timer::State::new(timer::Settings::from_config(&config), chime, handle);
        let task = timer
            .load_images(flags.images, ImageSource::CommandLine)
            .map(Message::Timer);

        let app = App {
            i18n,
            timer,
            theme_mode: config.general.theme_mode,
            diagnostics,
            diagnostics_path: flags.diagnostics_path,
            pending_drops: Vec::new(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.timer.title(&self.i18n)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            self.timer.subscription().map(Message::Timer),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // Drain events sent from the timer's handle.
        self.diagnostics.process_pending();

        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            timer: &mut self.timer,
            diagnostics: &mut self.diagnostics,
            diagnostics_path: self.diagnostics_path.as_deref(),
            pending_drops: &mut self.pending_drops,
        };

        match message {
            Message::Timer(timer_message) => update::handle_timer_message(&mut ctx, timer_message),
            Message::ImagesPicked(paths) => update::handle_images_picked(&mut ctx, paths),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::DropBatchReady => update::handle_drop_batch_ready(&mut ctx),
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            timer: &self.timer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Chime;
    use crate::error::Result;
    use crate::ui::timer::controls;
    use futures_util::future::{BoxFuture, FutureExt};

    struct SilentChime;

    impl Chime for SilentChime {
        fn play(&self) -> BoxFuture<'static, Result<()>> {
            async { Ok(()) }.boxed()
        }
    }

    fn test_app() -> App {
        let diagnostics = DiagnosticsCollector::default();
        let timer = timer::State::new(
            timer::Settings::default(),
            Arc::new(SilentChime),
            diagnostics.handle(),
        );
        App {
            i18n: I18n::new(Some("en-US".to_string()), &config::Config::default()),
            timer,
            theme_mode: ThemeMode::Dark,
            diagnostics,
            diagnostics_path: None,
            pending_drops: Vec::new(),
        }
    }

    #[test]
    fn window_keeps_a_minimum_size() {
        let settings = window_settings();
        assert!(!settings.exit_on_close_request);
        let min = settings.min_size.expect("min size set");
        assert!(min.width <= settings.size.width);
        assert!(min.height <= settings.size.height);
    }

    #[test]
    fn title_shows_remaining_time_and_mode() {
        let app = test_app();
        assert_eq!(app.title(), "25:00 - Pomodoro");
    }

    #[test]
    fn update_routes_timer_messages_and_collects_diagnostics() {
        let mut app = test_app();
        let _ = app.update(Message::Timer(timer::Message::Controls(
            controls::Message::Toggle,
        )));
        assert!(app.timer.clock().is_running());

        let _ = app.update(Message::Timer(timer::Message::Tick));
        assert_eq!(app.title(), "24:59 - Pomodoro");
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn theme_follows_config_mode() {
        let app = test_app();
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn view_renders() {
        let app = test_app();
        let _element = app.view();
    }
}

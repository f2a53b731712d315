// SPDX-License-Identifier: MPL-2.0
//! Timer component encapsulating state and update logic.
//!
//! Routes messages to the sub-components, turns their effects into tasks, and
//! derives the periodic subscriptions (countdown, rotation) from state.

use crate::app::config::Config;
use crate::app::i18n::fluent::I18n;
use crate::audio::SharedChime;
use crate::diagnostics::{AppStateEvent, DiagnosticsHandle, UserAction};
use crate::domain::background::{Rgb, RotationInterval};
use crate::domain::timer::ModeDurations;
use crate::error::Error;
use crate::media::{self, BackgroundImage};
use crate::ui::design_tokens::{opacity, spacing};
use crate::ui::styles;
use crate::ui::timer::subcomponents::carousel::{Background, Mutation};
use crate::ui::timer::subcomponents::{alarm, carousel, clock, transition};
use crate::ui::timer::{background_panel, controls};
use iced::widget::{container, image, scrollable, Column, Space, Stack};
use iced::{alignment::Horizontal, ContentFit, Element, Length, Subscription, Task};
use std::path::PathBuf;
use std::time::Duration;

/// Where a batch of image paths came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    FileDialog,
    DragDrop,
    CommandLine,
}

impl ImageSource {
    /// Identifier recorded in diagnostics.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            ImageSource::FileDialog => "file_dialog",
            ImageSource::DragDrop => "drag_drop",
            ImageSource::CommandLine => "cli",
        }
    }
}

/// Outcome of loading one file: its display name and the decoded image.
pub type LoadedImage = (String, Result<BackgroundImage, Error>);

#[derive(Debug, Clone)]
pub enum Message {
    Controls(controls::Message),
    Panel(background_panel::Message),
    /// Countdown cadence.
    Tick,
    /// Rotation cadence.
    RotationTick,
    ImagesLoaded {
        source: ImageSource,
        results: Vec<LoadedImage>,
    },
    Transition(transition::Message),
    Alarm(alarm::Message),
}

/// Side effects the application should perform after handling a timer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show the image picker and feed its result to [`State::load_images`].
    OpenImageDialog,
}

/// Startup values taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub durations: ModeDurations,
    pub alarm_repeats: u32,
    pub alarm_gap: Duration,
    pub rotation_interval: RotationInterval,
    /// Solid color shown at startup instead of the Pomodoro accent.
    pub initial_color: Option<Rgb>,
}

impl Settings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            durations: config.timer.mode_durations(),
            alarm_repeats: config.alarm.repeat_count(),
            alarm_gap: config.alarm.gap(),
            rotation_interval: config.background.rotation_interval(),
            initial_color: config.background.initial_color(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Complete timer screen state.
pub struct State {
    clock: clock::State,
    carousel: carousel::State,
    transition: transition::State,
    alarm: alarm::State,
    alarm_repeats: u32,
    chime: SharedChime,
    diagnostics: DiagnosticsHandle,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("clock", &self.clock)
            .field("carousel", &self.carousel)
            .field("transition", &self.transition)
            .field("alarm", &self.alarm)
            .field("alarm_repeats", &self.alarm_repeats)
            .finish_non_exhaustive()
    }
}

impl State {
    #[must_use]
    pub fn new(settings: Settings, chime: SharedChime, diagnostics: DiagnosticsHandle) -> Self {
        let clock = clock::State::new(settings.durations);
        let color = settings
            .initial_color
            .unwrap_or_else(|| clock.mode().accent());
        Self {
            clock,
            carousel: carousel::State::new(color, settings.rotation_interval),
            transition: transition::State::default(),
            alarm: alarm::State::new(settings.alarm_gap),
            alarm_repeats: settings.alarm_repeats,
            chime,
            diagnostics,
        }
    }

    #[must_use]
    pub fn clock(&self) -> &clock::State {
        &self.clock
    }

    #[must_use]
    pub fn carousel(&self) -> &carousel::State {
        &self.carousel
    }

    #[must_use]
    pub fn is_fading(&self) -> bool {
        self.transition.is_fading()
    }

    #[must_use]
    pub fn is_alarm_ringing(&self) -> bool {
        self.alarm.is_ringing()
    }

    /// Window title, e.g. `24:59 - Pomodoro`.
    #[must_use]
    pub fn title(&self, i18n: &I18n) -> String {
        format!(
            "{} - {}",
            self.clock.remaining(),
            i18n.tr(self.clock.mode().i18n_key())
        )
    }

    /// Decodes `paths` off the UI thread, in order, and reports them as one
    /// [`Message::ImagesLoaded`].
    pub fn load_images(&self, paths: Vec<PathBuf>, source: ImageSource) -> Task<Message> {
        if paths.is_empty() {
            return Task::none();
        }
        Task::perform(load_all(paths), move |results| Message::ImagesLoaded {
            source,
            results,
        })
    }

    /// Countdown while running; rotation while enabled with two or more images.
    pub fn subscription(&self) -> Subscription<Message> {
        let countdown = match self.clock.countdown_schedule() {
            Some(period) => iced::time::every(period).map(|_| Message::Tick),
            None => Subscription::none(),
        };

        // Keyed on the image count as well, so adding or removing an image
        // restarts the cadence.
        let rotation = match self.carousel.rotation_schedule() {
            Some((interval, len)) => iced::time::every(interval.as_duration())
                .with(len)
                .map(|_| Message::RotationTick),
            None => Subscription::none(),
        };

        Subscription::batch([countdown, rotation])
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Controls(msg) => (Effect::None, self.handle_controls(msg)),
            Message::Panel(background_panel::Message::AddImages) => {
                (Effect::OpenImageDialog, Task::none())
            }
            Message::Panel(msg) => (Effect::None, self.handle_panel(msg)),
            Message::Tick => {
                let effect = self.clock.handle(clock::Message::Tick);
                (Effect::None, self.on_clock_effect(effect))
            }
            Message::RotationTick => {
                let effect = self.carousel.handle(carousel::Message::RotationTick);
                (Effect::None, self.on_carousel_effect(effect))
            }
            Message::ImagesLoaded { source, results } => {
                (Effect::None, self.on_images_loaded(source, results))
            }
            Message::Transition(msg) => {
                let effect = self.transition.handle(msg);
                (Effect::None, self.on_transition_effect(effect))
            }
            Message::Alarm(msg) => {
                let effect = self.alarm.handle(msg);
                (Effect::None, self.on_alarm_effect(effect))
            }
        }
    }

    fn handle_controls(&mut self, msg: controls::Message) -> Task<Message> {
        let effect = match msg {
            controls::Message::Toggle => self.clock.handle(clock::Message::Toggle),
            controls::Message::Reset => {
                self.diagnostics.log_action(UserAction::ResetTimer);
                self.clock.handle(clock::Message::Reset(None))
            }
            controls::Message::SelectMode(mode) => {
                self.diagnostics.log_action(UserAction::SwitchMode {
                    mode: mode.id().to_string(),
                });
                self.clock.handle(clock::Message::Reset(Some(mode)))
            }
            controls::Message::RingBell => {
                self.diagnostics.log_action(UserAction::RingBell);
                let effect = self.alarm.handle(alarm::Message::Ring(1));
                return self.on_alarm_effect(effect);
            }
        };
        self.on_clock_effect(effect)
    }

    fn handle_panel(&mut self, msg: background_panel::Message) -> Task<Message> {
        let request = match msg {
            // Routed to the application before reaching here.
            background_panel::Message::AddImages => return Task::none(),
            background_panel::Message::ClearImages => {
                self.diagnostics.log_action(UserAction::ClearImages);
                carousel::Message::ClearImages
            }
            background_panel::Message::RemoveImage(index) => {
                self.diagnostics
                    .log_action(UserAction::RemoveImage { index });
                carousel::Message::RemoveImage(index)
            }
            background_panel::Message::SelectImage(index) => {
                self.diagnostics
                    .log_action(UserAction::SelectImage { index });
                carousel::Message::Select(index)
            }
            background_panel::Message::SetRotation(enabled) => {
                carousel::Message::SetRotation(enabled)
            }
            background_panel::Message::IntervalInput(text) => {
                carousel::Message::IntervalInput(text)
            }
            background_panel::Message::SetColor(color) => {
                self.diagnostics.log_action(UserAction::SetColor {
                    color: color.to_hex(),
                });
                carousel::Message::SetColor(color)
            }
        };
        let effect = self.carousel.handle(request);
        self.on_carousel_effect(effect)
    }

    fn on_clock_effect(&mut self, effect: clock::Effect) -> Task<Message> {
        match effect {
            clock::Effect::None => Task::none(),
            clock::Effect::Started => {
                self.diagnostics.log_action(UserAction::StartTimer);
                self.alarm.handle(alarm::Message::Cancel);
                Task::none()
            }
            clock::Effect::Paused => {
                self.diagnostics.log_action(UserAction::PauseTimer);
                Task::none()
            }
            clock::Effect::Reset { mode } => {
                self.alarm.handle(alarm::Message::Cancel);
                self.carousel.show_mode_accent(mode);
                Task::none()
            }
            clock::Effect::Completed { mode } => {
                self.diagnostics.log_state(AppStateEvent::CountdownCompleted {
                    mode: mode.id().to_string(),
                });
                let effect = self.alarm.handle(alarm::Message::Ring(self.alarm_repeats));
                self.on_alarm_effect(effect)
            }
        }
    }

    fn on_carousel_effect(&mut self, effect: carousel::Effect) -> Task<Message> {
        match effect {
            carousel::Effect::None => Task::none(),
            carousel::Effect::Transition(mutation) => {
                let effect = self
                    .transition
                    .handle(transition::Message::Request(mutation));
                self.on_transition_effect(effect)
            }
            carousel::Effect::RotationChanged(enabled) => {
                self.diagnostics
                    .log_action(UserAction::ToggleRotation { enabled });
                Task::none()
            }
            carousel::Effect::IntervalChanged(interval) => {
                self.diagnostics.log_action(UserAction::SetRotationInterval {
                    secs: interval.secs(),
                });
                Task::none()
            }
        }
    }

    fn on_transition_effect(&mut self, effect: transition::Effect) -> Task<Message> {
        match effect {
            transition::Effect::None | transition::Effect::Finished => Task::none(),
            transition::Effect::ScheduleFadeOut(generation) => after(transition::FADE_OUT, move || {
                Message::Transition(transition::Message::FadeOutElapsed(generation))
            }),
            transition::Effect::Apply {
                generation,
                mutations,
            } => {
                for mutation in mutations {
                    let rotated = matches!(mutation, Mutation::Advance);
                    self.carousel.apply(mutation);
                    if rotated {
                        self.diagnostics.log_state(AppStateEvent::BackgroundRotated {
                            index: self.carousel.current_index(),
                        });
                    }
                }
                after(transition::FADE_IN, move || {
                    Message::Transition(transition::Message::FadeInElapsed(generation))
                })
            }
        }
    }

    fn on_alarm_effect(&mut self, effect: alarm::Effect) -> Task<Message> {
        match effect {
            alarm::Effect::None => Task::none(),
            alarm::Effect::Started { id, repeats } => {
                self.diagnostics
                    .log_state(AppStateEvent::AlarmStarted { repeats });
                self.play_chime(id)
            }
            alarm::Effect::Play(id) => self.play_chime(id),
            alarm::Effect::Wait { id, delay } => after(delay, move || {
                Message::Alarm(alarm::Message::DelayElapsed { id })
            }),
            alarm::Effect::Finished { repeats } => {
                self.diagnostics
                    .log_state(AppStateEvent::AlarmFinished { repeats });
                Task::none()
            }
            alarm::Effect::Failed { error, played } => {
                let message = format!("Alarm playback failed after {played} chime(s): {error}");
                eprintln!("{message}");
                self.diagnostics.log_error(message);
                Task::none()
            }
        }
    }

    fn play_chime(&self, id: u64) -> Task<Message> {
        Task::perform(self.chime.play(), move |result| {
            Message::Alarm(alarm::Message::PlaybackResolved { id, result })
        })
    }

    fn on_images_loaded(&mut self, source: ImageSource, results: Vec<LoadedImage>) -> Task<Message> {
        let mut tasks = Vec::new();
        for (name, result) in results {
            match result {
                Ok(image) => {
                    self.diagnostics.log_action(UserAction::AddImage {
                        source: Some(source.id().to_string()),
                    });
                    let effect = self.carousel.handle(carousel::Message::AddImage(image));
                    tasks.push(self.on_carousel_effect(effect));
                }
                Err(err) if err.is_not_an_image() => {}
                Err(err) => self.diagnostics.log_warning(format!("{name}: {err}")),
            }
        }
        Task::batch(tasks)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let alpha = if self.transition.is_fading() {
            opacity::FADED
        } else {
            opacity::OPAQUE
        };

        let backdrop: Element<'_, Message> = match self.carousel.background() {
            Background::SolidColor(color) => container(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::solid_background(color, alpha))
                .into(),
            Background::Image { image: picture, .. } => image(picture.handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .opacity(alpha)
                .into(),
        };

        let cards = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(controls::view(controls::ViewContext { i18n }, &self.clock).map(Message::Controls))
            .push(
                background_panel::view(background_panel::ViewContext { i18n }, &self.carousel)
                    .map(Message::Panel),
            );

        let foreground = scrollable(
            container(cards)
                .width(Length::Fill)
                .align_x(Horizontal::Center)
                .padding(spacing::LG),
        )
        .height(Length::Fill);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(foreground)
            .into()
    }
}

/// Emits `message()` once `delay` has elapsed.
fn after(delay: Duration, message: impl FnOnce() -> Message + Send + 'static) -> Task<Message> {
    Task::perform(wait_then(delay, message), std::convert::identity)
}

/// The timer is created on first poll, inside the runtime.
async fn wait_then(delay: Duration, message: impl FnOnce() -> Message) -> Message {
    tokio::time::sleep(delay).await;
    message()
}

async fn load_all(paths: Vec<PathBuf>) -> Vec<LoadedImage> {
    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        loaded.push((name, media::load_background_async(path).await));
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Chime;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::domain::timer::{Mode, Remaining};
    use crate::error::{ImageError, Result};
    use futures_util::future::{BoxFuture, FutureExt};
    use std::sync::Arc;

    struct SilentChime;

    impl Chime for SilentChime {
        fn play(&self) -> BoxFuture<'static, Result<()>> {
            async { Ok(()) }.boxed()
        }
    }

    fn setup() -> (State, DiagnosticsCollector) {
        let collector = DiagnosticsCollector::default();
        let state = State::new(Settings::default(), Arc::new(SilentChime), collector.handle());
        (state, collector)
    }

    fn picture(name: &str) -> LoadedImage {
        (
            name.to_string(),
            Ok(BackgroundImage::from_rgba(name, 1, 1, vec![0, 0, 0, 255])),
        )
    }

    /// Runs the pending fade to completion, as the scheduled tasks would.
    fn finish_fade(state: &mut State) {
        let generation = state.transition.generation().expect("fade in progress");
        state.handle_message(Message::Transition(transition::Message::FadeOutElapsed(
            generation,
        )));
        state.handle_message(Message::Transition(transition::Message::FadeInElapsed(
            generation,
        )));
        assert!(!state.is_fading());
    }

    fn add_images(state: &mut State, names: &[&str]) {
        state.handle_message(Message::ImagesLoaded {
            source: ImageSource::FileDialog,
            results: names.iter().map(|name| picture(name)).collect(),
        });
        finish_fade(state);
    }

    fn background_index(state: &State) -> Option<usize> {
        match state.carousel().background() {
            Background::Image { index, .. } => Some(index),
            Background::SolidColor(_) => None,
        }
    }

    #[test]
    fn initial_state_is_stopped_pomodoro_on_red() {
        let (state, _) = setup();
        assert_eq!(state.clock().mode(), Mode::Pomodoro);
        assert_eq!(state.clock().remaining(), Remaining::new(25, 0));
        assert!(!state.clock().is_running());
        assert!(matches!(
            state.carousel().background(),
            Background::SolidColor(color) if color == Mode::Pomodoro.accent()
        ));
    }

    #[test]
    fn configured_initial_color_replaces_accent() {
        let collector = DiagnosticsCollector::default();
        let settings = Settings {
            initial_color: Some(Rgb::new(0x22, 0xd3, 0xee)),
            ..Settings::default()
        };
        let state = State::new(settings, Arc::new(SilentChime), collector.handle());
        assert_eq!(state.carousel().color(), Rgb::new(0x22, 0xd3, 0xee));
    }

    #[test]
    fn title_shows_time_and_mode() {
        let (state, _) = setup();
        let i18n = I18n::default();
        assert_eq!(state.title(&i18n), format!("25:00 - {}", i18n.tr("mode-pomodoro")));
    }

    #[test]
    fn short_break_runs_to_completion_and_rings() {
        let (mut state, mut collector) = setup();
        state.handle_message(Message::Controls(controls::Message::SelectMode(
            Mode::ShortBreak,
        )));
        assert_eq!(state.clock().remaining(), Remaining::new(5, 0));
        assert_eq!(state.carousel().color(), Mode::ShortBreak.accent());

        state.handle_message(Message::Controls(controls::Message::Toggle));
        for _ in 0..300 {
            state.handle_message(Message::Tick);
        }

        assert!(state.clock().remaining().is_zero());
        assert!(!state.clock().is_running());
        assert!(state.is_alarm_ringing());

        collector.process_pending();
        assert!(collector.iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::CountdownCompleted { mode }
            } if mode == "short_break"
        )));
    }

    #[test]
    fn completion_plays_configured_number_of_chimes() {
        let (mut state, mut collector) = setup();
        state.handle_message(Message::Controls(controls::Message::SelectMode(
            Mode::ShortBreak,
        )));
        state.handle_message(Message::Controls(controls::Message::Toggle));
        for _ in 0..300 {
            state.handle_message(Message::Tick);
        }

        let id = state.alarm.live_id().expect("alarm started");
        let mut plays = 1;
        loop {
            state.handle_message(Message::Alarm(alarm::Message::PlaybackResolved {
                id,
                result: Ok(()),
            }));
            if !state.is_alarm_ringing() {
                break;
            }
            state.handle_message(Message::Alarm(alarm::Message::DelayElapsed { id }));
            plays += 1;
        }
        assert_eq!(plays, 5);

        collector.process_pending();
        assert!(collector.iter().any(|event| matches!(
            event.kind,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::AlarmFinished { repeats: 5 }
            }
        )));
    }

    #[test]
    fn playback_failure_is_logged_and_stops_the_alarm() {
        let (mut state, mut collector) = setup();
        state.handle_message(Message::Controls(controls::Message::RingBell));
        let id = state.alarm.live_id().expect("bell rings");

        state.handle_message(Message::Alarm(alarm::Message::PlaybackResolved {
            id,
            result: Err(Error::Audio("no device".into())),
        }));

        assert!(!state.is_alarm_ringing());
        collector.process_pending();
        assert!(collector
            .iter()
            .any(|event| matches!(&event.kind, DiagnosticEventKind::Error { message } if message.contains("no device"))));
    }

    #[test]
    fn starting_the_clock_silences_the_alarm() {
        let (mut state, _) = setup();
        state.handle_message(Message::Controls(controls::Message::RingBell));
        assert!(state.is_alarm_ringing());

        state.handle_message(Message::Controls(controls::Message::Toggle));
        assert!(!state.is_alarm_ringing());
    }

    #[test]
    fn mode_switch_keeps_images_but_resets_clock() {
        let (mut state, _) = setup();
        add_images(&mut state, &["a.png"]);
        state.handle_message(Message::Controls(controls::Message::Toggle));
        state.handle_message(Message::Tick);

        state.handle_message(Message::Controls(controls::Message::SelectMode(
            Mode::LongBreak,
        )));

        assert_eq!(state.clock().remaining(), Remaining::new(15, 0));
        assert!(!state.clock().is_running());
        assert_eq!(background_index(&state), Some(0));
        assert_eq!(state.carousel().color(), Mode::Pomodoro.accent());
    }

    #[test]
    fn countdown_subscription_follows_running_state() {
        let (mut state, _) = setup();
        assert_eq!(state.clock().countdown_schedule(), None);
        state.handle_message(Message::Controls(controls::Message::Toggle));
        assert_eq!(
            state.clock().countdown_schedule(),
            Some(Duration::from_secs(1))
        );
        state.handle_message(Message::Controls(controls::Message::Toggle));
        assert_eq!(state.clock().countdown_schedule(), None);
    }

    #[test]
    fn uploads_unlock_rotation_which_then_advances() {
        let (mut state, _) = setup();

        add_images(&mut state, &["first.png"]);
        assert!(!state.carousel().show_color_options());
        assert!(!state.carousel().can_rotate());

        add_images(&mut state, &["second.png"]);
        assert!(state.carousel().can_rotate());

        state.handle_message(Message::Panel(background_panel::Message::SetRotation(true)));
        assert!(state.carousel().rotation_schedule().is_some());
        assert_eq!(background_index(&state), Some(0));

        state.handle_message(Message::RotationTick);
        assert!(state.is_fading());
        finish_fade(&mut state);
        assert_eq!(background_index(&state), Some(1));
    }

    #[test]
    fn removing_while_rotating_leaves_one_image_and_no_rotation() {
        let (mut state, _) = setup();
        add_images(&mut state, &["a.png", "b.png"]);
        state.handle_message(Message::Panel(background_panel::Message::SetRotation(true)));

        state.handle_message(Message::Panel(background_panel::Message::RemoveImage(0)));
        finish_fade(&mut state);

        assert_eq!(state.carousel().images().len(), 1);
        assert_eq!(background_index(&state), Some(0));
        assert!(!state.carousel().rotation_enabled());
        assert!(state.carousel().show_color_options());
        assert_eq!(state.carousel().rotation_schedule(), None);
    }

    #[test]
    fn background_changes_wait_for_the_fade_out() {
        let (mut state, _) = setup();
        add_images(&mut state, &["a.png", "b.png"]);

        state.handle_message(Message::Panel(background_panel::Message::SelectImage(1)));
        assert!(state.is_fading());
        assert_eq!(background_index(&state), Some(0), "not applied before fade-out");

        finish_fade(&mut state);
        assert_eq!(background_index(&state), Some(1));
    }

    #[test]
    fn set_color_replaces_images_after_fade() {
        let (mut state, _) = setup();
        add_images(&mut state, &["a.png"]);
        let purple = Rgb::new(0xa7, 0x8b, 0xfa);

        state.handle_message(Message::Panel(background_panel::Message::SetColor(purple)));
        finish_fade(&mut state);

        assert!(matches!(
            state.carousel().background(),
            Background::SolidColor(color) if color == purple
        ));
        assert!(state.carousel().images().is_empty());
    }

    #[test]
    fn non_images_are_dropped_silently_and_broken_images_warn() {
        let (mut state, mut collector) = setup();
        state.handle_message(Message::ImagesLoaded {
            source: ImageSource::DragDrop,
            results: vec![
                ("notes.txt".to_string(), Err(ImageError::NotAnImage.into())),
                (
                    "broken.png".to_string(),
                    Err(ImageError::Decode("truncated".into()).into()),
                ),
            ],
        });

        assert!(!state.is_fading());
        assert!(state.carousel().images().is_empty());

        collector.process_pending();
        let warnings: Vec<_> = collector
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::Warning { message } => Some(message.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("broken.png"));
    }

    #[test]
    fn add_image_button_asks_for_the_dialog() {
        let (mut state, _) = setup();
        let (effect, _) =
            state.handle_message(Message::Panel(background_panel::Message::AddImages));
        assert_eq!(effect, Effect::OpenImageDialog);
    }

    #[test]
    fn interval_changes_are_logged_once_valid() {
        let (mut state, mut collector) = setup();
        state.handle_message(Message::Panel(background_panel::Message::IntervalInput(
            "abc".into(),
        )));
        state.handle_message(Message::Panel(background_panel::Message::IntervalInput(
            "8".into(),
        )));
        assert_eq!(state.carousel().interval().secs(), 8);

        collector.process_pending();
        let logged: Vec<_> = collector
            .iter()
            .filter(|event| {
                matches!(
                    event.kind,
                    DiagnosticEventKind::UserAction {
                        action: UserAction::SetRotationInterval { .. },
                        ..
                    }
                )
            })
            .collect();
        assert_eq!(logged.len(), 1);
    }

    #[test]
    fn view_renders() {
        let (mut state, _) = setup();
        let i18n = I18n::default();
        let _ = state.view(&i18n);

        add_images(&mut state, &["a.png", "b.png"]);
        state.handle_message(Message::Panel(background_panel::Message::SelectImage(1)));
        let _ = state.view(&i18n);
    }

    #[tokio::test(start_paused = true)]
    async fn scheduled_delays_elapse_on_the_runtime_clock() {
        let (state, _) = setup();
        let cases = [
            (transition::FADE_OUT, Duration::from_millis(300)),
            (transition::FADE_IN, Duration::from_millis(50)),
            (state.alarm.gap(), Duration::from_secs(1)),
        ];

        for (delay, expected) in cases {
            let start = tokio::time::Instant::now();
            let message = wait_then(delay, || {
                Message::Transition(transition::Message::FadeOutElapsed(7))
            })
            .await;
            // The paused clock jumps straight to the timer deadline.
            let elapsed = start.elapsed();
            assert!(elapsed >= expected, "{elapsed:?} < {expected:?}");
            assert!(elapsed < expected + Duration::from_millis(2));
            assert!(matches!(
                message,
                Message::Transition(transition::Message::FadeOutElapsed(7))
            ));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn message_is_not_built_before_the_delay() {
        let built = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let flag = Arc::clone(&built);
        let pending = wait_then(transition::FADE_OUT, move || {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
            Message::Tick
        });
        tokio::pin!(pending);

        let early = tokio::time::timeout(Duration::from_millis(299), pending.as_mut()).await;
        assert!(early.is_err());
        assert!(!built.load(std::sync::atomic::Ordering::SeqCst));

        assert!(matches!(pending.await, Message::Tick));
        assert!(built.load(std::sync::atomic::Ordering::SeqCst));
    }
}

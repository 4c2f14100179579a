// SPDX-License-Identifier: MPL-2.0
//! Player shell: composition root of the player widget.
//!
//! Holds the canonical playback state, forwards commands to the media
//! element, and routes every visual change through the [`Animator`].
//! Commands issued after the element was detached are ignored.

use super::{clock, controls, overlay, progress, volume, ViewContext};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{MediaElement, MediaEvent, MediaSource, Volume};
use crate::motion::{Animation, Animator, Easing, Property, Target};
use crate::ui::design_tokens::{opacity, spacing, typography};
use crate::ui::state::IdleTimeout;
use crate::ui::styles;
use crate::ui::widgets::ProgressTrack;
use iced::widget::{column, container, mouse_area, row, stack, text, tooltip, Space, Text};
use iced::{event, mouse, window, Alignment, Element, Event, Length, Padding, Subscription};
use std::time::{Duration, Instant};

/// Player entrance: wait, fade duration and starting downward offset.
pub const INTRO_DELAY_MS: u64 = 200;
pub const INTRO_MS: u64 = 800;
pub const INTRO_OFFSET_Y: f32 = 30.0;

/// Startup settings of a player.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub idle_timeout: IdleTimeout,
    pub initial_volume: Volume,
}

#[derive(Debug, Clone)]
pub enum Message {
    Media(MediaEvent),
    Controls(controls::Message),
    Progress(progress::Message),
    Volume(volume::Message),
    TogglePlay,
    /// Seek to a position in seconds.
    Seek(f64),
    SetVolume(f32),
    ToggleFullscreen,
    /// Completion of a window mode change.
    FullscreenChanged(Result<bool, Error>),
    PointerMoved,
    PointerLeft,
    IdleExpired(u64),
    AnimationFrame(Instant),
    /// Tear down: drop the element and its notifications.
    Detach,
}

/// Work the shell needs from the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Deliver `Message::IdleExpired(generation)` after `delay`.
    ArmIdleTimer { generation: u64, delay: Duration },
    /// Enter (`true`) or leave fullscreen.
    SetFullscreen(bool),
}

pub struct PlayerShell {
    source: MediaSource,
    element: Option<Box<dyn MediaElement>>,
    animator: Box<dyn Animator>,
    is_playing: bool,
    is_fullscreen: bool,
    clock: clock::State,
    progress: progress::State,
    volume: volume::State,
    overlay: overlay::State,
}

impl std::fmt::Debug for PlayerShell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayerShell")
            .field("source", &self.source)
            .field("attached", &self.element.is_some())
            .field("is_playing", &self.is_playing)
            .field("is_fullscreen", &self.is_fullscreen)
            .field("clock", &self.clock)
            .field("progress", &self.progress)
            .field("volume", &self.volume)
            .field("overlay", &self.overlay)
            .finish_non_exhaustive()
    }
}

impl PlayerShell {
    /// Mounts a player. Without an element every command is a no-op.
    pub fn new(
        source: MediaSource,
        mut element: Option<Box<dyn MediaElement>>,
        animator: Box<dyn Animator>,
        settings: Settings,
    ) -> Self {
        if let Some(element) = element.as_mut() {
            element.set_volume(settings.initial_volume.value());
        }
        let mut shell = Self {
            source,
            element,
            animator,
            is_playing: false,
            is_fullscreen: false,
            clock: clock::State::default(),
            progress: progress::State::default(),
            volume: volume::State::new(settings.initial_volume),
            overlay: overlay::State::new(settings.idle_timeout),
        };
        shell.settle();
        shell.animate_all(intro());
        shell.animate_all(overlay::center_play_intro());
        shell
    }

    /// Pins every animated property to its resting value so the first
    /// transitions have a known origin.
    fn settle(&mut self) {
        let rest = |target, property, value| Animation::to(target, property, value);
        for animation in [
            rest(Target::ProgressFill, Property::Width, 0.0),
            rest(Target::ProgressHandle, Property::Left, 0.0),
            rest(Target::PlayIcon, Property::Scale, 1.0),
            rest(Target::PlayIcon, Property::Opacity, 1.0),
            rest(Target::PauseIcon, Property::Scale, 0.0),
            rest(Target::PauseIcon, Property::Opacity, 0.0),
            rest(Target::CenterPlay, Property::Scale, 1.0),
            rest(Target::CenterPlay, Property::Opacity, 1.0),
            rest(Target::VolumeSlider, Property::Width, 0.0),
            rest(Target::VolumeSlider, Property::Opacity, 0.0),
            rest(Target::ControlsOverlay, Property::Opacity, 1.0),
        ] {
            self.animator.animate(animation);
        }
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Media(event) => self.on_media(event),
            Message::Controls(controls::Message::TogglePlay) | Message::TogglePlay => {
                self.toggle_play()
            }
            Message::Controls(controls::Message::ToggleFullscreen) | Message::ToggleFullscreen => {
                Effect::SetFullscreen(!self.is_fullscreen)
            }
            Message::Progress(message) => self.on_progress(message),
            Message::Volume(message) => self.on_volume(message),
            Message::Seek(secs) => {
                self.seek(secs);
                Effect::None
            }
            Message::SetVolume(level) => self.on_volume(volume::Message::SliderChanged(level)),
            Message::FullscreenChanged(Ok(fullscreen)) => {
                tracing::debug!(fullscreen, "window mode changed");
                self.is_fullscreen = fullscreen;
                Effect::None
            }
            Message::FullscreenChanged(Err(err)) => {
                tracing::warn!(error = %err, "fullscreen request failed");
                Effect::None
            }
            Message::PointerMoved => self.on_overlay(overlay::Message::PointerMoved),
            Message::PointerLeft => self.on_overlay(overlay::Message::PointerLeft),
            Message::IdleExpired(generation) => {
                self.on_overlay(overlay::Message::IdleExpired(generation))
            }
            Message::AnimationFrame(now) => {
                self.animator.tick(now);
                Effect::None
            }
            Message::Detach => {
                if self.element.take().is_some() {
                    tracing::debug!(source = %self.source.src, "media element detached");
                }
                self.progress.handle(progress::Message::PointerCancelled, 0.0);
                Effect::None
            }
        }
    }

    fn on_media(&mut self, event: MediaEvent) -> Effect {
        match self.clock.handle(event) {
            clock::Effect::TimeChanged | clock::Effect::DurationKnown => {
                self.follow_clock();
                Effect::None
            }
            clock::Effect::Ended => {
                tracing::debug!("playback ended");
                self.set_playing(false)
            }
            clock::Effect::None => Effect::None,
        }
    }

    fn toggle_play(&mut self) -> Effect {
        let Some(element) = self.element.as_mut() else {
            return Effect::None;
        };
        if self.is_playing {
            element.pause();
        } else {
            element.play();
        }
        self.set_playing(!self.is_playing)
    }

    fn set_playing(&mut self, playing: bool) -> Effect {
        let changed = self.is_playing != playing;
        self.is_playing = playing;
        if changed {
            self.animate_all(controls::morph(playing));
            self.animate_all(overlay::center_play_motion(!playing));
        }
        self.on_overlay(overlay::Message::PlaybackChanged(playing))
    }

    fn seek(&mut self, secs: f64) {
        let Some(element) = self.element.as_mut() else {
            return;
        };
        let target = self.clock.seek_to(secs);
        element.set_current_time(target);
        self.follow_clock();
    }

    /// Moves the fill to the clock unless a drag owns it.
    fn follow_clock(&mut self) {
        if !self.progress.is_dragging() {
            self.animate_all(progress::fill_animations(self.clock.fraction()));
        }
    }

    fn on_progress(&mut self, message: progress::Message) -> Effect {
        match self.progress.handle(message, self.clock.duration()) {
            progress::Effect::Preview(fraction) => {
                self.animate_all(progress::fill_animations(fraction));
            }
            progress::Effect::Seek(secs) => self.seek(secs),
            progress::Effect::Cancelled => self.follow_clock(),
            progress::Effect::None => {}
        }
        Effect::None
    }

    fn on_volume(&mut self, message: volume::Message) -> Effect {
        let changes_level = matches!(
            message,
            volume::Message::ToggleMute | volume::Message::SliderChanged(_)
        );
        if changes_level && self.element.is_none() {
            return Effect::None;
        }
        let effect = self.volume.handle(message);
        if let (volume::Effect::OutputChanged(level), Some(element)) =
            (effect, self.element.as_mut())
        {
            element.set_volume(level);
        }
        self.animate_all(volume::State::animations(effect));
        Effect::None
    }

    fn on_overlay(&mut self, message: overlay::Message) -> Effect {
        match self.overlay.handle(message, self.is_playing) {
            overlay::Effect::ArmTimer { generation, delay } => {
                Effect::ArmIdleTimer { generation, delay }
            }
            overlay::Effect::Revealed { generation, delay } => {
                self.animator.animate(overlay::controls_fade(true));
                Effect::ArmIdleTimer { generation, delay }
            }
            overlay::Effect::ControlsShown(visible) => {
                self.animator.animate(overlay::controls_fade(visible));
                Effect::None
            }
            overlay::Effect::None => Effect::None,
        }
    }

    fn animate_all(&mut self, animations: impl IntoIterator<Item = Animation>) {
        for animation in animations {
            self.animator.animate(animation);
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::with_capacity(3);
        if let Some(element) = &self.element {
            subscriptions.push(element.notifications().map(Message::Media));
        }
        if self.progress.is_dragging() {
            subscriptions.push(event::listen_with(capture_drag));
        }
        if self.animator.is_animating() {
            subscriptions.push(window::frames().map(Message::AnimationFrame));
        }
        Subscription::batch(subscriptions)
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let animator = self.animator.as_ref();
        let entrance = animator
            .value(Target::Player, Property::Opacity)
            .unwrap_or(opacity::OPAQUE)
            .clamp(0.0, 1.0);
        let offset_y = animator
            .value(Target::Player, Property::OffsetY)
            .unwrap_or(0.0)
            .max(0.0);
        let overlay_opacity = animator
            .value(Target::ControlsOverlay, Property::Opacity)
            .unwrap_or(if self.overlay.controls_visible() {
                opacity::OPAQUE
            } else {
                opacity::TRANSPARENT
            })
            .clamp(0.0, 1.0)
            * entrance;
        let ctx = ViewContext {
            i18n,
            animator,
            opacity: overlay_opacity,
        };

        #[allow(clippy::cast_possible_truncation)]
        let clock_percent = (self.clock.fraction() * 100.0) as f32;
        let track = ProgressTrack::new(
            animator
                .value(Target::ProgressFill, Property::Width)
                .unwrap_or(clock_percent),
            animator
                .value(Target::ProgressHandle, Property::Left)
                .unwrap_or(clock_percent),
        )
        .hover(self.progress.hover_fraction())
        .dragging(self.progress.is_dragging())
        .into_element()
        .map(Message::Progress);
        let track = tooltip(
            track,
            Text::new(i18n.tr("player-seek")),
            tooltip::Position::Top,
        )
        .gap(4);

        let playback = controls::PlaybackState {
            is_playing: self.is_playing,
            current_time: self.clock.current_time(),
            duration: self.clock.duration(),
            is_fullscreen: self.is_fullscreen,
        };
        let fullscreen = controls::fullscreen_button(&ctx, self.is_fullscreen).map(Message::Controls);
        let transport = controls::view(ctx, playback).map(Message::Controls);
        let volume_panel = volume::view(ctx, &self.volume).map(Message::Volume);

        let bottom_row = row![
            transport,
            Space::new().width(Length::Fill),
            volume_panel,
            fullscreen,
        ]
        .spacing(spacing::XS)
        .align_y(Alignment::Center);

        let controls_panel = container(column![track, bottom_row].spacing(spacing::XS))
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::controls_scrim(overlay_opacity));

        // The poster stands in for the first frame until playback starts.
        let started = self.is_playing || self.clock.current_time() > 0.0;
        let caption = match (&self.source.poster, started) {
            (Some(poster), false) => poster.as_str(),
            _ => self.source.src.as_str(),
        };
        let stage = mouse_area(
            container(text(caption).size(typography::BODY_SM))
                .center(Length::Fill)
                .style(styles::container::stage(entrance)),
        )
        .on_press(Message::TogglePlay);

        let center_play = container(overlay::center_play(
            animator,
            self.overlay.center_play_visible(),
            entrance,
            Message::TogglePlay,
        ))
        .center(Length::Fill);

        let layers = stack![
            stage,
            center_play,
            container(controls_panel)
                .align_bottom(Length::Fill)
                .width(Length::Fill),
        ];

        mouse_area(container(layers).padding(Padding::ZERO.top(offset_y)))
            .on_move(|_| Message::PointerMoved)
            .on_exit(Message::PointerLeft)
            .into()
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    #[must_use]
    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    #[must_use]
    pub fn clock(&self) -> &clock::State {
        &self.clock
    }

    #[must_use]
    pub fn progress(&self) -> &progress::State {
        &self.progress
    }

    #[must_use]
    pub fn volume(&self) -> &volume::State {
        &self.volume
    }

    #[must_use]
    pub fn overlay(&self) -> &overlay::State {
        &self.overlay
    }

    #[must_use]
    pub fn animator(&self) -> &dyn Animator {
        self.animator.as_ref()
    }
}

/// Entrance of the player when it mounts: rises and fades in.
#[must_use]
pub fn intro() -> [Animation; 2] {
    [
        Animation::to(Target::Player, Property::Opacity, opacity::OPAQUE)
            .from(opacity::TRANSPARENT)
            .after_millis(INTRO_DELAY_MS)
            .over_millis(INTRO_MS)
            .ease(Easing::Power3Out),
        Animation::to(Target::Player, Property::OffsetY, 0.0)
            .from(INTRO_OFFSET_Y)
            .after_millis(INTRO_DELAY_MS)
            .over_millis(INTRO_MS)
            .ease(Easing::Power3Out),
    ]
}

/// Window-level pointer capture while a seek drag is active.
fn capture_drag(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    let message = match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            progress::Message::PointerMoved { x: position.x }
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            progress::Message::PointerUp { x: None }
        }
        Event::Mouse(mouse::Event::CursorLeft) | Event::Window(window::Event::Unfocused) => {
            progress::Message::PointerCancelled
        }
        _ => return None,
    };
    Some(Message::Progress(message))
}

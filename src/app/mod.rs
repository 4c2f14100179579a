// SPDX-License-Identifier: MPL-2.0
//! Application root that wires the player into an Iced window.
//!
//! The [`App`] owns the localisation bundle and a single
//! [`PlayerShell`]. Everything the player needs from the runtime (idle
//! timers, window mode) comes back from `PlayerShell::handle` as an effect
//! and is turned into a [`Task`] here.

mod message;
mod subscription;
mod update;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::media::{MediaElement, MediaSource};
use crate::motion::Tweener;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::player::{shell, PlayerShell};
use crate::ui::styles;
use iced::widget::{column, container, text};
use iced::{window, Element, Length, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// DOM id of the `<video>` element the web build drives.
#[cfg(target_arch = "wasm32")]
pub const VIDEO_ELEMENT_ID: &str = "iced-reel-video";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    shell: PlayerShell,
    window_id: Option<window::Id>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("shell", &self.shell)
            .field("window_id", &self.window_id)
            .finish()
    }
}

#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            config,
            source,
            poster,
        } = flags;
        let i18n = I18n::new(lang, &config);

        let source = MediaSource::new(source.unwrap_or_else(|| config.source().to_string()))
            .with_poster(poster.unwrap_or_else(|| config.poster().to_string()));
        tracing::info!(src = %source.src, locale = %i18n.current_locale(), "starting player");

        let element = attach_element(&source, &config);
        let shell = PlayerShell::new(
            source,
            element,
            Box::new(Tweener::new()),
            shell::Settings {
                idle_timeout: config.idle_timeout(),
                initial_volume: config.initial_volume(),
            },
        );

        (
            Self {
                i18n,
                shell,
                window_id: None,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(&self.shell)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Player(message) => {
                let effect = self.shell.handle(message);
                update::run_effect(effect, self.window_id)
            }
            Message::WindowOpened(id) => {
                self.window_id.get_or_insert(id);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let player = container(self.shell.view(&self.i18n).map(Message::Player))
            .max_width(sizing::PLAYER_MAX_WIDTH)
            .width(Length::Fill)
            .height(Length::Fill);

        // Fullscreen gives the whole window to the player.
        let content: Element<'_, Message> = if self.shell.is_fullscreen() {
            player.into()
        } else {
            column![
                text(self.i18n.tr("player-heading")).size(typography::TITLE_LG),
                player,
            ]
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .align_x(iced::Alignment::Center)
            .into()
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .style(styles::container::page)
            .into()
    }

    #[must_use]
    pub fn shell(&self) -> &PlayerShell {
        &self.shell
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn attach_element(source: &MediaSource, config: &Config) -> Option<Box<dyn MediaElement>> {
    use crate::media::timeline::TimelineElement;

    Some(Box::new(TimelineElement::new(
        source.clone(),
        config.preview_duration_secs(),
    )))
}

#[cfg(target_arch = "wasm32")]
fn attach_element(_source: &MediaSource, _config: &Config) -> Option<Box<dyn MediaElement>> {
    use crate::media::web::WebVideoElement;

    match WebVideoElement::from_element_id(VIDEO_ELEMENT_ID) {
        Ok(element) => Some(Box::new(element)),
        Err(err) => {
            tracing::error!(error = %err, "player mounted without a media element");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        });
        app
    }

    #[test]
    fn new_mounts_configured_source() {
        let app = app();
        assert!(app.shell().is_attached());
        assert_eq!(app.shell().source().src, crate::config::DEFAULT_SOURCE);
        assert_eq!(
            app.shell().source().poster.as_deref(),
            Some(crate::config::DEFAULT_POSTER)
        );
    }

    #[test]
    fn cli_source_overrides_config() {
        let (app, _task) = App::new(Flags {
            source: Some("file:///tmp/clip.mp4".to_string()),
            config: Config {
                source: Some("https://example.com/ignored.mp4".to_string()),
                ..Config::default()
            },
            ..Flags::default()
        });
        assert_eq!(app.shell().source().src, "file:///tmp/clip.mp4");
    }

    #[test]
    fn title_is_localised() {
        assert_eq!(app().title(), "Iced Reel");
    }

    #[test]
    fn window_id_is_kept_from_first_open() {
        let mut app = app();
        let first = window::Id::unique();
        let _ = app.update(Message::WindowOpened(first));
        let _ = app.update(Message::WindowOpened(window::Id::unique()));
        assert_eq!(app.window_id, Some(first));
    }

    #[test]
    fn player_messages_reach_the_shell() {
        let mut app = app();
        let _ = app.update(Message::Player(shell::Message::TogglePlay));
        assert!(app.shell().is_playing());
    }

    #[test]
    fn view_renders_windowed_and_fullscreen() {
        let mut app = app();
        let _windowed = app.view();
        let _ = app.update(Message::Player(shell::Message::FullscreenChanged(Ok(true))));
        let _fullscreen = app.view();
    }

    #[test]
    fn window_settings_respect_minimum() {
        let settings = window_settings();
        let min = settings.min_size.unwrap();
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}

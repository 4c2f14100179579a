// SPDX-License-Identifier: MPL-2.0
//! Integration tests driving the player shell end to end.
//!
//! The shell is mounted on a mock element that records native calls, or on
//! the wall-clock timeline element whose notifications are pulsed by hand.

use approx::assert_abs_diff_eq;
use iced::Subscription;
use iced_reel::media::timeline::TimelineElement;
use iced_reel::media::{MediaElement, MediaEvent, MediaSource, Volume};
use iced_reel::motion::{Animation, Animator, Property, Target};
use iced_reel::ui::player::shell::{Effect, Message, Settings};
use iced_reel::ui::player::{volume, PlayerShell};
use iced_reel::ui::state::IdleTimeout;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct Log {
    plays: usize,
    pauses: usize,
    volumes: Vec<f32>,
}

struct MockElement(Rc<RefCell<Log>>);

impl MediaElement for MockElement {
    fn play(&mut self) {
        self.0.borrow_mut().plays += 1;
    }

    fn pause(&mut self) {
        self.0.borrow_mut().pauses += 1;
    }

    fn current_time(&self) -> f64 {
        0.0
    }

    fn set_current_time(&mut self, _secs: f64) {}

    fn duration(&self) -> f64 {
        0.0
    }

    fn set_volume(&mut self, volume: f32) {
        self.0.borrow_mut().volumes.push(volume);
    }

    fn notifications(&self) -> Subscription<MediaEvent> {
        Subscription::none()
    }
}

/// Applies every request instantly.
#[derive(Default)]
struct InstantAnimator {
    values: Vec<Animation>,
}

impl Animator for InstantAnimator {
    fn animate(&mut self, animation: Animation) {
        self.values.push(animation);
    }

    fn value(&self, target: Target, property: Property) -> Option<f32> {
        self.values
            .iter()
            .rev()
            .find(|a| a.target == target && a.property == property)
            .map(|a| a.to)
    }

    fn tick(&mut self, _now: Instant) {}

    fn is_animating(&self) -> bool {
        false
    }
}

fn mock_shell(settings: Settings) -> (PlayerShell, Rc<RefCell<Log>>) {
    let log = Rc::new(RefCell::new(Log::default()));
    let shell = PlayerShell::new(
        MediaSource::new("clip.mp4").with_poster("clip.jpg"),
        Some(Box::new(MockElement(Rc::clone(&log)))),
        Box::new(InstantAnimator::default()),
        settings,
    );
    (shell, log)
}

#[test]
fn playback_scenario_from_mount_to_end() {
    let (mut shell, log) = mock_shell(Settings::default());
    assert_abs_diff_eq!(shell.clock().duration(), 0.0);
    assert_abs_diff_eq!(shell.clock().fraction(), 0.0);

    shell.handle(Message::TogglePlay);
    assert!(shell.is_playing());
    assert_eq!(log.borrow().plays, 1);

    shell.handle(Message::Media(MediaEvent::MetadataReady { duration: 596.5 }));
    assert_abs_diff_eq!(shell.clock().duration(), 596.5);

    shell.handle(Message::Media(MediaEvent::TimeAdvanced(119.3)));
    assert_abs_diff_eq!(shell.clock().current_time(), 119.3);
    assert_abs_diff_eq!(shell.clock().fraction(), 0.2, epsilon = 1e-9);
    let fill = shell
        .animator()
        .value(Target::ProgressFill, Property::Width)
        .unwrap();
    assert_abs_diff_eq!(fill, 20.0, epsilon = 1e-3);

    shell.handle(Message::Media(MediaEvent::Ended));
    assert!(!shell.is_playing());
    assert_eq!(log.borrow().pauses, 0);
}

#[test]
fn volume_survives_mute_round_trip() {
    let (mut shell, log) = mock_shell(Settings {
        initial_volume: Volume::new(0.5),
        ..Settings::default()
    });
    shell.handle(Message::SetVolume(0.7));
    shell.handle(Message::Volume(volume::Message::ToggleMute));
    assert!(shell.volume().is_muted());
    shell.handle(Message::Volume(volume::Message::ToggleMute));

    assert!(!shell.volume().is_muted());
    assert_abs_diff_eq!(shell.volume().volume().value(), 0.7);
    assert_eq!(log.borrow().volumes, vec![0.5, 0.7, 0.0, 0.7]);
}

#[test]
fn controls_hide_only_after_latest_idle_timer() {
    let (mut shell, _log) = mock_shell(Settings {
        idle_timeout: IdleTimeout::new(5),
        ..Settings::default()
    });
    shell.handle(Message::TogglePlay);

    let Effect::ArmIdleTimer { generation: stale, delay } = shell.handle(Message::PointerMoved)
    else {
        panic!("pointer movement should arm the idle timer");
    };
    assert_eq!(delay, Duration::from_secs(5));
    let Effect::ArmIdleTimer { generation: latest, .. } = shell.handle(Message::PointerMoved)
    else {
        panic!("pointer movement should re-arm the idle timer");
    };

    shell.handle(Message::IdleExpired(stale));
    assert!(shell.overlay().controls_visible());
    shell.handle(Message::IdleExpired(latest));
    assert!(!shell.overlay().controls_visible());

    shell.handle(Message::TogglePlay);
    assert!(shell.overlay().controls_visible());
}

#[test]
fn timeline_element_drives_the_shell() {
    let timeline = TimelineElement::new(MediaSource::new("clip.mp4"), 4.0);
    let observer = timeline.clone();
    let mut shell = PlayerShell::new(
        MediaSource::new("clip.mp4"),
        Some(Box::new(timeline)),
        Box::new(InstantAnimator::default()),
        Settings::default(),
    );
    shell.handle(Message::Media(MediaEvent::MetadataReady {
        duration: observer.duration(),
    }));

    shell.handle(Message::TogglePlay);
    assert!(observer.is_playing());

    for event in observer.pulse(Instant::now() + Duration::from_secs(10)) {
        shell.handle(Message::Media(event));
    }
    assert!(!shell.is_playing());
    assert_abs_diff_eq!(shell.clock().current_time(), 4.0);
    assert_abs_diff_eq!(shell.clock().fraction(), 1.0);

    shell.handle(Message::Seek(1.5));
    assert_abs_diff_eq!(observer.current_time(), 1.5);
}

#[test]
fn torn_down_player_ignores_commands() {
    let (mut shell, log) = mock_shell(Settings::default());
    shell.handle(Message::Detach);
    shell.handle(Message::TogglePlay);
    shell.handle(Message::SetVolume(0.1));
    assert!(!shell.is_playing());
    assert_eq!(log.borrow().plays, 0);
    assert_eq!(log.borrow().volumes, vec![1.0]);
}

// SPDX-License-Identifier: MPL-2.0
//! Wall-clock media element for hosts without a native video element.
//!
//! Nothing is decoded: the element keeps a playback position that advances
//! with real time while playing and raises the same notifications a browser
//! `<video>` would (`loadedmetadata` once, `timeupdate` every 250 ms while
//! playing, `ended` at the end).

use super::{next_session_id, MediaElement, MediaEvent, MediaSource};
use crate::config::TIME_UPDATE_INTERVAL_MS;
use iced::futures::SinkExt;
use iced::{stream, Subscription};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Timeline {
    duration: f64,
    /// Position at `anchor` (or the frozen position when paused).
    position: f64,
    /// Set while playing: the instant `position` was last rebased.
    anchor: Option<Instant>,
    volume: f32,
}

impl Timeline {
    fn position_at(&self, now: Instant) -> f64 {
        let advanced = self
            .anchor
            .map_or(0.0, |anchor| now.saturating_duration_since(anchor).as_secs_f64());
        (self.position + advanced).min(self.duration)
    }

    fn rebase(&mut self, now: Instant) {
        self.position = self.position_at(now);
        if self.anchor.is_some() {
            self.anchor = Some(now);
        }
    }

    /// Notifications due at `now`; stops the clock at the end.
    fn pulse(&mut self, now: Instant) -> Vec<MediaEvent> {
        if self.anchor.is_none() {
            return Vec::new();
        }
        self.rebase(now);
        if self.position >= self.duration {
            self.anchor = None;
            vec![MediaEvent::TimeAdvanced(self.duration), MediaEvent::Ended]
        } else {
            vec![MediaEvent::TimeAdvanced(self.position)]
        }
    }
}

/// Cloneable handle; clones drive the same timeline.
#[derive(Debug, Clone)]
pub struct TimelineElement {
    source: MediaSource,
    session: u64,
    inner: Arc<Mutex<Timeline>>,
}

impl TimelineElement {
    #[must_use]
    pub fn new(source: MediaSource, duration_secs: f64) -> Self {
        let duration = if duration_secs.is_finite() {
            duration_secs.max(0.0)
        } else {
            0.0
        };
        Self {
            source,
            session: next_session_id(),
            inner: Arc::new(Mutex::new(Timeline {
                duration,
                position: 0.0,
                anchor: None,
                volume: crate::config::DEFAULT_VOLUME,
            })),
        }
    }

    #[must_use]
    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.lock().anchor.is_some()
    }

    #[must_use]
    pub fn volume(&self) -> f32 {
        self.lock().volume
    }

    /// Computes the notifications due at `now`.
    ///
    /// The notification subscription calls this on every time-update pulse.
    pub fn pulse(&self, now: Instant) -> Vec<MediaEvent> {
        self.lock().pulse(now)
    }

    fn lock(&self) -> MutexGuard<'_, Timeline> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MediaElement for TimelineElement {
    fn play(&mut self) {
        let now = Instant::now();
        let mut timeline = self.lock();
        if timeline.anchor.is_none() {
            // Restart from the top once the end was reached.
            if timeline.position >= timeline.duration {
                timeline.position = 0.0;
            }
            timeline.anchor = Some(now);
        }
    }

    fn pause(&mut self) {
        let now = Instant::now();
        let mut timeline = self.lock();
        timeline.rebase(now);
        timeline.anchor = None;
    }

    fn current_time(&self) -> f64 {
        self.lock().position_at(Instant::now())
    }

    fn set_current_time(&mut self, secs: f64) {
        let now = Instant::now();
        let mut timeline = self.lock();
        timeline.position = secs.clamp(0.0, timeline.duration);
        if timeline.anchor.is_some() {
            timeline.anchor = Some(now);
        }
    }

    fn duration(&self) -> f64 {
        self.lock().duration
    }

    fn set_volume(&mut self, volume: f32) {
        self.lock().volume = volume.clamp(0.0, 1.0);
    }

    fn notifications(&self) -> Subscription<MediaEvent> {
        let element = self.clone();
        Subscription::run_with_id(
            self.session,
            stream::channel(16, move |mut output| async move {
                let duration = element.duration();
                if output
                    .send(MediaEvent::MetadataReady { duration })
                    .await
                    .is_err()
                {
                    return;
                }

                let mut interval =
                    tokio::time::interval(Duration::from_millis(TIME_UPDATE_INTERVAL_MS));
                loop {
                    interval.tick().await;
                    for event in element.pulse(Instant::now()) {
                        if output.send(event).await.is_err() {
                            return;
                        }
                    }
                }
            }),
        )
    }
}

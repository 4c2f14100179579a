// SPDX-License-Identifier: MPL-2.0
//! Media element port.
//!
//! The player never decodes anything. It drives a host media element through
//! the [`MediaElement`] trait and learns about playback exclusively from the
//! element's notifications ([`MediaEvent`]).
//!
//! Adapters:
//! - [`timeline::TimelineElement`]: wall-clock stand-in for native builds
//! - `web::WebVideoElement`: the browser's `<video>` element (wasm32 only)

#[cfg(not(target_arch = "wasm32"))]
pub mod timeline;
mod volume;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use volume::Volume;

use iced::Subscription;
use std::sync::atomic::{AtomicU64, Ordering};

/// Notification raised by a media element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback position advanced (seconds).
    TimeAdvanced(f64),
    /// Metadata loaded; the duration is now known (seconds).
    MetadataReady { duration: f64 },
    /// Playback reached the end of the media.
    Ended,
}

/// Opaque media locations supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    pub src: String,
    pub poster: Option<String>,
}

impl MediaSource {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            poster: None,
        }
    }

    #[must_use]
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }
}

/// Port to the host's media playback primitive.
///
/// Setters are fire-and-forget; the element reports their consequences
/// through [`MediaElement::notifications`].
pub trait MediaElement {
    fn play(&mut self);

    fn pause(&mut self);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Moves the playback position (seconds).
    fn set_current_time(&mut self, secs: f64);

    /// Duration in seconds; `0.0` until metadata has loaded.
    fn duration(&self) -> f64;

    /// Output volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);

    /// Stream of time-advanced, metadata-ready and ended notifications.
    ///
    /// Dropping the subscription unsubscribes from all three at once.
    fn notifications(&self) -> Subscription<MediaEvent>;
}

/// Allocates a process-unique id for a notification subscription.
pub(crate) fn next_session_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn MediaElement) {}

    #[test]
    fn session_ids_are_unique() {
        let a = next_session_id();
        let b = next_session_id();
        assert_ne!(a, b);
    }

    #[test]
    fn media_source_builder_sets_poster() {
        let source = MediaSource::new("clip.mp4").with_poster("clip.jpg");
        assert_eq!(source.src, "clip.mp4");
        assert_eq!(source.poster.as_deref(), Some("clip.jpg"));
    }
}

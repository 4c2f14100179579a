// SPDX-License-Identifier: MPL-2.0
//! Browser `<video>` element adapter.
//!
//! DOM events are forwarded through an unbounded channel into an Iced
//! subscription. The three listeners are registered together in
//! [`WebVideoElement::new`] and removed together on drop.

use super::{next_session_id, MediaElement, MediaEvent};
use crate::error::{Error, Result};
use iced::futures::channel::mpsc;
use iced::futures::{SinkExt, StreamExt};
use iced::{stream, Subscription};
use std::sync::{Arc, Mutex, PoisonError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlVideoElement};

type Listener = Closure<dyn FnMut(Event)>;

pub struct WebVideoElement {
    video: HtmlVideoElement,
    session: u64,
    listeners: Vec<(&'static str, Listener)>,
    receiver: Arc<Mutex<Option<mpsc::UnboundedReceiver<MediaEvent>>>>,
}

impl std::fmt::Debug for WebVideoElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebVideoElement")
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WebVideoElement {
    /// Wraps the `<video>` element with the given DOM id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Media`] if there is no document or the id does not
    /// name a video element.
    pub fn from_element_id(id: &str) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| Error::Media("No document available".to_string()))?;
        let video = document
            .get_element_by_id(id)
            .ok_or_else(|| Error::Media(format!("No element with id '{id}'")))?
            .dyn_into::<HtmlVideoElement>()
            .map_err(|_| Error::Media(format!("Element '{id}' is not a video")))?;
        Self::new(video)
    }

    /// Subscribes to `timeupdate`, `loadedmetadata` and `ended`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Media`] if the DOM refuses a listener.
    pub fn new(video: HtmlVideoElement) -> Result<Self> {
        let (sender, receiver) = mpsc::unbounded();
        let mut element = Self {
            video,
            session: next_session_id(),
            listeners: Vec::with_capacity(3),
            receiver: Arc::new(Mutex::new(Some(receiver))),
        };

        element.listen("timeupdate", sender.clone(), |video| {
            MediaEvent::TimeAdvanced(video.current_time())
        })?;
        element.listen("loadedmetadata", sender.clone(), |video| {
            MediaEvent::MetadataReady {
                duration: video.duration(),
            }
        })?;
        element.listen("ended", sender, |_| MediaEvent::Ended)?;

        Ok(element)
    }

    fn listen(
        &mut self,
        name: &'static str,
        sender: mpsc::UnboundedSender<MediaEvent>,
        to_event: fn(&HtmlVideoElement) -> MediaEvent,
    ) -> Result<()> {
        let video = self.video.clone();
        let listener: Listener = Closure::new(move |_event: Event| {
            let _ = sender.unbounded_send(to_event(&video));
        });
        self.video
            .add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            .map_err(|e| Error::Media(format!("Failed to listen to '{name}': {e:?}")))?;
        self.listeners.push((name, listener));
        Ok(())
    }
}

impl Drop for WebVideoElement {
    fn drop(&mut self) {
        for (name, listener) in self.listeners.drain(..) {
            let _ = self
                .video
                .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref());
        }
    }
}

impl MediaElement for WebVideoElement {
    fn play(&mut self) {
        // The returned promise rejects when autoplay policy blocks playback;
        // the element simply stays paused.
        if let Err(err) = self.video.play() {
            tracing::warn!(error = ?err, "video element refused to play");
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.video.pause() {
            tracing::warn!(error = ?err, "video element refused to pause");
        }
    }

    fn current_time(&self) -> f64 {
        self.video.current_time()
    }

    fn set_current_time(&mut self, secs: f64) {
        self.video.set_current_time(secs);
    }

    fn duration(&self) -> f64 {
        let duration = self.video.duration();
        if duration.is_finite() {
            duration
        } else {
            0.0
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.video.set_volume(f64::from(volume));
    }

    fn notifications(&self) -> Subscription<MediaEvent> {
        let receiver = Arc::clone(&self.receiver);
        Subscription::run_with_id(
            self.session,
            stream::channel(16, move |mut output| async move {
                let taken = receiver
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .take();
                let Some(mut events) = taken else {
                    return;
                };
                while let Some(event) = events.next().await {
                    if output.send(event).await.is_err() {
                        return;
                    }
                }
            }),
        )
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Turns player effects into runtime tasks.

use super::Message;
use crate::error::Error;
use crate::ui::player::shell::{self, Effect};
use iced::{window, Task};
use std::time::Duration;

pub(super) fn run_effect(effect: Effect, window_id: Option<window::Id>) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::ArmIdleTimer { generation, delay } => Task::perform(sleep(delay), move |()| {
            Message::Player(shell::Message::IdleExpired(generation))
        }),
        Effect::SetFullscreen(fullscreen) => update_fullscreen_mode(window_id, fullscreen),
    }
}

/// Requests the window mode and reports completion back to the player.
fn update_fullscreen_mode(window_id: Option<window::Id>, fullscreen: bool) -> Task<Message> {
    let Some(id) = window_id else {
        return Task::done(Message::Player(shell::Message::FullscreenChanged(Err(
            Error::Fullscreen("window not open yet".to_string()),
        ))));
    };
    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(id, mode).chain(Task::done(Message::Player(
        shell::Message::FullscreenChanged(Ok(fullscreen)),
    )))
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let Some(window) = web_sys::window() else {
            tracing::warn!("no window for the idle timer");
            return;
        };
        if let Err(err) =
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        {
            tracing::warn!(?err, "failed to schedule the idle timer");
        }
    });
    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
        tracing::warn!(?err, "idle timer rejected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_effect_yields_no_task() {
        assert_eq!(run_effect(Effect::None, None).units(), 0);
    }

    #[test]
    fn fullscreen_without_window_still_completes() {
        let task = run_effect(Effect::SetFullscreen(true), None);
        assert_eq!(task.units(), 1);
    }

    #[tokio::test]
    async fn timer_waits_for_the_delay() {
        let start = std::time::Instant::now();
        sleep(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}

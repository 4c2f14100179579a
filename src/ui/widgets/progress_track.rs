// SPDX-License-Identifier: MPL-2.0
//! Seek track widget drawn on a Canvas.
//!
//! Reports presses and hover in window coordinates together with the
//! track's own bounds, so the progress component can turn any later pointer
//! position into a fraction without asking for layout again.

use crate::ui::design_tokens::{opacity, palette, radius, sizing};
use crate::ui::player::progress::Message;
use crate::ui::state::TrackBounds;
use iced::widget::canvas::{self, Action, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Snapshot of everything the track draws.
#[derive(Debug, Clone, Copy)]
pub struct ProgressTrack {
    /// Played part, in percent of the track width.
    fill_percent: f32,
    /// Handle centre, in percent of the track width.
    handle_percent: f32,
    hover: Option<f64>,
    dragging: bool,
}

impl ProgressTrack {
    #[must_use]
    pub fn new(fill_percent: f32, handle_percent: f32) -> Self {
        Self {
            fill_percent: fill_percent.clamp(0.0, 100.0),
            handle_percent: handle_percent.clamp(0.0, 100.0),
            hover: None,
            dragging: false,
        }
    }

    #[must_use]
    pub fn hover(mut self, hover: Option<f64>) -> Self {
        self.hover = hover;
        self
    }

    #[must_use]
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    pub fn into_element<'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TRACK_HIT_HEIGHT))
            .into()
    }
}

/// Pointer-over flag kept by the canvas between events.
#[derive(Debug, Default)]
pub struct Hover {
    inside: bool,
}

fn track_of(bounds: Rectangle) -> TrackBounds {
    TrackBounds::new(bounds.x, bounds.width)
}

impl canvas::Program<Message> for ProgressTrack {
    type State = Hover;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                Some(
                    Action::publish(Message::PointerDown {
                        x: position.x,
                        track: track_of(bounds),
                    })
                    .and_capture(),
                )
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_over(bounds) {
                    Some(position) => {
                        state.inside = true;
                        Some(Action::publish(Message::Hovered {
                            x: position.x,
                            track: track_of(bounds),
                        }))
                    }
                    None if state.inside => {
                        state.inside = false;
                        Some(Action::publish(Message::HoverLeft))
                    }
                    None => None,
                }
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.inside => {
                state.inside = false;
                Some(Action::publish(Message::HoverLeft))
            }
            _ => None,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let width = bounds.width;
        let top = (bounds.height - sizing::TRACK_HEIGHT) / 2.0;
        let bar = |fraction: f32| {
            Path::rounded_rectangle(
                Point::new(0.0, top),
                Size::new(width * fraction, sizing::TRACK_HEIGHT),
                radius::FULL.min(sizing::TRACK_HEIGHT / 2.0).into(),
            )
        };

        frame.fill(&bar(1.0), palette::GRAY_700);

        if let Some(hover) = self.hover {
            frame.fill(
                &bar(hover.clamp(0.0, 1.0) as f32),
                Color {
                    a: opacity::HOVER_PREVIEW,
                    ..palette::PRIMARY_300
                },
            );
        }

        frame.fill(&bar(self.fill_percent / 100.0), palette::PRIMARY_500);

        if state.inside || self.dragging {
            let centre = Point::new(
                width * self.handle_percent / 100.0,
                bounds.height / 2.0,
            );
            frame.fill(
                &Path::circle(centre, sizing::TRACK_HANDLE / 2.0),
                palette::PRIMARY_500,
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging || cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_are_clamped() {
        let track = ProgressTrack::new(140.0, -3.0);
        assert_eq!(track.fill_percent, 100.0);
        assert_eq!(track.handle_percent, 0.0);
    }

    #[test]
    fn track_bounds_follow_layout() {
        let bounds = Rectangle::new(Point::new(24.0, 300.0), Size::new(400.0, 20.0));
        assert_eq!(track_of(bounds), TrackBounds::new(24.0, 400.0));
    }

    #[test]
    fn builds_element() {
        let _element = ProgressTrack::new(25.0, 25.0)
            .hover(Some(0.5))
            .dragging(true)
            .into_element();
    }
}

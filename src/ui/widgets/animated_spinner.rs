// SPDX-License-Identifier: MPL-2.0
//! Rotating arc shown while an upload is read or a transform runs.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Radians per second.
pub const ROTATION_SPEED: f32 = TAU;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;

/// Advances `rotation` by `elapsed`, wrapped to one turn.
#[must_use]
pub fn advance(rotation: f32, elapsed: Duration) -> f32 {
    (rotation + ROTATION_SPEED * elapsed.as_secs_f32()).rem_euclid(TAU)
}

pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Half-turn arc starting at the top, rotated by the current angle.
    fn arc(&self, center: Point, radius: f32) -> Path {
        let start = self.rotation - PI / 2.0;
        Path::new(|builder| {
            builder.move_to(point_on_circle(center, radius, start));
            for i in 1..=ARC_SEGMENTS {
                let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                builder.line_to(point_on_circle(center, radius, start + PI * t));
            }
        })
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0).max(1.0);

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
        );
        frame.stroke(
            &self.arc(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_is_one_turn() {
        let rotation = advance(0.25, Duration::from_secs(1));
        assert!((rotation - 0.25).abs() < 1e-4);
    }

    #[test]
    fn rotation_stays_within_a_turn() {
        let mut rotation = 0.0;
        for _ in 0..100 {
            rotation = advance(rotation, Duration::from_millis(370));
            assert!((0.0..TAU).contains(&rotation));
        }
    }

    #[test]
    fn points_lie_on_the_circle() {
        let center = Point::new(10.0, 10.0);
        let top = point_on_circle(center, 5.0, -PI / 2.0);
        assert!((top.x - 10.0).abs() < 1e-5);
        assert!((top.y - 5.0).abs() < 1e-5);
    }
}

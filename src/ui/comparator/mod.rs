// SPDX-License-Identifier: MPL-2.0
//! Before/after comparator widget.
//!
//! Both images are laid out in the same rectangle: the original's
//! `ContentFit::Contain` frame inside the widget bounds. The result covers
//! the left part of that frame up to the split, the original shows through
//! on the right. Dragging anywhere on the widget moves the split; the drag
//! keeps tracking outside the widget until the button is released.
//!
//! The split fraction is widget-local state. It is reset to
//! [`slider::DEFAULT_FRACTION`] whenever the [`ComparisonKey`] changes: a new
//! pair of images or a new mount of the comparator.

pub mod slider;

use crate::domain::{Dimensions, ImageId};
use crate::ui::design_tokens::{comparator as tokens, spacing, typography};
use crate::ui::theming::OverlayColors;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::image::Handle;
use iced::widget::Action;
use iced::{mouse, touch, window, Element, Length, Pixels, Point, Rectangle, Size, Theme};
use slider::{Slider, Track};

/// Identity of what the comparator is currently showing.
///
/// `mount` is bumped by the owner each time the comparator is brought back
/// on screen, so the split always starts centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonKey {
    pub before: ImageId,
    pub after: ImageId,
    pub mount: u64,
}

/// Widget-local comparator state, owned by the canvas.
#[derive(Debug, Default)]
pub struct ComparatorState {
    subject: Option<ComparisonKey>,
    slider: Slider,
}

impl ComparatorState {
    /// Split fraction to use for `key`: the tracked one, or the default for
    /// a subject that has not been seen yet.
    #[must_use]
    pub fn fraction_for(&self, key: ComparisonKey) -> f32 {
        if self.subject == Some(key) {
            self.slider.fraction()
        } else {
            slider::DEFAULT_FRACTION
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.slider.is_dragging()
    }

    fn sync(&mut self, key: ComparisonKey) {
        if self.subject != Some(key) {
            self.subject = Some(key);
            self.slider = Slider::default();
        }
    }
}

/// Canvas program drawing one before/after pair.
#[derive(Debug, Clone)]
pub struct Comparator {
    key: ComparisonKey,
    before: Handle,
    after: Handle,
    dimensions: Dimensions,
    before_label: String,
    after_label: String,
}

impl Comparator {
    /// `dimensions` are the original's; the result is stretched to the same
    /// frame.
    #[must_use]
    pub fn new(
        key: ComparisonKey,
        before: Handle,
        after: Handle,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            key,
            before,
            after,
            dimensions,
            before_label: String::new(),
            after_label: String::new(),
        }
    }

    #[must_use]
    pub fn labels(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_label = before.into();
        self.after_label = after.into();
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn track(&self, bounds: Rectangle) -> Track {
        let fit = fit_rect(self.dimensions, bounds.size());
        Track::new(bounds.x + fit.x, fit.width)
    }
}

/// `ContentFit::Contain` placement of an image inside `area`, relative to
/// the area's top-left corner.
#[must_use]
pub fn fit_rect(image: Dimensions, area: Size) -> Rectangle {
    if area.width <= 0.0 || area.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, Size::ZERO);
    }

    let image_aspect = image.aspect_ratio();
    let area_aspect = area.width / area.height;

    if image_aspect > area_aspect {
        let height = area.width / image_aspect;
        Rectangle::new(
            Point::new(0.0, (area.height - height) / 2.0),
            Size::new(area.width, height),
        )
    } else {
        let width = area.height * image_aspect;
        Rectangle::new(
            Point::new((area.width - width) / 2.0, 0.0),
            Size::new(width, area.height),
        )
    }
}

impl<Message> canvas::Program<Message> for Comparator {
    type State = ComparatorState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        state.sync(self.key);
        let track = self.track(bounds);

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                state.slider.press(track, position.x);
                Some(Action::request_redraw().and_capture())
            }
            iced::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                state.slider.press(track, position.x);
                Some(Action::request_redraw().and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position })
            | iced::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                if !state.slider.is_dragging() {
                    // Hover changes the cursor only.
                    return cursor
                        .is_over(bounds)
                        .then(Action::request_redraw);
                }
                state.slider.move_to(track, position.x);
                Some(Action::request_redraw().and_capture())
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft)
            | iced::Event::Touch(touch::Event::FingerLifted { .. })
            | iced::Event::Touch(touch::Event::FingerLost { .. })
            | iced::Event::Window(window::Event::Unfocused) => state
                .slider
                .release()
                .then(|| Action::request_redraw().and_capture()),
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &iced::Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let fit = fit_rect(self.dimensions, bounds.size());
        if fit.width <= 0.0 || fit.height <= 0.0 {
            return vec![frame.into_geometry()];
        }

        let colors = OverlayColors::for_theme(theme);
        let fraction = state.fraction_for(self.key);
        let split_x = fit.x + fraction * fit.width;

        frame.draw_image(fit, canvas::Image::new(self.before.clone()));

        let revealed = Rectangle::new(fit.position(), Size::new(split_x - fit.x, fit.height));
        if revealed.width > 0.0 {
            let after = self.after.clone();
            frame.with_clip(revealed, |clipped| {
                // Clip-local coordinates start at the clip's top-left.
                clipped.draw_image(
                    Rectangle::new(Point::ORIGIN, fit.size()),
                    canvas::Image::new(after),
                );
            });
        }

        draw_badge(&mut frame, &self.after_label, fit, BadgeSide::Left, colors);
        draw_badge(&mut frame, &self.before_label, fit, BadgeSide::Right, colors);
        draw_handle(&mut frame, split_x, fit, colors);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum BadgeSide {
    Left,
    Right,
}

fn draw_handle(frame: &mut Frame, split_x: f32, fit: Rectangle, colors: OverlayColors) {
    let line = Path::line(
        Point::new(split_x, fit.y),
        Point::new(split_x, fit.y + fit.height),
    );
    frame.stroke(
        &line,
        Stroke::default()
            .with_width(tokens::DIVIDER_WIDTH)
            .with_color(colors.divider),
    );

    let center = Point::new(split_x, fit.center_y());
    let knob = Path::circle(center, tokens::KNOB_RADIUS);
    frame.fill(&knob, colors.knob);
    frame.stroke(
        &knob,
        Stroke::default()
            .with_width(tokens::DIVIDER_WIDTH)
            .with_color(colors.knob_border),
    );

    let size = tokens::CHEVRON_SIZE;
    let gap = tokens::KNOB_RADIUS / 3.0;
    let chevrons = Path::new(|builder| {
        builder.move_to(Point::new(center.x - gap, center.y - size));
        builder.line_to(Point::new(center.x - gap - size, center.y));
        builder.line_to(Point::new(center.x - gap, center.y + size));

        builder.move_to(Point::new(center.x + gap, center.y - size));
        builder.line_to(Point::new(center.x + gap + size, center.y));
        builder.line_to(Point::new(center.x + gap, center.y + size));
    });
    frame.stroke(
        &chevrons,
        Stroke::default()
            .with_width(tokens::DIVIDER_WIDTH)
            .with_color(colors.chevron)
            .with_line_cap(canvas::LineCap::Round),
    );
}

fn draw_badge(frame: &mut Frame, label: &str, fit: Rectangle, side: BadgeSide, colors: OverlayColors) {
    if label.is_empty() {
        return;
    }

    let text_size = typography::CAPTION;
    #[allow(clippy::cast_precision_loss)]
    // Labels are a handful of characters.
    let text_width = label.chars().count() as f32 * text_size * 0.6;
    let size = Size::new(text_width + spacing::XS * 2.0, text_size + spacing::XXS * 2.0);

    let x = match side {
        BadgeSide::Left => fit.x + tokens::BADGE_INSET,
        BadgeSide::Right => fit.x + fit.width - tokens::BADGE_INSET - size.width,
    };
    let origin = Point::new(x, fit.y + tokens::BADGE_INSET);

    frame.fill(&Path::rectangle(origin, size), colors.badge_background);
    frame.fill_text(canvas::Text {
        content: label.to_string(),
        position: Point::new(origin.x + spacing::XS, origin.y + spacing::XXS),
        color: colors.badge_text,
        size: Pixels(text_size),
        ..canvas::Text::default()
    });
}

// SPDX-License-Identifier: MPL-2.0
//! Checkerboard backdrop that makes transparent pixels visible.
//!
//! Background removal returns images with an alpha channel; they are shown
//! stacked over this pattern.

use crate::ui::design_tokens::{palette, sizing};
use iced::widget::{canvas, Stack};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

const LIGHT_TILE: Color = palette::GRAY_100;
const DARK_TILE: Color = palette::GRAY_200;

/// Canvas program filling its bounds with alternating tiles.
#[derive(Debug, Clone, Copy)]
pub struct Checkerboard {
    tile: f32,
}

impl Default for Checkerboard {
    fn default() -> Self {
        Self {
            tile: sizing::CHECKER_TILE,
        }
    }
}

impl Checkerboard {
    /// Number of (columns, rows) needed to cover `size`.
    #[must_use]
    pub fn grid(&self, size: Size) -> (u32, u32) {
        let count = |extent: f32| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = (extent.max(0.0) / self.tile).ceil() as u32;
            n.max(1)
        };
        (count(size.width), count(size.height))
    }

    #[must_use]
    pub fn tile_color(col: u32, row: u32) -> Color {
        if (row + col) % 2 == 0 {
            LIGHT_TILE
        } else {
            DARK_TILE
        }
    }
}

impl<Message> canvas::Program<Message> for Checkerboard {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Light tiles are the background, only dark ones are filled.
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), LIGHT_TILE);

        let (cols, rows) = self.grid(bounds.size());
        // Half a pixel of overlap hides seams between tiles.
        let tile = Size::new(self.tile + 0.5, self.tile + 0.5);
        for row in 0..rows {
            for col in 0..cols {
                if Self::tile_color(col, row) == DARK_TILE {
                    #[allow(clippy::cast_precision_loss)]
                    let origin = Point::new(col as f32 * self.tile, row as f32 * self.tile);
                    frame.fill_rectangle(origin, tile, DARK_TILE);
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Stacks `content` over a checkerboard filling the same space.
pub fn behind<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Stack::new()
        .push(
            canvas::Canvas::new(Checkerboard::default())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(content)
        .into()
}

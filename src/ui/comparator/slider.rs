// SPDX-License-Identifier: MPL-2.0
//! Split position and drag tracking for the before/after comparator.
//!
//! Pure state, independent of any widget: pointer positions come in as
//! absolute x coordinates and are mapped through a [`Track`] onto a fraction
//! in `[0, 1]`.

/// Split fraction shown on mount.
pub const DEFAULT_FRACTION: f32 = 0.5;

/// Horizontal extent the fraction is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub left: f32,
    pub width: f32,
}

impl Track {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Maps an absolute x coordinate to a clamped fraction.
    ///
    /// Returns `None` for a degenerate track (zero, negative or non-finite
    /// width), so the current fraction is kept.
    #[must_use]
    pub fn fraction_at(self, x: f32) -> Option<f32> {
        if !(self.width.is_finite() && self.width > 0.0) || !x.is_finite() {
            return None;
        }
        Some(((x - self.left) / self.width).clamp(0.0, 1.0))
    }

    /// Absolute x coordinate of `fraction` on this track.
    #[must_use]
    pub fn x_at(self, fraction: f32) -> f32 {
        self.left + fraction.clamp(0.0, 1.0) * self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Drag {
    #[default]
    Idle,
    Dragging,
}

/// Split position plus the pointer drag state driving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    fraction: f32,
    drag: Drag,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_FRACTION,
            drag: Drag::Idle,
        }
    }
}

impl Slider {
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag == Drag::Dragging
    }

    /// Starts a drag and jumps the split to the pressed position.
    pub fn press(&mut self, track: Track, x: f32) {
        self.drag = Drag::Dragging;
        self.jump(track, x);
    }

    /// Follows the pointer while dragging. Returns whether the fraction
    /// changed.
    pub fn move_to(&mut self, track: Track, x: f32) -> bool {
        if self.drag != Drag::Dragging {
            return false;
        }
        self.jump(track, x)
    }

    /// Ends the drag. Returns whether a drag was in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.drag, Drag::Idle) == Drag::Dragging
    }

    fn jump(&mut self, track: Track, x: f32) -> bool {
        match track.fraction_at(x) {
            Some(fraction) if (fraction - self.fraction).abs() > f32::EPSILON => {
                self.fraction = fraction;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: Track = Track {
        left: 100.0,
        width: 400.0,
    };

    #[test]
    fn starts_centered_and_idle() {
        let slider = Slider::default();
        assert_eq!(slider.fraction(), 0.5);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn fraction_is_relative_to_track_left() {
        assert_eq!(TRACK.fraction_at(200.0), Some(0.25));
        assert_eq!(TRACK.fraction_at(500.0), Some(1.0));
    }

    #[test]
    fn positions_outside_track_clamp_to_edges() {
        assert_eq!(TRACK.fraction_at(-50.0), Some(0.0));
        assert_eq!(TRACK.fraction_at(99.0), Some(0.0));
        assert_eq!(TRACK.fraction_at(501.0), Some(1.0));
        assert_eq!(TRACK.fraction_at(10_000.0), Some(1.0));
    }

    #[test]
    fn degenerate_track_is_ignored() {
        assert_eq!(Track::new(0.0, 0.0).fraction_at(10.0), None);
        assert_eq!(Track::new(0.0, -5.0).fraction_at(10.0), None);
        assert_eq!(Track::new(0.0, f32::NAN).fraction_at(10.0), None);
    }

    #[test]
    fn x_at_inverts_fraction() {
        assert_eq!(TRACK.x_at(0.5), 300.0);
        assert_eq!(TRACK.x_at(2.0), 500.0);
    }

    #[test]
    fn press_jumps_to_pointer() {
        let mut slider = Slider::default();
        slider.press(TRACK, 140.0);
        assert!(slider.is_dragging());
        assert!((slider.fraction() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut slider = Slider::default();
        assert!(!slider.move_to(TRACK, 120.0));
        assert_eq!(slider.fraction(), 0.5);
    }

    #[test]
    fn drag_follows_pointer_beyond_bounds() {
        let mut slider = Slider::default();
        slider.press(TRACK, 300.0);
        assert!(slider.move_to(TRACK, 900.0));
        assert_eq!(slider.fraction(), 1.0);
        assert!(slider.move_to(TRACK, -900.0));
        assert_eq!(slider.fraction(), 0.0);
    }

    #[test]
    fn release_stops_following() {
        let mut slider = Slider::default();
        slider.press(TRACK, 300.0);
        assert!(slider.release());
        assert!(!slider.release());
        assert!(!slider.move_to(TRACK, 100.0));
        assert_eq!(slider.fraction(), 0.5);
    }

    #[test]
    fn degenerate_track_keeps_fraction() {
        let mut slider = Slider::default();
        slider.press(Track::new(0.0, 0.0), 42.0);
        assert_eq!(slider.fraction(), 0.5);
    }
}

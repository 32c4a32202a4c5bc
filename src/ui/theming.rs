// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The Iced theme for this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors drawn on top of images, independent of the window theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayColors {
    pub divider: Color,
    pub knob: Color,
    pub knob_border: Color,
    pub chevron: Color,
    pub badge_background: Color,
    pub badge_text: Color,
}

impl OverlayColors {
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        let accent = theme.extended_palette().primary.base.color;
        Self {
            divider: palette::WHITE,
            knob: palette::WHITE,
            knob_border: accent,
            chevron: accent,
            badge_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            badge_text: palette::WHITE,
        }
    }
}

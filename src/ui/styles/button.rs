// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn disabled_style(theme: &Theme) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main call to action: process with the active tool.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Download, reset and open.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;
    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled_style(theme),
    }
}

/// Sidebar entry. The active tool is highlighted with the brand color.
pub fn tool(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text_color = theme.palette().text;
        let background = match (active, status) {
            (true, _) => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            (false, button::Status::Hovered | button::Status::Pressed) => {
                Some(Background::Color(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                }))
            }
            (false, _) => None,
        };

        button::Style {
            background,
            text_color,
            border: Border {
                color: if active {
                    palette::PRIMARY_500
                } else {
                    Color::TRANSPARENT
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_primary_is_grayed() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn active_tool_has_accent_border() {
        let active = tool(true)(&Theme::Light, button::Status::Active);
        let idle = tool(false)(&Theme::Light, button::Status::Active);
        assert_eq!(active.border.color, palette::PRIMARY_500);
        assert!(idle.background.is_none());
    }
}

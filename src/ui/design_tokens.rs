// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the retouch studio.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Comparator**: Split handle geometry
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_retouch::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.11);
    pub const GRAY_800: Color = Color::from_rgb(0.14, 0.14, 0.17);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.33);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.78, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.92);

    // Brand colors (violet scale)
    pub const PRIMARY_300: Color = Color::from_rgb(0.72, 0.62, 1.0);
    pub const PRIMARY_400: Color = Color::from_rgb(0.62, 0.5, 0.98);
    pub const PRIMARY_500: Color = Color::from_rgb(0.5, 0.36, 0.93);
    pub const PRIMARY_600: Color = Color::from_rgb(0.42, 0.28, 0.84);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of the tool list.
    pub const SIDEBAR_WIDTH: f32 = 260.0;
    pub const TOAST_WIDTH: f32 = 320.0;

    /// Side of one checkerboard tile behind transparent results.
    pub const CHECKER_TILE: f32 = 16.0;
}

// ============================================================================
// Comparator Geometry
// ============================================================================

pub mod comparator {
    /// Width of the split line.
    pub const DIVIDER_WIDTH: f32 = 2.0;
    /// Radius of the grab knob centered on the split line.
    pub const KNOB_RADIUS: f32 = 16.0;
    /// Half-height of the chevrons drawn inside the knob.
    pub const CHEVRON_SIZE: f32 = 5.0;
    /// Inset of the before/after badges from the image corners.
    pub const BADGE_INSET: f32 = 10.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App name, empty-state heading
    pub const TITLE_LG: f32 = 26.0;

    /// Active tool heading
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 16.0;

    /// Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Badges, hints
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(comparator::KNOB_RADIUS > comparator::CHEVRON_SIZE);
    assert!(sizing::CHECKER_TILE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn knob_is_wider_than_divider() {
        assert!(comparator::KNOB_RADIUS * 2.0 > comparator::DIVIDER_WIDTH);
    }
}

// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use learnreel::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};
let padding = spacing::MD;
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
    pub const GRAY_900: Color = Color::from_rgb(0.07, 0.09, 0.15);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.16, 0.22);
    pub const GRAY_700: Color = Color::from_rgb(0.22, 0.25, 0.32);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.45, 0.5);
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.84, 0.86);
    pub const GRAY_100: Color = Color::from_rgb(0.95, 0.96, 0.96);
    pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.98);

    // Brand colors (indigo scale)
    pub const BRAND_400: Color = Color::from_rgb(0.51, 0.55, 0.97);
    pub const BRAND_500: Color = Color::from_rgb(0.39, 0.4, 0.95);
    pub const BRAND_600: Color = Color::from_rgb(0.31, 0.27, 0.9);

    // Accent (purple) used for highlights and gifts
    pub const ACCENT_500: Color = Color::from_rgb(0.66, 0.33, 0.97);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const WARNING_500: Color = Color::from_rgb(0.96, 0.62, 0.04);
    pub const SUCCESS_500: Color = Color::from_rgb(0.06, 0.73, 0.51);
    pub const INFO_500: Color = Color::from_rgb(0.23, 0.51, 0.96);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
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
    // Phone-shaped window
    pub const WINDOW_WIDTH: f32 = 420.0;
    pub const WINDOW_HEIGHT: f32 = 820.0;

    pub const TAB_BAR_HEIGHT: f32 = 64.0;
    pub const HEADER_HEIGHT: f32 = 56.0;
    pub const AVATAR_SM: f32 = 32.0;
    pub const AVATAR_LG: f32 = 80.0;
    pub const CHART_HEIGHT: f32 = 160.0;
    pub const TOAST_WIDTH: f32 = 340.0;
    pub const DRAWER_MAX_HEIGHT: f32 = 560.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Screen titles
    pub const TITLE_LG: f32 = 26.0;

    /// Section headers
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles
    pub const TITLE_SM: f32 = 17.0;

    pub const BODY: f32 = 14.0;

    /// Secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Badges, timestamps
    pub const CAPTION: f32 = 11.0;

    /// Glyph icons in buttons and the tab bar
    pub const ICON: f32 = 20.0;
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
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 20.0;
    pub const FULL: f32 = 9999.0;
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
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::WINDOW_HEIGHT > sizing::WINDOW_WIDTH);
    assert!(sizing::AVATAR_LG > sizing::AVATAR_SM);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Theme selection and color schemes.

use crate::navigation::Appearance;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for an appearance.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_accent: Color,

    // Overlay colors
    pub scrim: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_tertiary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_500,

            brand_primary: palette::BRAND_500,
            brand_accent: palette::ACCENT_500,

            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_tertiary: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,

            brand_primary: palette::BRAND_400,
            brand_accent: palette::ACCENT_500,

            scrim: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }
}

/// Theme preference read from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Parses `light`, `dark` or `system`, ignoring case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }

    /// The appearance to start with. `System` asks the OS and falls back
    /// to light when detection fails.
    #[must_use]
    pub fn resolve(self) -> Appearance {
        match self {
            ThemeMode::Light => Appearance::Light,
            ThemeMode::Dark => Appearance::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => Appearance::Dark,
                _ => Appearance::Light,
            },
        }
    }
}

/// Iced theme for the current appearance.
#[must_use]
pub fn iced_theme(appearance: Appearance) -> Theme {
    match appearance {
        Appearance::Light => Theme::Light,
        Appearance::Dark => Theme::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn parse_accepts_known_modes() {
        assert_eq!(ThemeMode::parse("Dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("system"), Some(ThemeMode::System));
        assert_eq!(ThemeMode::parse("neon"), None);
    }

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert_eq!(ThemeMode::Light.resolve(), Appearance::Light);
        assert_eq!(ThemeMode::Dark.resolve(), Appearance::Dark);
        // System depends on the host, only check it does not panic
        let _ = ThemeMode::System.resolve();
    }

    #[test]
    fn iced_theme_follows_appearance() {
        assert_eq!(iced_theme(Appearance::Dark), Theme::Dark);
        assert_eq!(iced_theme(Appearance::Light), Theme::Light);
    }
}

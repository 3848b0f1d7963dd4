// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::scheme;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window screen background.
pub fn screen(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Rounded card on top of a screen.
pub fn card(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Card highlighted with the brand color (popular tier, unread entry).
pub fn highlighted(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        border: Border {
            color: colors.brand_primary,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..card(theme)
    }
}

/// Bottom sheet for drawers and menus.
pub fn sheet(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dimmed backdrop behind sheets and dialogs.
pub fn scrim(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(scheme(theme).scrim)),
        ..Default::default()
    }
}

/// Dark stage the lesson plays on, in both themes.
pub fn video_stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Bottom tab bar.
pub fn tab_bar(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        border: Border {
            color: colors.surface_tertiary,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Segment of a step progress bar.
pub fn progress(filled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = scheme(theme);
        let color = if filled {
            colors.brand_primary
        } else {
            colors.surface_tertiary
        };
        container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Small pill used for badges and tags.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..color
        })),
        text_color: Some(color),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_background_follows_theme() {
        let light = screen(&Theme::Light);
        let dark = screen(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn highlighted_card_has_thicker_border() {
        let style = highlighted(&Theme::Light);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }
}

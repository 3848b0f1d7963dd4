// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::scheme;
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (submit, publish, send).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::BRAND_500)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_600,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_400)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_500,
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_300)),
            text_color: palette::GRAY_500,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Selected entry of a toggle group (chips, tiers, range pickers).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_400,
        _ => palette::BRAND_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::BRAND_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Unselected entry of a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let border_color = match status {
        button::Status::Hovered => colors.brand_primary,
        _ => colors.surface_tertiary,
    };
    button::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: match status {
            button::Status::Disabled => colors.text_secondary,
            _ => colors.text_primary,
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button for icons, list rows and links.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(colors.surface_tertiary)),
        _ => None,
    };
    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Destructive action (log out, discard).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        _ => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::ERROR_500
        })),
        text_color: palette::ERROR_500,
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round button drawn over the video stage.
pub fn on_video(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: if active { palette::ACCENT_500 } else { WHITE },
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Bottom bar entry. The create tab is emphasised with the brand color.
pub fn tab(active: bool, emphasised: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = scheme(theme);
        let (background, text_color) = if emphasised {
            (Some(Background::Color(palette::BRAND_500)), WHITE)
        } else if active {
            (None, colors.brand_primary)
        } else if status == button::Status::Hovered {
            (None, colors.text_primary)
        } else {
            (None, colors.text_secondary)
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
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
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::BRAND_500)));
    }

    #[test]
    fn unselected_follows_theme() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.text_color, dark.text_color);
    }

    #[test]
    fn on_video_alpha_changes_on_hover() {
        let style_fn = on_video(false);
        let normal = style_fn(&Theme::Dark, button::Status::Active);
        let hover = style_fn(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn emphasised_tab_is_filled() {
        let style = tab(false, true)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_some());
        let plain = tab(true, false)(&Theme::Light, button::Status::Active);
        assert!(plain.background.is_none());
    }
}

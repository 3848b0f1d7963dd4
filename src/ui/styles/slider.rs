// SPDX-License-Identifier: MPL-2.0
//! Slider styles.

use super::scheme;
use crate::ui::design_tokens::{border, palette};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Editor timeline: brand-colored progress over a neutral rail.
pub fn timeline(theme: &Theme, status: slider::Status) -> slider::Style {
    let colors = scheme(theme);
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => 8.0,
        slider::Status::Active => 6.0,
    };

    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(colors.brand_primary),
                Background::Color(colors.surface_tertiary),
            ),
            width: 4.0,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 2.0.into(),
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(palette::WHITE),
            border_width: border::WIDTH_MD,
            border_color: colors.brand_primary,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_grows_while_dragged() {
        let idle = timeline(&Theme::Light, slider::Status::Active);
        let dragged = timeline(&Theme::Light, slider::Status::Dragged);
        let radius = |style: &slider::Style| match style.handle.shape {
            slider::HandleShape::Circle { radius } => radius,
            slider::HandleShape::Rectangle { .. } => 0.0,
        };
        assert!(radius(&dragged) > radius(&idle));
    }
}

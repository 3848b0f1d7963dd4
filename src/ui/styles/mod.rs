// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every screen.

pub mod button;
pub mod container;
pub mod slider;

use crate::navigation::Appearance;
use crate::ui::theming::ColorScheme;
use iced::Theme;

/// Color scheme matching the active iced theme.
#[must_use]
pub fn scheme(theme: &Theme) -> ColorScheme {
    let appearance = if theme.extended_palette().is_dark {
        Appearance::Dark
    } else {
        Appearance::Light
    };
    ColorScheme::for_appearance(appearance)
}

// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::{button as iced_button, slider as iced_slider};
    use iced::{Background, Theme};
    use learnreel::navigation::Appearance;
    use learnreel::ui::design_tokens::{opacity, palette, sizing, spacing};
    use learnreel::ui::styles::{self, button, container, slider};
    use learnreel::ui::theming::{iced_theme, ColorScheme};

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Dark;

        let _ = button::primary(&theme, iced_button::Status::Active);
        let _ = button::ghost(&theme, iced_button::Status::Hovered);
        let _ = button::danger(&theme, iced_button::Status::Pressed);
        let _ = button::on_video(true)(&theme, iced_button::Status::Active);
        let _ = container::screen(&theme);
        let _ = container::sheet(&theme);
        let _ = container::tab_bar(&theme);
        let _ = container::progress(true)(&theme);
        let _ = slider::timeline(&theme, iced_slider::Status::Active);
    }

    #[test]
    fn design_tokens_are_ordered() {
        assert!(spacing::XS < spacing::MD);
        assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_STRONG);
        assert!(sizing::TAB_BAR_HEIGHT < sizing::WINDOW_HEIGHT);
        assert!(sizing::WINDOW_WIDTH < sizing::WINDOW_HEIGHT);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_appearance(Appearance::Light);
        let dark = ColorScheme::for_appearance(Appearance::Dark);

        assert!(light.surface_primary.r > dark.surface_primary.r);
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn scheme_follows_the_iced_theme() {
        let dark = styles::scheme(&iced_theme(Appearance::Dark));
        let light = styles::scheme(&iced_theme(Appearance::Light));
        assert!(light.surface_primary.r > dark.surface_primary.r);
    }

    #[test]
    fn emphasised_tab_is_filled_with_brand() {
        let style = button::tab(false, true)(&Theme::Light, iced_button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::BRAND_500)));

        let plain = button::tab(true, false)(&Theme::Light, iced_button::Status::Active);
        assert_eq!(plain.background, None);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Settings overlay.
//!
//! Rows that lead elsewhere (studio, earnings, wallet, admin) only report an
//! [`Event`]; the shell opens the overlay on the tab hosting the settings.

use crate::catalog::analytics::TEACHING_INSIGHTS;
use crate::i18n::fluent::I18n;
use crate::navigation::Appearance;
use crate::ui::components::{header, section};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};

/// Local preferences that only live for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    notifications: bool,
    sound_effects: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            notifications: true,
            sound_effects: true,
        }
    }
}

impl State {
    #[must_use]
    pub fn notifications(&self) -> bool {
        self.notifications
    }

    #[must_use]
    pub fn sound_effects(&self) -> bool {
        self.sound_effects
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    OpenStudio,
    OpenEarnings,
    OpenWallet,
    ToggleNotifications,
    ToggleDarkMode,
    CycleLanguage,
    ToggleSoundEffects,
    OpenAdmin,
    LogOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    OpenStudio,
    OpenEarnings,
    OpenWallet,
    ToggleTheme,
    CycleLanguage,
    OpenAdmin,
    LogOut,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Close,
        Message::OpenStudio => Event::OpenStudio,
        Message::OpenEarnings => Event::OpenEarnings,
        Message::OpenWallet => Event::OpenWallet,
        Message::ToggleNotifications => {
            state.notifications = !state.notifications;
            Event::None
        }
        Message::ToggleDarkMode => Event::ToggleTheme,
        Message::CycleLanguage => Event::CycleLanguage,
        Message::ToggleSoundEffects => {
            state.sound_effects = !state.sound_effects;
            Event::None
        }
        Message::OpenAdmin => Event::OpenAdmin,
        Message::LogOut => Event::LogOut,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub appearance: Appearance,
    pub admin_mode: bool,
}

/// One settings row: glyph, label, optional value, optional action.
struct Item {
    glyph: &'static str,
    label_key: &'static str,
    value: String,
    on_press: Option<Message>,
}

impl Item {
    fn new(glyph: &'static str, label_key: &'static str) -> Self {
        Self {
            glyph,
            label_key,
            value: String::new(),
            on_press: None,
        }
    }

    fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    fn on_press(mut self, message: Message) -> Self {
        self.on_press = Some(message);
        self
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let on_off = |enabled: bool| {
        if enabled {
            i18n.tr("settings-on")
        } else {
            i18n.tr("settings-off")
        }
    };

    let mut sections = vec![
        (
            "settings-section-account",
            vec![
                Item::new("👤", "settings-edit-profile"),
                Item::new("🔒", "settings-security"),
                Item::new("👁", "settings-privacy"),
            ],
        ),
        (
            "settings-section-creator",
            vec![
                Item::new("📊", "settings-studio").on_press(Message::OpenStudio),
                Item::new("$", "settings-earnings").on_press(Message::OpenEarnings),
                Item::new("🪙", "settings-wallet").on_press(Message::OpenWallet),
            ],
        ),
        (
            "settings-section-preferences",
            vec![
                Item::new("🔔", "settings-notifications")
                    .value(on_off(ctx.state.notifications))
                    .on_press(Message::ToggleNotifications),
                Item::new("🌙", "settings-dark-mode")
                    .value(on_off(ctx.appearance.is_dark()))
                    .on_press(Message::ToggleDarkMode),
                Item::new("🌐", "settings-language")
                    .value(language_name(i18n))
                    .on_press(Message::CycleLanguage),
                Item::new("🔊", "settings-sound")
                    .value(on_off(ctx.state.sound_effects))
                    .on_press(Message::ToggleSoundEffects),
            ],
        ),
        (
            "settings-section-content",
            vec![
                Item::new("🕘", "settings-watch-history"),
                Item::new("🛡", "settings-blocked").value("3"),
            ],
        ),
        (
            "settings-section-support",
            vec![
                Item::new("❓", "settings-help"),
                Item::new("ℹ", "settings-about").value(format!("v{}", env!("CARGO_PKG_VERSION"))),
            ],
        ),
    ];

    if ctx.admin_mode {
        sections.push((
            "settings-section-admin",
            vec![Item::new("🛠", "settings-admin-dashboard").on_press(Message::OpenAdmin)],
        ));
    }

    let body = sections
        .into_iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::LG), |column, (index, (title_key, items))| {
            let rows = items
                .into_iter()
                .fold(Column::new().spacing(spacing::XXS), |rows, item| {
                    rows.push(row(item, i18n))
                });
            let column = column.push(
                Column::new()
                    .spacing(spacing::XS)
                    .push(
                        text(i18n.tr(title_key))
                            .size(typography::CAPTION)
                            .color(palette::GRAY_500),
                    )
                    .push(container(rows).padding(spacing::XS).style(container_styles::card)),
            );
            // Insights follow the creator tools.
            if index == 1 {
                column.push(insights(i18n))
            } else {
                column
            }
        })
        .push(
            button(text(i18n.tr("settings-log-out")).width(Length::Fill).center())
                .on_press(Message::LogOut)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(button_styles::danger),
        );

    container(
        Column::new()
            .push(header::view(i18n.tr("settings-title"), Some(Message::Back), None))
            .push(scrollable(container(body).padding(spacing::MD)).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

fn row(item: Item, i18n: &I18n) -> Element<'_, Message> {
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(item.glyph).size(typography::ICON))
        .push(text(i18n.tr(item.label_key)).size(typography::BODY).width(Length::Fill));
    if !item.value.is_empty() {
        content = content.push(
            text(item.value)
                .size(typography::BODY_SM)
                .color(palette::GRAY_500),
        );
    }
    content = content.push(text("›").size(typography::TITLE_SM).color(palette::GRAY_500));

    button(content)
        .on_press_maybe(item.on_press)
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(button_styles::ghost)
        .into()
}

fn insights(i18n: &I18n) -> Element<'_, Message> {
    let data = &TEACHING_INSIGHTS;
    let entries = [
        ("settings-insight-views", data.total_views),
        ("settings-insight-engagement", data.avg_engagement),
        ("settings-insight-growth", data.recent_growth),
        ("settings-insight-learners", data.helped_learners),
        ("settings-insight-top-video", data.top_video),
        ("settings-insight-most-helpful", data.most_helpful),
    ];
    let lines = entries
        .into_iter()
        .fold(Column::new().spacing(spacing::XS), |lines, (key, value)| {
            lines.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        text(i18n.tr(key))
                            .size(typography::BODY_SM)
                            .color(palette::GRAY_500)
                            .width(Length::Fill),
                    )
                    .push(text(value).size(typography::BODY_SM)),
            )
        });
    section::view(i18n.tr("settings-insights"), lines)
}

/// Localized name of the current locale, or its tag when none is translated.
fn language_name(i18n: &I18n) -> String {
    let locale = i18n.current_locale().to_string();
    let name = i18n.tr(&format!("language-name-{locale}"));
    if name.starts_with("MISSING:") {
        locale
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_rows_report_events() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::OpenStudio), Event::OpenStudio);
        assert_eq!(update(&mut state, Message::OpenWallet), Event::OpenWallet);
        assert_eq!(update(&mut state, Message::LogOut), Event::LogOut);
        assert_eq!(update(&mut state, Message::Back), Event::Close);
    }

    #[test]
    fn local_toggles_flip() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::ToggleNotifications), Event::None);
        assert!(!state.notifications());
        update(&mut state, Message::ToggleSoundEffects);
        assert!(!state.sound_effects());
    }

    #[test]
    fn language_name_is_localized() {
        let i18n = I18n::default();
        assert_eq!(language_name(&i18n), "English");
    }
}

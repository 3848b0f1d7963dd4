// SPDX-License-Identifier: MPL-2.0
//! Profile tab: the signed-in user's profile.

use crate::catalog::creators::OWN_PROFILE;
use crate::i18n::fluent::I18n;
use crate::ui::components::{header, post_grid, segmented};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Horizontal;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Lessons,
    Saved,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    section: Section,
}

impl State {
    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ShowSection(Section),
    OpenSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenSettings,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ShowSection(section) => {
            state.section = section;
            Event::None
        }
        Message::OpenSettings => Event::OpenSettings,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let profile = &OWN_PROFILE;

    let settings = button(text("⚙").size(typography::ICON))
        .on_press(Message::OpenSettings)
        .style(button_styles::ghost);

    let stats = [
        (profile.contributions.to_string(), "profile-contributions"),
        (profile.helped.to_string(), "profile-helped"),
        (profile.learning.to_string(), "profile-learning"),
    ]
    .into_iter()
    .fold(Row::new().spacing(spacing::LG), |row, (value, key)| {
        row.push(
            Column::new()
                .align_x(Horizontal::Center)
                .push(text(value).size(typography::TITLE_SM))
                .push(text(i18n.tr(key)).size(typography::CAPTION).color(palette::GRAY_500)),
        )
    });

    let identity = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(text(profile.avatar).size(typography::TITLE_LG * 2.0))
        .push(text(profile.name).size(typography::TITLE_MD))
        .push(text(format!("@{}", profile.handle)).size(typography::BODY_SM).color(palette::GRAY_500))
        .push(text(profile.bio).size(typography::BODY_SM).align_x(Horizontal::Center))
        .push(stats);

    let sections = segmented::view(
        [
            (
                Section::Lessons,
                i18n.tr_with_args("profile-lessons", &[("count", &profile.lessons.len().to_string())]),
            ),
            (
                Section::Saved,
                i18n.tr_with_args("profile-saved", &[("count", &profile.saved.len().to_string())]),
            ),
        ],
        ctx.state.section,
        Message::ShowSection,
    );

    let posts = match ctx.state.section {
        Section::Lessons => profile.lessons,
        Section::Saved => profile.saved,
    };

    let body = Column::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::MD])
        .push(identity)
        .push(sections)
        .push(post_grid::view(posts));

    container(
        Column::new()
            .push(header::view(i18n.tr("profile-title"), None, Some(settings.into())))
            .push(scrollable(body).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_switch() {
        let mut state = State::default();
        assert_eq!(state.section(), Section::Lessons);
        update(&mut state, Message::ShowSection(Section::Saved));
        assert_eq!(state.section(), Section::Saved);
    }

    #[test]
    fn settings_button_is_reported() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::OpenSettings), Event::OpenSettings);
    }
}

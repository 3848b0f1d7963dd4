// SPDX-License-Identifier: MPL-2.0
//! Setup step: metadata and self-review before publishing.

use crate::catalog::authoring::{LessonCategory, QualityCheck, LESSON_CATEGORIES};
use crate::catalog::lessons::Difficulty;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Element, Length};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    title: String,
    description: String,
    category: Option<usize>,
    subtopic: Option<usize>,
    /// Category whose subtopics are listed.
    expanded: Option<usize>,
    difficulty: Option<Difficulty>,
    checks: BTreeSet<QualityCheck>,
}

impl State {
    #[must_use]
    pub fn category(&self) -> Option<&'static LessonCategory> {
        self.category.and_then(|index| LESSON_CATEGORIES.get(index))
    }

    #[must_use]
    pub fn subtopic(&self) -> Option<&'static str> {
        let category = self.category()?;
        self.subtopic
            .and_then(|index| category.subtopics.get(index))
            .copied()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    #[must_use]
    pub fn is_checked(&self, check: QualityCheck) -> bool {
        self.checks.contains(&check)
    }

    /// Publishing needs a category and a non-blank title.
    #[must_use]
    pub fn can_publish(&self) -> bool {
        self.category().is_some() && !self.title.trim().is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    SelectCategory(usize),
    SelectSubtopic(usize),
    SetDifficulty(Difficulty),
    ToggleCheck(QualityCheck),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::TitleChanged(title) => state.title = title,
        Message::DescriptionChanged(description) => state.description = description,
        Message::SelectCategory(index) => {
            if index >= LESSON_CATEGORIES.len() {
                return;
            }
            if state.category != Some(index) {
                state.subtopic = None;
            }
            state.category = Some(index);
            state.expanded = if state.expanded == Some(index) { None } else { Some(index) };
        }
        Message::SelectSubtopic(index) => {
            if state.category().is_some_and(|category| index < category.subtopics.len()) {
                state.subtopic = Some(index);
            }
        }
        Message::SetDifficulty(difficulty) => state.difficulty = Some(difficulty),
        Message::ToggleCheck(check) => {
            if !state.checks.remove(&check) {
                state.checks.insert(check);
            }
        }
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = field(
        i18n.tr("create-title-label"),
        text_input(&i18n.tr("create-title-placeholder"), &state.title)
            .on_input(Message::TitleChanged)
            .padding(spacing::XS),
    );
    let description = field(
        i18n.tr("create-description-label"),
        text_input(&i18n.tr("create-description-placeholder"), &state.description)
            .on_input(Message::DescriptionChanged)
            .padding(spacing::XS),
    );

    let categories = LESSON_CATEGORIES.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |column, (index, category)| {
            let chosen = state.category == Some(index);
            let mut column = column.push(
                button(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(text(category.icon))
                        .push(text(category.name).width(Length::Fill))
                        .push(text(if state.expanded == Some(index) { "▴" } else { "▾" })),
                )
                .on_press(Message::SelectCategory(index))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(if chosen { button_styles::selected } else { button_styles::unselected }),
            );
            if state.expanded == Some(index) {
                column = column.push(category.subtopics.iter().enumerate().fold(
                    Column::new().spacing(spacing::XXS).padding([0.0, spacing::MD]),
                    |subtopics, (sub_index, name)| {
                        let picked = chosen && state.subtopic == Some(sub_index);
                        subtopics.push(
                            button(text(*name).size(typography::BODY_SM))
                                .on_press(Message::SelectSubtopic(sub_index))
                                .width(Length::Fill)
                                .style(if picked { button_styles::selected } else { button_styles::ghost }),
                        )
                    },
                ));
            }
            column
        },
    );

    let difficulty = Difficulty::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, level| {
            row.push(
                button(text(i18n.tr(level.label_key())).size(typography::BODY_SM))
                    .on_press(Message::SetDifficulty(level))
                    .style(if state.difficulty == Some(level) {
                        button_styles::selected
                    } else {
                        button_styles::unselected
                    }),
            )
        });

    let checks = QualityCheck::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, check| {
            let mark = if state.is_checked(check) { "☑" } else { "☐" };
            column.push(
                button(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(text(mark).size(typography::ICON))
                        .push(text(i18n.tr(check.label_key())).size(typography::BODY_SM)),
                )
                .on_press(Message::ToggleCheck(check))
                .width(Length::Fill)
                .style(button_styles::ghost),
            )
        });

    Column::new()
        .spacing(spacing::LG)
        .padding(spacing::MD)
        .push(title)
        .push(description)
        .push(field(i18n.tr("create-category-label"), categories))
        .push(field(i18n.tr("create-difficulty-label"), difficulty))
        .push(field(
            i18n.tr("create-quality-label"),
            container(checks)
                .padding(spacing::SM)
                .width(Length::Fill)
                .style(container_styles::card),
        ))
        .into()
}

fn field<'a>(label: String, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(text(label).size(typography::BODY_SM))
        .push(content)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_needs_category_and_title() {
        let mut state = State::default();
        assert!(!state.can_publish());

        update(&mut state, Message::TitleChanged("Fractions".into()));
        assert!(!state.can_publish());

        update(&mut state, Message::SelectCategory(1));
        assert!(state.can_publish());

        update(&mut state, Message::TitleChanged("   ".into()));
        assert!(!state.can_publish());
    }

    #[test]
    fn changing_category_drops_subtopic() {
        let mut state = State::default();
        update(&mut state, Message::SelectCategory(0));
        update(&mut state, Message::SelectSubtopic(2));
        assert_eq!(state.subtopic(), Some("Chemistry"));

        update(&mut state, Message::SelectCategory(3));
        assert_eq!(state.subtopic(), None);
        assert_eq!(state.category().map(|c| c.name), Some("Art"));
    }

    #[test]
    fn subtopic_requires_a_category() {
        let mut state = State::default();
        update(&mut state, Message::SelectSubtopic(0));
        assert_eq!(state.subtopic(), None);
    }

    #[test]
    fn quality_checks_toggle() {
        let mut state = State::default();
        update(&mut state, Message::ToggleCheck(QualityCheck::CaptionsEnabled));
        assert!(state.is_checked(QualityCheck::CaptionsEnabled));
        assert!(!state.is_checked(QualityCheck::VideoLength));
        update(&mut state, Message::ToggleCheck(QualityCheck::CaptionsEnabled));
        assert!(!state.is_checked(QualityCheck::CaptionsEnabled));
    }
}

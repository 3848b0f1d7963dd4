// SPDX-License-Identifier: MPL-2.0
//! First-run walkthrough for new accounts: welcome, interests, ready.

use crate::catalog::authoring::{INTERESTS, MIN_INTERESTS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{alignment::Horizontal, Element, Length};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Welcome,
    Interests,
    Ready,
}

impl Step {
    fn position(self) -> usize {
        match self {
            Step::Welcome => 0,
            Step::Interests => 1,
            Step::Ready => 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    step: Step,
    /// Indices into [`INTERESTS`].
    selected: BTreeSet<usize>,
}

impl State {
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether Next is allowed from the current step.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        self.step != Step::Interests || self.selected.len() >= MIN_INTERESTS
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Back,
    Skip,
    ToggleInterest(usize),
    GetStarted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Completed,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Next if state.can_proceed() => {
            state.step = match state.step {
                Step::Welcome => Step::Interests,
                Step::Interests | Step::Ready => Step::Ready,
            };
        }
        Message::Next => {}
        Message::Back => {
            state.step = match state.step {
                Step::Ready => Step::Interests,
                Step::Welcome | Step::Interests => Step::Welcome,
            };
        }
        Message::ToggleInterest(index) if index < INTERESTS.len() => {
            if !state.selected.remove(&index) {
                state.selected.insert(index);
            }
        }
        Message::ToggleInterest(_) => {}
        Message::Skip | Message::GetStarted => {
            *state = State::default();
            return Event::Completed;
        }
    }
    Event::None
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let progress = (0..3).fold(Row::new().spacing(spacing::XXS), |row, index| {
        row.push(
            container(Space::new())
                .height(4)
                .width(Length::Fill)
                .style(container_styles::progress(index <= state.step.position())),
        )
    });

    let body: Element<'_, Message> = match state.step {
        Step::Welcome => Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("onboarding-welcome-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("onboarding-welcome-subtitle")).size(typography::BODY))
            .push(wide_button(i18n.tr("onboarding-next"), Some(Message::Next)))
            .push(
                button(text(i18n.tr("onboarding-skip")))
                    .on_press(Message::Skip)
                    .style(button_styles::ghost),
            )
            .into(),
        Step::Interests => {
            let chips = INTERESTS
                .iter()
                .enumerate()
                .collect::<Vec<_>>()
                .chunks(3)
                .fold(Column::new().spacing(spacing::XS), |column, chunk| {
                    column.push(chunk.iter().fold(
                        Row::new().spacing(spacing::XS),
                        |row, (index, interest)| {
                            let style = if state.selected.contains(index) {
                                button_styles::selected
                            } else {
                                button_styles::unselected
                            };
                            row.push(
                                button(text(**interest).size(typography::BODY_SM))
                                    .on_press(Message::ToggleInterest(*index))
                                    .padding([spacing::XS, spacing::SM])
                                    .style(style),
                            )
                        },
                    ))
                });
            Column::new()
                .spacing(spacing::MD)
                .push(text(i18n.tr("onboarding-interests-title")).size(typography::TITLE_LG))
                .push(text(i18n.tr("onboarding-interests-subtitle")).size(typography::BODY))
                .push(
                    text(i18n.tr_with_args(
                        "onboarding-interests-count",
                        &[
                            ("count", &state.selected_count().to_string()),
                            ("min", &MIN_INTERESTS.to_string()),
                        ],
                    ))
                    .size(typography::CAPTION),
                )
                .push(chips)
                .push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(
                            button(text(i18n.tr("onboarding-back")))
                                .on_press(Message::Back)
                                .padding(spacing::SM)
                                .style(button_styles::unselected),
                        )
                        .push(wide_button(
                            i18n.tr("onboarding-next"),
                            state.can_proceed().then_some(Message::Next),
                        )),
                )
                .into()
        }
        Step::Ready => Column::new()
            .spacing(spacing::MD)
            .push(text(i18n.tr("onboarding-ready-title")).size(typography::TITLE_LG))
            .push(text(i18n.tr("onboarding-ready-subtitle")).size(typography::BODY))
            .push(wide_button(i18n.tr("onboarding-get-started"), Some(Message::GetStarted)))
            .into(),
    };

    container(
        Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .push(progress)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

fn wide_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    button(text(label).width(Length::Fill).align_x(Horizontal::Center))
        .on_press_maybe(on_press)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(button_styles::primary)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interests_step_requires_minimum_selection() {
        let mut state = State::default();
        update(&mut state, Message::Next);
        assert_eq!(state.step(), Step::Interests);

        update(&mut state, Message::ToggleInterest(0));
        update(&mut state, Message::ToggleInterest(1));
        update(&mut state, Message::Next);
        assert_eq!(state.step(), Step::Interests);

        update(&mut state, Message::ToggleInterest(2));
        update(&mut state, Message::Next);
        assert_eq!(state.step(), Step::Ready);
    }

    #[test]
    fn toggling_twice_deselects() {
        let mut state = State::default();
        update(&mut state, Message::ToggleInterest(4));
        update(&mut state, Message::ToggleInterest(4));
        assert_eq!(state.selected_count(), 0);
        update(&mut state, Message::ToggleInterest(INTERESTS.len()));
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn skip_and_get_started_complete() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Skip), Event::Completed);

        let mut state = State::default();
        assert_eq!(update(&mut state, Message::GetStarted), Event::Completed);
    }

    #[test]
    fn back_from_interests_returns_to_welcome() {
        let mut state = State::default();
        update(&mut state, Message::Next);
        update(&mut state, Message::Back);
        assert_eq!(state.step(), Step::Welcome);
    }
}

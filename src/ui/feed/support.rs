// SPDX-License-Identifier: MPL-2.0
//! Support drawer: tip a creator with a tier or a custom token amount.

use crate::catalog::monetization::SUPPORT_TIERS;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::SuccessTimer;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Space};
use iced::{alignment::Vertical, Element, Length};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Index into [`SUPPORT_TIERS`].
    Tier(usize),
    Custom,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    choice: Option<Choice>,
    custom_amount: String,
    success: SuccessTimer,
}

impl State {
    /// Token amount that would be sent, if the choice is complete.
    #[must_use]
    pub fn amount(&self) -> Option<u32> {
        match self.choice? {
            Choice::Tier(index) => SUPPORT_TIERS.get(index).map(|tier| tier.amount),
            Choice::Custom => self
                .custom_amount
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|amount| *amount >= 1),
        }
    }

    #[must_use]
    pub fn is_showing_success(&self) -> bool {
        self.success.is_showing()
    }

    fn reset(&mut self) {
        *self = State::default();
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Choose(Choice),
    CustomAmountChanged(String),
    Send,
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    Sent { amount: u32 },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Close => {
            state.reset();
            return Event::Close;
        }
        Message::Choose(choice) => state.choice = Some(choice),
        Message::CustomAmountChanged(value) => {
            if value.chars().all(|c| c.is_ascii_digit()) {
                state.custom_amount = value;
            }
        }
        Message::Send => {
            if let Some(amount) = state.amount() {
                state.success.start(Instant::now());
                return Event::Sent { amount };
            }
        }
        Message::Tick(now) => {
            if state.success.is_elapsed(now) {
                state.reset();
                return Event::Close;
            }
        }
    }
    Event::None
}

pub fn view<'a>(state: &'a State, creator: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    if state.success.is_showing() {
        return container(
            Column::new()
                .spacing(spacing::SM)
                .push(text("✓").size(typography::TITLE_LG * 2.0).color(palette::SUCCESS_500))
                .push(text(i18n.tr("support-success-title")).size(typography::TITLE_MD))
                .push(
                    text(i18n.tr_with_args("support-success-body", &[("creator", creator)]))
                        .size(typography::BODY_SM),
                ),
        )
        .padding(spacing::XL)
        .width(Length::Fill)
        .style(container_styles::sheet)
        .into();
    }

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Column::new()
                .push(text(i18n.tr("support-title")).size(typography::TITLE_SM))
                .push(
                    text(i18n.tr_with_args("support-subtitle", &[("creator", creator)]))
                        .size(typography::CAPTION),
                ),
        )
        .push(Space::new().width(Length::Fill))
        .push(button(text("✕")).on_press(Message::Close).style(button_styles::ghost));

    let tiers = SUPPORT_TIERS.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |column, (index, tier)| {
            let chosen = state.choice == Some(Choice::Tier(index));
            let mut label = Column::new()
                .push(text(tier.label).size(typography::BODY))
                .push(text(tier.description).size(typography::CAPTION));
            if tier.popular {
                label = label.push(
                    text(i18n.tr("support-popular"))
                        .size(typography::CAPTION)
                        .color(palette::ACCENT_500),
                );
            }
            let row = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(text(tier.emoji).size(typography::TITLE_MD))
                .push(label.width(Length::Fill))
                .push(text(format!("{} 🪙", tier.amount)).size(typography::BODY));
            column.push(
                button(row)
                    .on_press(Message::Choose(Choice::Tier(index)))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(if chosen { button_styles::selected } else { button_styles::unselected }),
            )
        },
    );

    let custom_chosen = state.choice == Some(Choice::Custom);
    let mut custom = Column::new().spacing(spacing::XS).push(
        button(text(i18n.tr("support-custom")).size(typography::BODY))
            .on_press(Message::Choose(Choice::Custom))
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(if custom_chosen { button_styles::selected } else { button_styles::unselected }),
    );
    if custom_chosen {
        custom = custom.push(
            text_input(&i18n.tr("support-custom-placeholder"), &state.custom_amount)
                .on_input(Message::CustomAmountChanged)
                .on_submit(Message::Send)
                .padding(spacing::XS),
        );
    }

    let send_label = match state.amount() {
        Some(amount) => i18n.tr_with_args("support-send-amount", &[("amount", &amount.to_string())]),
        None => i18n.tr("support-send"),
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(header)
            .push(scrollable(Column::new().spacing(spacing::SM).push(tiers).push(custom)).height(Length::Fill))
            .push(
                button(text(send_label))
                    .on_press_maybe(state.amount().map(|_| Message::Send))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(button_styles::primary),
            ),
    )
    .max_height(sizing::DRAWER_MAX_HEIGHT)
    .style(container_styles::sheet)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_send_without_a_choice() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Send), Event::None);
        assert!(!state.is_showing_success());
    }

    #[test]
    fn tier_sends_its_amount() {
        let mut state = State::default();
        update(&mut state, Message::Choose(Choice::Tier(1)));
        assert_eq!(update(&mut state, Message::Send), Event::Sent { amount: 25 });
        assert!(state.is_showing_success());
    }

    #[test]
    fn custom_amount_must_be_positive() {
        let mut state = State::default();
        update(&mut state, Message::Choose(Choice::Custom));
        update(&mut state, Message::CustomAmountChanged("0".into()));
        assert_eq!(state.amount(), None);
        update(&mut state, Message::CustomAmountChanged("12a".into()));
        assert_eq!(state.custom_amount, "0");
        update(&mut state, Message::CustomAmountChanged("40".into()));
        assert_eq!(state.amount(), Some(40));
    }

    #[test]
    fn success_closes_after_timeout() {
        let mut state = State::default();
        update(&mut state, Message::Choose(Choice::Tier(0)));
        update(&mut state, Message::Send);

        let later = Instant::now() + SuccessTimer::DURATION;
        assert_eq!(update(&mut state, Message::Tick(later)), Event::Close);
        assert!(state.amount().is_none());
        assert!(!state.is_showing_success());
    }
}

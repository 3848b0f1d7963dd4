// SPDX-License-Identifier: MPL-2.0
//! Gift picker opened from a creator's profile.

use crate::catalog::monetization::{gift, Gift, GiftTier, GIFTS, SAMPLE_BALANCE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::SuccessTimer;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Space};
use iced::{Element, Length};
use std::time::Instant;

const GIFTS_PER_ROW: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct State {
    selected: Option<u8>,
    message: String,
    success: SuccessTimer,
}

impl State {
    #[must_use]
    pub fn selected(&self) -> Option<&'static Gift> {
        self.selected.and_then(gift)
    }

    #[must_use]
    pub fn balance(&self) -> u32 {
        SAMPLE_BALANCE
    }

    #[must_use]
    pub fn can_send(&self) -> bool {
        self.selected()
            .is_some_and(|gift| gift.cost <= self.balance())
    }

    #[must_use]
    pub fn is_showing_success(&self) -> bool {
        self.success.is_showing()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    Select(u8),
    MessageChanged(String),
    Send,
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    Sent { gift: &'static str, cost: u32 },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Close => {
            *state = State::default();
            return Event::Close;
        }
        Message::Select(id) => {
            if gift(id).is_some() {
                state.selected = Some(id);
            }
        }
        Message::MessageChanged(value) => state.message = value,
        Message::Send => {
            if let Some(gift) = state.selected().filter(|_| state.can_send()) {
                state.success.start(Instant::now());
                tracing::info!(gift = gift.name, cost = gift.cost, "gift sent");
                return Event::Sent {
                    gift: gift.name,
                    cost: gift.cost,
                };
            }
        }
        Message::Tick(now) => {
            if state.success.is_elapsed(now) {
                *state = State::default();
                return Event::Close;
            }
        }
    }
    Event::None
}

pub fn view<'a>(state: &'a State, creator: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
    if let (true, Some(gift)) = (state.is_showing_success(), state.selected()) {
        return container(
            Column::new()
                .spacing(spacing::SM)
                .align_x(Horizontal::Center)
                .push(text(gift.icon).size(typography::TITLE_LG * 2.0))
                .push(text(i18n.tr("gift-success-title")).size(typography::TITLE_MD))
                .push(
                    text(i18n.tr_with_args(
                        "gift-success-body",
                        &[("gift", gift.name), ("creator", creator)],
                    ))
                    .size(typography::BODY_SM),
                ),
        )
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(container_styles::sheet)
        .into();
    }

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Column::new()
                .push(text(i18n.tr("gift-title")).size(typography::TITLE_SM))
                .push(
                    text(i18n.tr_with_args(
                        "wallet-balance-tokens",
                        &[("count", &state.balance().to_string())],
                    ))
                    .size(typography::CAPTION)
                    .color(palette::ACCENT_500),
                ),
        )
        .push(Space::new().width(Length::Fill))
        .push(button(text("✕")).on_press(Message::Close).style(button_styles::ghost));

    let tiers = GiftTier::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::MD), |column, tier| {
            let gifts: Vec<&Gift> = GIFTS.iter().filter(|gift| gift.tier == tier).collect();
            let grid = gifts.chunks(GIFTS_PER_ROW).fold(
                Column::new().spacing(spacing::XS),
                |grid, chunk| {
                    grid.push(chunk.iter().fold(Row::new().spacing(spacing::XS), |row, gift| {
                        row.push(gift_tile(*gift, state.selected == Some(gift.id), state.balance()))
                    }))
                },
            );
            column
                .push(text(i18n.tr(tier.label_key())).size(typography::BODY_SM))
                .push(grid)
        });

    let note = text_input(&i18n.tr("gift-message-placeholder"), &state.message)
        .on_input(Message::MessageChanged)
        .padding(spacing::XS);

    let send_label = match state.selected() {
        Some(gift) => i18n.tr_with_args("gift-send-cost", &[("cost", &gift.cost.to_string())]),
        None => i18n.tr("gift-send"),
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(header)
            .push(scrollable(tiers).height(Length::Fill))
            .push(note)
            .push(
                button(text(send_label))
                    .on_press_maybe(state.can_send().then_some(Message::Send))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(button_styles::primary),
            ),
    )
    .max_height(sizing::DRAWER_MAX_HEIGHT)
    .style(container_styles::sheet)
    .into()
}

fn gift_tile(gift: &'static Gift, chosen: bool, balance: u32) -> Element<'static, Message> {
    let content = Column::new()
        .align_x(Horizontal::Center)
        .push(text(gift.icon).size(typography::TITLE_MD))
        .push(text(gift.name).size(typography::CAPTION))
        .push(text(format!("{} 🪙", gift.cost)).size(typography::CAPTION));

    button(content)
        .on_press_maybe((gift.cost <= balance).then_some(Message::Select(gift.id)))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(if chosen { button_styles::selected } else { button_styles::unselected })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_requires_selection() {
        let mut state = State::default();
        assert!(!state.can_send());
        assert_eq!(update(&mut state, Message::Send), Event::None);
    }

    #[test]
    fn unknown_gift_is_ignored() {
        let mut state = State::default();
        update(&mut state, Message::Select(42));
        assert!(state.selected().is_none());
    }

    #[test]
    fn sending_shows_success_then_closes() {
        let mut state = State::default();
        update(&mut state, Message::Select(5));
        update(&mut state, Message::MessageChanged("Thanks!".into()));
        assert_eq!(
            update(&mut state, Message::Send),
            Event::Sent { gift: "Crown", cost: 50 }
        );
        assert!(state.is_showing_success());

        let now = Instant::now();
        assert_eq!(update(&mut state, Message::Tick(now)), Event::None);
        assert_eq!(
            update(&mut state, Message::Tick(now + SuccessTimer::DURATION)),
            Event::Close
        );
        assert!(state.selected().is_none());
        assert!(state.message.is_empty());
    }

    #[test]
    fn balance_is_the_sample_balance() {
        assert_eq!(State::default().balance(), 825);
    }
}

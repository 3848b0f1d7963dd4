// SPDX-License-Identifier: MPL-2.0
//! Token wallet overlay: balance, packages and history.

use crate::catalog::monetization::{
    format_date, wallet_history, TokenPackage, TokenTransaction, SAMPLE_BALANCE, TOKEN_PACKAGES,
};
use crate::i18n::fluent::I18n;
use crate::ui::components::{header, section};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    selected: Option<usize>,
    history: Vec<TokenTransaction>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            selected: None,
            history: wallet_history(),
        }
    }
}

impl State {
    #[must_use]
    pub fn balance(&self) -> u32 {
        SAMPLE_BALANCE
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static TokenPackage> {
        self.selected.and_then(|index| TOKEN_PACKAGES.get(index))
    }

    #[must_use]
    pub fn history(&self) -> &[TokenTransaction] {
        &self.history
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    SelectPackage(usize),
    Purchase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    /// Tokens including the bonus. The shell acknowledges with a toast.
    PurchaseRequested { tokens: u32 },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => {
            state.selected = None;
            Event::Close
        }
        Message::SelectPackage(index) => {
            if index < TOKEN_PACKAGES.len() {
                state.selected = Some(index);
            }
            Event::None
        }
        Message::Purchase => match state.selected() {
            Some(package) => {
                let tokens = package.tokens + package.bonus.unwrap_or(0);
                tracing::info!(tokens, price = package.price, "token purchase requested");
                state.selected = None;
                Event::PurchaseRequested { tokens }
            }
            None => Event::None,
        },
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let balance = container(
        Column::new()
            .spacing(spacing::XXS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(text(i18n.tr("wallet-balance")).size(typography::BODY_SM))
            .push(text(format!("🪙 {}", state.balance())).size(typography::TITLE_LG))
            .push(
                text(i18n.tr_with_args(
                    "wallet-balance-tokens",
                    &[("count", &state.balance().to_string())],
                ))
                .size(typography::CAPTION),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(container_styles::highlighted);

    let packages = TOKEN_PACKAGES.iter().enumerate().fold(
        Column::new().spacing(spacing::XS),
        |column, (index, package)| {
            let mut label = Column::new()
                .width(Length::Fill)
                .push(text(format!("🪙 {}", package.tokens)).size(typography::BODY));
            if let Some(bonus) = package.bonus {
                label = label.push(
                    text(i18n.tr_with_args("wallet-bonus", &[("count", &bonus.to_string())]))
                        .size(typography::CAPTION)
                        .color(palette::SUCCESS_500),
                );
            }
            if package.popular {
                label = label.push(
                    text(i18n.tr("wallet-popular"))
                        .size(typography::CAPTION)
                        .color(palette::ACCENT_500),
                );
            }
            column.push(
                button(
                    Row::new()
                        .align_y(Vertical::Center)
                        .push(label)
                        .push(text(package.price).size(typography::BODY)),
                )
                .on_press(Message::SelectPackage(index))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(if state.selected == Some(index) {
                    button_styles::selected
                } else {
                    button_styles::unselected
                }),
            )
        },
    );

    let buy = button(text(i18n.tr("wallet-buy")).align_x(Horizontal::Center).width(Length::Fill))
        .on_press_maybe(state.selected().map(|_| Message::Purchase))
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(button_styles::primary);

    let history = state.history.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, entry| {
            let mut detail = Column::new()
                .width(Length::Fill)
                .push(text(i18n.tr(entry.movement.label_key())).size(typography::BODY))
                .push(text(format_date(entry.date)).size(typography::CAPTION));
            if let Some(recipient) = entry.recipient {
                detail = detail.push(text(recipient).size(typography::CAPTION).color(palette::GRAY_500));
            }
            let amount_color = if entry.tokens < 0 {
                palette::ERROR_500
            } else {
                palette::SUCCESS_500
            };
            column.push(
                Row::new()
                    .align_y(Vertical::Center)
                    .push(detail)
                    .push(text(format!("{:+}", entry.tokens)).color(amount_color)),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(balance)
        .push(section::view(
            i18n.tr("wallet-packages"),
            Column::new().spacing(spacing::SM).push(packages).push(buy),
        ))
        .push(section::view(i18n.tr("wallet-history"), history));

    container(
        Column::new()
            .push(header::view(i18n.tr("wallet-title"), Some(Message::Back), None))
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
    fn purchase_needs_a_package() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Purchase), Event::None);
    }

    #[test]
    fn purchase_includes_bonus() {
        let mut state = State::default();
        update(&mut state, Message::SelectPackage(1));
        assert_eq!(
            update(&mut state, Message::Purchase),
            Event::PurchaseRequested { tokens: 550 }
        );
        assert!(state.selected().is_none());
    }

    #[test]
    fn unknown_package_is_ignored() {
        let mut state = State::default();
        update(&mut state, Message::SelectPackage(9));
        assert!(state.selected().is_none());
    }

    #[test]
    fn history_lists_sample_movements() {
        let state = State::default();
        assert_eq!(state.history().len(), 5);
        assert_eq!(state.balance(), 825);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Earnings dashboard overlay.

use crate::catalog::monetization::{
    format_date, format_dollars, payouts, EarningsRange, Payout, EARNINGS_BALANCE_CENTS,
    EARNINGS_GROWTH, REVENUE_BREAKDOWN, WEEKLY_EARNINGS,
};
use crate::i18n::fluent::I18n;
use crate::ui::components::{bar_chart, header, section, segmented};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    range: EarningsRange,
    payouts: Vec<Payout>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            range: EarningsRange::default(),
            payouts: payouts(),
        }
    }
}

impl State {
    #[must_use]
    pub fn range(&self) -> EarningsRange {
        self.range
    }

    /// Sum of payouts that have not cleared yet.
    #[must_use]
    pub fn pending_cents(&self) -> u64 {
        self.payouts
            .iter()
            .filter(|payout| payout.pending)
            .map(|payout| payout.cents)
            .sum()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    SetRange(EarningsRange),
    Withdraw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    /// The shell acknowledges with a toast.
    WithdrawRequested { cents: u64 },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Close,
        Message::SetRange(range) => {
            state.range = range;
            Event::None
        }
        Message::Withdraw => {
            let cents = EARNINGS_BALANCE_CENTS.saturating_sub(state.pending_cents());
            tracing::info!(cents, "withdrawal requested");
            Event::WithdrawRequested { cents }
        }
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
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(text(i18n.tr("earnings-balance")).size(typography::BODY_SM))
            .push(text(format_dollars(EARNINGS_BALANCE_CENTS)).size(typography::TITLE_LG))
            .push(
                text(i18n.tr_with_args("earnings-growth", &[("growth", EARNINGS_GROWTH)]))
                    .size(typography::CAPTION)
                    .color(palette::SUCCESS_500),
            )
            .push(
                text(i18n.tr_with_args(
                    "earnings-pending",
                    &[("amount", &format_dollars(state.pending_cents()))],
                ))
                .size(typography::CAPTION),
            )
            .push(
                button(text(i18n.tr("earnings-withdraw")))
                    .on_press(Message::Withdraw)
                    .padding([spacing::XS, spacing::LG])
                    .style(button_styles::primary),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fill)
    .style(container_styles::highlighted);

    let breakdown = REVENUE_BREAKDOWN.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, (source, dollars)| {
            column.push(
                Row::new()
                    .push(text(*source).size(typography::BODY_SM).width(Length::Fill))
                    .push(text(format_dollars(dollars * 100)).size(typography::BODY_SM)),
            )
        },
    );

    let history = state.payouts.iter().fold(
        Column::new().spacing(spacing::SM),
        |column, payout| {
            let status = if payout.pending {
                text(i18n.tr("earnings-status-pending")).color(palette::WARNING_500)
            } else {
                text(i18n.tr("earnings-status-completed")).color(palette::SUCCESS_500)
            };
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(
                        Column::new()
                            .width(Length::Fill)
                            .push(text(payout.source).size(typography::BODY))
                            .push(text(format_date(payout.date)).size(typography::CAPTION)),
                    )
                    .push(
                        Column::new()
                            .align_x(Horizontal::Right)
                            .push(text(format!("+{}", format_dollars(payout.cents))).size(typography::BODY))
                            .push(status.size(typography::CAPTION)),
                    ),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(segmented::view(
            EarningsRange::ALL.map(|range| (range, i18n.tr(range.label_key()))),
            state.range,
            Message::SetRange,
        ))
        .push(balance)
        .push(section::view(
            i18n.tr("earnings-weekly"),
            bar_chart::view(WEEKLY_EARNINGS, palette::SUCCESS_500),
        ))
        .push(section::view(
            i18n.tr("earnings-breakdown"),
            Column::new()
                .spacing(spacing::SM)
                .push(bar_chart::view(REVENUE_BREAKDOWN, palette::BRAND_500))
                .push(breakdown),
        ))
        .push(section::view(i18n.tr("earnings-history"), history));

    container(
        Column::new()
            .push(header::view(i18n.tr("earnings-title"), Some(Message::Back), None))
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
    fn pending_payouts_are_summed() {
        assert_eq!(State::default().pending_cents(), 80_000);
    }

    #[test]
    fn withdraw_excludes_pending() {
        let mut state = State::default();
        assert_eq!(
            update(&mut state, Message::Withdraw),
            Event::WithdrawRequested {
                cents: EARNINGS_BALANCE_CENTS - 80_000
            }
        );
    }

    #[test]
    fn range_defaults_to_month() {
        let mut state = State::default();
        assert_eq!(state.range(), EarningsRange::Month);
        update(&mut state, Message::SetRange(EarningsRange::Year));
        assert_eq!(state.range(), EarningsRange::Year);
    }
}

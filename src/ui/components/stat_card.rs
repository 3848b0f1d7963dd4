// SPDX-License-Identifier: MPL-2.0
//! Headline figure card.

use crate::catalog::analytics::StatCard;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{container, text, Column, Row};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(card: &StatCard, i18n: &I18n) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .push(
            Row::new()
                .spacing(spacing::XXS)
                .push(text(card.glyph).size(typography::BODY))
                .push(text(i18n.tr(card.label_key)).size(typography::BODY_SM)),
        )
        .push(text(card.value).size(typography::TITLE_MD))
        .push(
            text(card.change)
                .size(typography::CAPTION)
                .color(palette::SUCCESS_500),
        );

    container(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(container_styles::card)
        .into()
}

/// Cards laid out two per row.
pub fn grid<'a, Message: 'a>(cards: &[StatCard], i18n: &I18n) -> Element<'a, Message> {
    cards
        .chunks(2)
        .fold(Column::new().spacing(spacing::XS), |column, pair| {
            column.push(
                pair.iter()
                    .fold(Row::new().spacing(spacing::XS), |row, card| {
                        row.push(view(card, i18n))
                    }),
            )
        })
        .into()
}

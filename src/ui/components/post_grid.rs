// SPDX-License-Identifier: MPL-2.0
//! Three-column grid of lesson tiles on profile pages.

use crate::catalog::creators::ProfilePost;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{container, text, Column, Row, Space};
use iced::{Element, Length};

const COLUMNS: usize = 3;

pub fn view<'a, Message: 'a>(posts: &'a [ProfilePost]) -> Element<'a, Message> {
    posts
        .chunks(COLUMNS)
        .fold(Column::new().spacing(spacing::XS), |column, chunk| {
            let row = chunk
                .iter()
                .fold(Row::new().spacing(spacing::XS), |row, post| row.push(tile(post)));
            // Pad the last row so tiles keep their width
            let row = (chunk.len()..COLUMNS).fold(row, |row, _| {
                row.push(Space::new().width(Length::Fill))
            });
            column.push(row)
        })
        .into()
}

fn tile<'a, Message: 'a>(post: &'a ProfilePost) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(post.title).size(typography::BODY_SM))
            .push(Space::new().height(Length::Fill))
            .push(
                text(format!("👥 {}", post.learners_helped))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_500),
            ),
    )
    .padding(spacing::XS)
    .width(Length::Fill)
    .height(Length::Fixed(120.0))
    .style(container_styles::card)
    .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Titled card used to group content on dashboard screens.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{container, text, Column};
use iced::{Element, Length};

pub fn view<'a, Message: 'a>(
    title: String,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(spacing::SM)
            .push(text(title).size(typography::TITLE_SM))
            .push(content),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(container_styles::card)
    .into()
}

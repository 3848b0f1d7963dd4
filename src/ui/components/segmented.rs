// SPDX-License-Identifier: MPL-2.0
//! A row of mutually exclusive toggle buttons.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Row};
use iced::{Element, Length};

/// One button per option; the one equal to `selected` is highlighted.
pub fn view<'a, T, Message>(
    options: impl IntoIterator<Item = (T, String)>,
    selected: T,
    on_select: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + PartialEq,
    Message: Clone + 'a,
{
    options
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (value, label)| {
            let style = if value == selected {
                button_styles::selected
            } else {
                button_styles::unselected
            };
            row.push(
                button(text(label).size(typography::BODY_SM))
                    .on_press(on_select(value))
                    .padding([spacing::XXS, spacing::SM])
                    .width(Length::Shrink)
                    .style(style),
            )
        })
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Header shared by overlay screens.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Row, Space};
use iced::{alignment, Element, Length};

/// `← title` with an optional trailing widget on the right.
pub fn view<'a, Message: Clone + 'a>(
    title: String,
    on_back: Option<Message>,
    trailing: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::MD]);

    if let Some(message) = on_back {
        row = row.push(
            button(text("←").size(typography::ICON))
                .on_press(message)
                .padding(spacing::XXS)
                .style(button_styles::ghost),
        );
    }

    row = row
        .push(text(title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill));

    if let Some(trailing) = trailing {
        row = row.push(trailing);
    }

    row.into()
}

// SPDX-License-Identifier: MPL-2.0
//! Bottom bar switching between the four tabs.

use crate::i18n::fluent::I18n;
use crate::navigation::Tab;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Select(Tab),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: Tab,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let buttons = Tab::ALL.into_iter().fold(
        Row::new().spacing(spacing::XXS).align_y(alignment::Vertical::Center),
        |row, tab| row.push(tab_button(tab, tab == ctx.active, ctx.i18n)),
    );

    container(buttons)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TAB_BAR_HEIGHT))
        .padding([spacing::XXS, spacing::XS])
        .style(container_styles::tab_bar)
        .into()
}

fn tab_button(tab: Tab, active: bool, i18n: &I18n) -> Element<'_, Message> {
    let emphasised = tab == Tab::Create;
    let mut content = Column::new()
        .align_x(alignment::Horizontal::Center)
        .push(text(tab.glyph()).size(typography::ICON));
    if !emphasised {
        content = content.push(text(i18n.tr(tab.label_key())).size(typography::CAPTION));
    }

    button(container(content).center_x(Length::Fill))
        .on_press(Message::Select(tab))
        .width(Length::Fill)
        .padding(spacing::XXS)
        .style(button_styles::tab(active, emphasised))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Creator studio overlay: audience analytics.

use crate::catalog::analytics::{StudioRange, STUDIO_ENGAGEMENT, STUDIO_STATS, STUDIO_TOP_VIDEOS, STUDIO_VIEWS};
use crate::i18n::fluent::I18n;
use crate::ui::components::{bar_chart, header, section, segmented, stat_card};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    range: StudioRange,
}

impl State {
    #[must_use]
    pub fn range(&self) -> StudioRange {
        self.range
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    SetRange(StudioRange),
    EditVideo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    OpenEditor,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => Event::Close,
        Message::SetRange(range) => {
            state.range = range;
            Event::None
        }
        Message::EditVideo => Event::OpenEditor,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let ranges = segmented::view(
        StudioRange::ALL.map(|range| (range, range.label().to_string())),
        ctx.state.range,
        Message::SetRange,
    );

    let top_videos = STUDIO_TOP_VIDEOS.iter().enumerate().fold(
        Column::new().spacing(spacing::SM),
        |column, (rank, video)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(text(format!("#{}", rank + 1)).size(typography::BODY_SM).color(palette::GRAY_500))
                    .push(text(video.thumbnail).size(typography::TITLE_MD))
                    .push(
                        Column::new()
                            .width(Length::Fill)
                            .push(text(video.title).size(typography::BODY))
                            .push(
                                text(format!("▶ {} · ♥ {}", video.views, video.likes))
                                    .size(typography::CAPTION)
                                    .color(palette::GRAY_500),
                            ),
                    )
                    .push(text(video.engagement).size(typography::BODY_SM).color(palette::SUCCESS_500)),
            )
        },
    );

    let body = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(ranges)
        .push(stat_card::grid(STUDIO_STATS, i18n))
        .push(section::view(
            i18n.tr("studio-views-chart"),
            bar_chart::view(STUDIO_VIEWS, palette::BRAND_500),
        ))
        .push(section::view(
            i18n.tr("studio-engagement-chart"),
            bar_chart::view(STUDIO_ENGAGEMENT, palette::ACCENT_500),
        ))
        .push(section::view(i18n.tr("studio-top-videos"), top_videos));

    container(
        Column::new()
            .push(header::view(
                i18n.tr("studio-title"),
                Some(Message::Back),
                Some(
                    button(text(i18n.tr("studio-edit")).size(typography::BODY_SM))
                        .on_press(Message::EditVideo)
                        .padding([spacing::XXS, spacing::SM])
                        .style(button_styles::primary)
                        .into(),
                ),
            ))
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
    fn defaults_to_thirty_days() {
        assert_eq!(State::default().range(), StudioRange::ThirtyDays);
    }

    #[test]
    fn range_changes_and_back_closes() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::SetRange(StudioRange::SevenDays)), Event::None);
        assert_eq!(state.range(), StudioRange::SevenDays);
        assert_eq!(update(&mut state, Message::Back), Event::Close);
    }

    #[test]
    fn edit_opens_the_editor() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::EditVideo), Event::OpenEditor);
    }
}

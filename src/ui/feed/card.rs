// SPDX-License-Identifier: MPL-2.0
//! Full-height lesson card with its caption and on-video actions.

use super::{Message, Sheet};
use crate::catalog::compact_count;
use crate::catalog::lessons::Lesson;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space, Stack};
use iced::{Element, Length};

/// Per-card flags owned by the feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardStatus {
    pub saved: bool,
    pub following: bool,
    pub liked: bool,
    pub expanded: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

pub fn view<'a>(lesson: &'a Lesson, status: CardStatus, i18n: &'a I18n) -> Element<'a, Message> {
    let stage = container(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(text(lesson.avatar).size(typography::TITLE_LG * 3.0))
            .push(
                text(lesson.title)
                    .size(typography::TITLE_MD)
                    .color(palette::WHITE)
                    .align_x(Horizontal::Center),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(container_styles::video_stage);

    let top_bar = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(video_button("🔍", false, Message::OpenSearch))
        .push(Space::new().width(Length::Fill))
        .push(
            text(i18n.tr("feed-header"))
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(Space::new().width(Length::Fill))
        .push(video_button("🔔", false, Message::OpenActivity));

    let actions = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(nav_button("▲", status.has_previous.then_some(Message::Previous)))
        .push(action(
            video_button("🔖", status.saved, Message::ToggleSave),
            i18n.tr(if status.saved { "feed-saved" } else { "feed-save" }),
        ))
        .push(action(
            video_button("🎁", false, Message::OpenSheet(Sheet::Support)),
            i18n.tr("feed-support"),
        ))
        .push(action(
            video_button("💬", false, Message::OpenSheet(Sheet::Comments)),
            compact_count(lesson.comments),
        ))
        .push(action(
            video_button("♥", status.liked, Message::ToggleLike),
            compact_count(lesson.likes + u64::from(status.liked)),
        ))
        .push(video_button("⋯", false, Message::OpenSheet(Sheet::Menu)))
        .push(nav_button("▼", status.has_next.then_some(Message::Next)));

    let follow_label = if status.following {
        i18n.tr("feed-following")
    } else {
        i18n.tr("feed-follow")
    };
    let creator_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(lesson.avatar).size(typography::TITLE_MD))
        .push(
            button(
                Column::new()
                    .push(text(lesson.creator).size(typography::BODY).color(palette::WHITE))
                    .push(
                        text(lesson.credibility)
                            .size(typography::CAPTION)
                            .color(palette::GRAY_300),
                    ),
            )
            .on_press(Message::OpenCreator)
            .padding(0)
            .style(button_styles::on_video(false)),
        )
        .push(
            button(text(follow_label).size(typography::CAPTION))
                .on_press(Message::ToggleFollow)
                .style(if status.following {
                    button_styles::unselected
                } else {
                    button_styles::selected
                }),
        );

    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .push(creator_row)
        .push(text(lesson.title).size(typography::TITLE_SM).color(palette::WHITE))
        .push(text(lesson.subtitle).size(typography::BODY_SM).color(palette::GRAY_300));

    if status.expanded {
        let details = [
            ("feed-details-category", lesson.category.to_string()),
            ("feed-details-difficulty", i18n.tr(lesson.difficulty.label_key())),
            ("feed-details-duration", lesson.duration.to_string()),
        ];
        caption = details.into_iter().fold(caption, |column, (key, value)| {
            column.push(
                text(format!("{}: {value}", i18n.tr(key)))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_100),
            )
        });
    }

    caption = caption.push(
        button(
            text(if status.expanded {
                i18n.tr("feed-less")
            } else {
                i18n.tr("feed-more")
            })
            .size(typography::CAPTION),
        )
        .on_press(Message::ToggleExpanded)
        .style(button_styles::on_video(status.expanded)),
    );

    let bottom = Row::new()
        .padding(spacing::MD)
        .spacing(spacing::SM)
        .align_y(Vertical::Bottom)
        .push(caption.width(Length::Fill))
        .push(actions);

    Stack::new()
        .push(stage)
        .push(
            Column::new()
                .push(top_bar)
                .push(Space::new().height(Length::Fill))
                .push(bottom),
        )
        .into()
}

fn video_button(glyph: &str, active: bool, message: Message) -> Element<'_, Message> {
    button(text(glyph).size(typography::ICON).align_x(Horizontal::Center))
        .on_press(message)
        .padding(spacing::XS)
        .style(button_styles::on_video(active))
        .into()
}

fn nav_button(glyph: &str, message: Option<Message>) -> Element<'_, Message> {
    button(text(glyph).size(typography::BODY))
        .on_press_maybe(message)
        .padding(spacing::XXS)
        .style(button_styles::on_video(false))
        .into()
}

fn action<'a>(control: Element<'a, Message>, label: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(control)
        .push(text(label).size(typography::CAPTION).color(palette::WHITE))
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! Activity inbox overlay.

use crate::catalog::activity::{sample_inbox, Activity};
use crate::i18n::fluent::I18n;
use crate::ui::components::{header, segmented};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Unread,
}

#[derive(Debug, Clone)]
pub struct State {
    entries: Vec<Activity>,
    filter: Filter,
}

impl Default for State {
    fn default() -> Self {
        Self {
            entries: sample_inbox(),
            filter: Filter::default(),
        }
    }
}

impl State {
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|entry| !entry.read).count()
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Entries passing the current filter, newest first.
    #[must_use]
    pub fn visible(&self) -> Vec<&Activity> {
        self.entries
            .iter()
            .filter(|entry| self.filter == Filter::All || !entry.read)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    SetFilter(Filter),
    MarkRead(u32),
    MarkAllRead,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => return Event::Close,
        Message::SetFilter(filter) => state.filter = filter,
        Message::MarkRead(id) => {
            if let Some(entry) = state.entries.iter_mut().find(|entry| entry.id == id) {
                entry.read = true;
            }
        }
        Message::MarkAllRead => {
            for entry in &mut state.entries {
                entry.read = true;
            }
        }
    }
    Event::None
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let unread = state.unread_count();

    let mark_all = button(text(i18n.tr("activity-mark-all")).size(typography::BODY_SM))
        .on_press_maybe((unread > 0).then_some(Message::MarkAllRead))
        .style(button_styles::ghost);

    let filters = segmented::view(
        [
            (Filter::All, i18n.tr("activity-filter-all")),
            (
                Filter::Unread,
                i18n.tr_with_args("activity-filter-unread", &[("count", &unread.to_string())]),
            ),
        ],
        state.filter,
        Message::SetFilter,
    );

    let entries = state.visible();
    let list: Element<'_, Message> = if entries.is_empty() {
        text(i18n.tr("activity-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_500)
            .into()
    } else {
        entries
            .into_iter()
            .fold(Column::new().spacing(spacing::XS), |column, entry| {
                column.push(row(entry))
            })
            .into()
    };

    container(
        Column::new()
            .push(header::view(
                i18n.tr("activity-title"),
                Some(Message::Back),
                Some(mark_all.into()),
            ))
            .push(container(filters).padding([0.0, spacing::MD]))
            .push(scrollable(container(list).padding(spacing::MD)).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

fn row(entry: &Activity) -> Element<'_, Message> {
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(text(entry.avatar.as_str()).size(typography::TITLE_MD))
        .push(
            Column::new()
                .width(Length::Fill)
                .push(
                    text(format!("{} {}", entry.actor, entry.message)).size(typography::BODY_SM),
                )
                .push(
                    text(format!("{} {}", entry.kind.glyph(), entry.when))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_500),
                ),
        );
    if !entry.read {
        content = content.push(text("●").size(typography::CAPTION).color(palette::BRAND_500));
    }

    button(content)
        .on_press(Message::MarkRead(entry.id))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(if entry.read {
            button_styles::ghost
        } else {
            button_styles::unselected
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_inbox_has_three_unread() {
        assert_eq!(State::default().unread_count(), 3);
    }

    #[test]
    fn marking_one_read_decrements() {
        let mut state = State::default();
        update(&mut state, Message::MarkRead(1));
        assert_eq!(state.unread_count(), 2);
        // Already read
        update(&mut state, Message::MarkRead(4));
        assert_eq!(state.unread_count(), 2);
    }

    #[test]
    fn unread_filter_hides_read_entries() {
        let mut state = State::default();
        update(&mut state, Message::SetFilter(Filter::Unread));
        assert_eq!(state.visible().len(), 3);
        update(&mut state, Message::MarkAllRead);
        assert!(state.visible().is_empty());
        assert_eq!(state.unread_count(), 0);
    }
}

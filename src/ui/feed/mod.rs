// SPDX-License-Identifier: MPL-2.0
//! Home feed: one lesson at a time with its drawers and overflow menu.
//!
//! Each lesson keeps its own comment thread for the whole session. Only one
//! sheet (comments, support or the overflow menu) is open at a time, and
//! moving to another lesson closes it.

pub mod card;
pub mod comments;
pub mod support;

use crate::catalog::lessons::{Lesson, OverflowAction, FEED};
use crate::i18n::fluent::I18n;
use crate::navigation::CreatorId;
use crate::ui::design_tokens::spacing;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, mouse_area, text, Column, Stack};
use iced::{Element, Length};
use std::collections::BTreeSet;
use std::time::Instant;

/// Drawer currently covering the lower part of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Sheet {
    #[default]
    None,
    Comments,
    Support,
    Menu,
}

#[derive(Debug, Clone)]
pub struct State {
    index: usize,
    saved: BTreeSet<usize>,
    liked: BTreeSet<usize>,
    following: BTreeSet<&'static str>,
    expanded: bool,
    sheet: Sheet,
    threads: Vec<comments::State>,
    support: support::State,
}

impl Default for State {
    fn default() -> Self {
        Self {
            index: 0,
            saved: BTreeSet::new(),
            liked: BTreeSet::new(),
            following: BTreeSet::new(),
            expanded: false,
            sheet: Sheet::None,
            threads: FEED.iter().map(|_| comments::State::default()).collect(),
            support: support::State::default(),
        }
    }
}

impl State {
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current(&self) -> &'static Lesson {
        &FEED[self.index.min(FEED.len() - 1)]
    }

    #[must_use]
    pub fn is_saved(&self, index: usize) -> bool {
        self.saved.contains(&index)
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn sheet(&self) -> Sheet {
        self.sheet
    }

    /// Whether a timed confirmation is waiting for ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.support.is_showing_success()
    }

    fn thread_mut(&mut self) -> Option<&mut comments::State> {
        self.threads.get_mut(self.index)
    }

    fn go_to(&mut self, index: usize) {
        if index != self.index && index < FEED.len() {
            self.index = index;
            self.expanded = false;
            self.close_sheet();
        }
    }

    fn close_sheet(&mut self) {
        if self.sheet == Sheet::Support {
            support::update(&mut self.support, support::Message::Close);
        }
        self.sheet = Sheet::None;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Previous,
    ToggleSave,
    ToggleLike,
    ToggleFollow,
    ToggleExpanded,
    OpenCreator,
    OpenSearch,
    OpenActivity,
    OpenSheet(Sheet),
    CloseSheet,
    MenuAction(OverflowAction),
    Comments(comments::Message),
    Support(support::Message),
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenCreator(CreatorId),
    OpenSearch,
    OpenActivity,
    /// An overflow action was chosen; the shell confirms it with a toast.
    MenuAction(OverflowAction),
    SupportSent { amount: u32 },
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Next => state.go_to(state.index + 1),
        Message::Previous => {
            if let Some(previous) = state.index.checked_sub(1) {
                state.go_to(previous);
            }
        }
        Message::ToggleSave => toggle(&mut state.saved, state.index),
        Message::ToggleLike => toggle(&mut state.liked, state.index),
        Message::ToggleFollow => {
            let creator = state.current().creator;
            if !state.following.remove(creator) {
                state.following.insert(creator);
            }
        }
        Message::ToggleExpanded => state.expanded = !state.expanded,
        Message::OpenCreator => return Event::OpenCreator(CreatorId::new(state.current().id)),
        Message::OpenSearch => return Event::OpenSearch,
        Message::OpenActivity => return Event::OpenActivity,
        Message::OpenSheet(sheet) => {
            state.close_sheet();
            state.sheet = sheet;
        }
        Message::CloseSheet => state.close_sheet(),
        Message::MenuAction(action) => {
            state.sheet = Sheet::None;
            tracing::debug!(?action, lesson = state.current().id, "overflow action");
            return Event::MenuAction(action);
        }
        Message::Comments(message) => {
            if let Some(thread) = state.thread_mut() {
                if comments::update(thread, message) == comments::Event::Close {
                    state.sheet = Sheet::None;
                }
            }
        }
        Message::Support(message) => return forward_support(state, message),
        Message::Tick(now) => {
            if state.needs_tick() {
                return forward_support(state, support::Message::Tick(now));
            }
        }
    }
    Event::None
}

fn forward_support(state: &mut State, message: support::Message) -> Event {
    match support::update(&mut state.support, message) {
        support::Event::None => Event::None,
        support::Event::Close => {
            state.sheet = Sheet::None;
            Event::None
        }
        support::Event::Sent { amount } => Event::SupportSent { amount },
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state = ctx.state;
    let i18n = ctx.i18n;
    let lesson = state.current();

    let status = card::CardStatus {
        saved: state.is_saved(state.index),
        liked: state.liked.contains(&state.index),
        following: state.following.contains(lesson.creator),
        expanded: state.expanded,
        has_previous: state.index > 0,
        has_next: state.index + 1 < FEED.len(),
    };

    let card = card::view(lesson, status, i18n);

    let sheet: Option<Element<'_, Message>> = match state.sheet {
        Sheet::None => None,
        Sheet::Comments => state
            .threads
            .get(state.index)
            .map(|thread| comments::view(thread, i18n).map(Message::Comments)),
        Sheet::Support => Some(support::view(&state.support, lesson.creator, i18n).map(Message::Support)),
        Sheet::Menu => Some(menu(i18n)),
    };

    match sheet {
        None => card,
        Some(sheet) => Stack::new()
            .push(card)
            .push(
                mouse_area(
                    container(Column::new())
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(container_styles::scrim),
                )
                .on_press(Message::CloseSheet),
            )
            .push(
                container(sheet)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_y(Vertical::Bottom),
            )
            .into(),
    }
}

fn menu(i18n: &I18n) -> Element<'_, Message> {
    let rows = OverflowAction::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, action| {
            let style = if action == OverflowAction::Report {
                button_styles::danger
            } else {
                button_styles::ghost
            };
            column.push(
                button(text(i18n.tr(action.label_key())))
                    .on_press(Message::MenuAction(action))
                    .width(Length::Fill)
                    .padding(spacing::SM)
                    .style(style),
            )
        })
        .push(
            button(text(i18n.tr("feed-menu-cancel")))
                .on_press(Message::CloseSheet)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(button_styles::unselected),
        );

    container(rows)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(container_styles::sheet)
        .into()
}

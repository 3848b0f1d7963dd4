// SPDX-License-Identifier: MPL-2.0
//! Comment drawer of a lesson.

use crate::catalog::comments::{sample_thread, Comment, CommentKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, scrollable, text, text_input, Column, Row, Space};
use iced::{alignment::Vertical, Element, Length};

/// Order in which the thread is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    MostHelpful,
    QuestionsFirst,
    Newest,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [
        SortOrder::MostHelpful,
        SortOrder::QuestionsFirst,
        SortOrder::Newest,
    ];

    fn label_key(self) -> &'static str {
        match self {
            SortOrder::MostHelpful => "comments-sort-helpful",
            SortOrder::QuestionsFirst => "comments-sort-questions",
            SortOrder::Newest => "comments-sort-newest",
        }
    }
}

#[derive(Debug, Clone)]
pub struct State {
    comments: Vec<Comment>,
    sort: SortOrder,
    draft: String,
    draft_kind: Option<CommentKind>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            comments: sample_thread(),
            sort: SortOrder::default(),
            draft: String::new(),
            draft_kind: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Comments in display order for the current sort.
    #[must_use]
    pub fn sorted(&self) -> Vec<&Comment> {
        let mut listed: Vec<&Comment> = self.comments.iter().collect();
        match self.sort {
            SortOrder::MostHelpful => listed.sort_by(|a, b| b.helpful.cmp(&a.helpful)),
            SortOrder::QuestionsFirst => listed.sort_by_key(|comment| comment.kind != CommentKind::Question),
            SortOrder::Newest => listed.sort_by(|a, b| b.sequence.cmp(&a.sequence)),
        }
        listed
    }

    fn comment_mut(&mut self, id: u64) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|comment| comment.id == id)
    }

    fn post(&mut self) -> bool {
        let body = self.draft.trim();
        if body.is_empty() {
            return false;
        }
        let id = self.comments.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let sequence = self.comments.iter().map(|c| c.sequence).max().unwrap_or(0) + 1;
        self.comments.insert(
            0,
            Comment {
                id,
                author: "You".to_string(),
                avatar: "👤".to_string(),
                text: body.to_string(),
                helpful: 0,
                marked_helpful: false,
                replies: 0,
                show_replies: false,
                posted: "Just now".to_string(),
                kind: self.draft_kind.unwrap_or_default(),
                sequence,
            },
        );
        self.draft.clear();
        self.draft_kind = None;
        true
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    SortBy(SortOrder),
    ToggleHelpful(u64),
    ToggleReplies(u64),
    DraftChanged(String),
    DraftKind(CommentKind),
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    Posted,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Close => return Event::Close,
        Message::SortBy(sort) => state.sort = sort,
        Message::ToggleHelpful(id) => {
            if let Some(comment) = state.comment_mut(id) {
                comment.marked_helpful = !comment.marked_helpful;
                if comment.marked_helpful {
                    comment.helpful += 1;
                } else {
                    comment.helpful = comment.helpful.saturating_sub(1);
                }
            }
        }
        Message::ToggleReplies(id) => {
            if let Some(comment) = state.comment_mut(id) {
                comment.show_replies = !comment.show_replies;
            }
        }
        Message::DraftChanged(draft) => state.draft = draft,
        Message::DraftKind(kind) => {
            state.draft_kind = if state.draft_kind == Some(kind) { None } else { Some(kind) };
        }
        Message::Post => {
            if state.post() {
                return Event::Posted;
            }
        }
    }
    Event::None
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            text(i18n.tr_with_args("comments-title", &[("count", &state.len().to_string())]))
                .size(typography::TITLE_SM),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("✕"))
                .on_press(Message::Close)
                .style(button_styles::ghost),
        );

    let sort_row = crate::ui::components::segmented::view(
        SortOrder::ALL.map(|sort| (sort, i18n.tr(sort.label_key()))),
        state.sort,
        Message::SortBy,
    );

    let list = state
        .sorted()
        .into_iter()
        .fold(Column::new().spacing(spacing::MD), |column, comment| {
            column.push(comment_row(comment, i18n))
        });

    let kind_row = [CommentKind::Question, CommentKind::Insight]
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, kind| {
            let style = if state.draft_kind == Some(kind) {
                button_styles::selected
            } else {
                button_styles::unselected
            };
            row.push(
                button(text(i18n.tr(kind.label_key())).size(typography::CAPTION))
                    .on_press(Message::DraftKind(kind))
                    .style(style),
            )
        });

    let composer = Row::new()
        .spacing(spacing::XS)
        .push(
            text_input(&i18n.tr("comments-placeholder"), &state.draft)
                .on_input(Message::DraftChanged)
                .on_submit(Message::Post)
                .padding(spacing::XS)
                .width(Length::Fill),
        )
        .push(
            button(text(i18n.tr("comments-post")))
                .on_press_maybe((!state.draft.trim().is_empty()).then_some(Message::Post))
                .style(button_styles::primary),
        );

    container(
        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(header)
            .push(sort_row)
            .push(scrollable(list).height(Length::Fill))
            .push(kind_row)
            .push(composer),
    )
    .max_height(sizing::DRAWER_MAX_HEIGHT)
    .style(container_styles::sheet)
    .into()
}

fn comment_row<'a>(comment: &'a Comment, i18n: &'a I18n) -> Element<'a, Message> {
    let badge_color = match comment.kind {
        CommentKind::Instructor => palette::INFO_500,
        CommentKind::Question => palette::WARNING_500,
        CommentKind::Insight => palette::SUCCESS_500,
    };
    let title = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(comment.author.as_str()).size(typography::BODY_SM))
        .push(
            container(text(i18n.tr(comment.kind.label_key())).size(typography::CAPTION))
                .padding([0.0, spacing::XS])
                .style(container_styles::badge(badge_color)),
        )
        .push(text(comment.posted.as_str()).size(typography::CAPTION));

    let helpful_mark = if comment.marked_helpful { "▲" } else { "△" };
    let mut actions = Row::new().spacing(spacing::SM).push(
        button(
            text(format!(
                "{helpful_mark} {} · {}",
                i18n.tr("comments-helpful"),
                comment.helpful
            ))
            .size(typography::CAPTION),
        )
        .on_press(Message::ToggleHelpful(comment.id))
        .style(button_styles::ghost),
    );
    if comment.replies > 0 {
        let arrow = if comment.show_replies { "▴" } else { "▾" };
        actions = actions.push(
            button(
                text(format!(
                    "{arrow} {}",
                    i18n.tr_with_args("comments-replies", &[("count", &comment.replies.to_string())])
                ))
                .size(typography::CAPTION),
            )
            .on_press(Message::ToggleReplies(comment.id))
            .style(button_styles::ghost),
        );
    }

    let mut body = Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(text(comment.text.as_str()).size(typography::BODY))
        .push(actions);
    if comment.show_replies {
        body = body.push(
            text(i18n.tr("comments-replies-hidden"))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        );
    }

    Row::new()
        .spacing(spacing::SM)
        .push(text(comment.avatar.as_str()).size(typography::TITLE_MD))
        .push(body)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_helpful_sorts_descending() {
        let state = State::default();
        let helpful: Vec<u32> = state.sorted().iter().map(|c| c.helpful).collect();
        assert_eq!(helpful, vec![243, 156, 89, 67]);
    }

    #[test]
    fn questions_first_keeps_relative_order() {
        let mut state = State::default();
        update(&mut state, Message::SortBy(SortOrder::QuestionsFirst));
        let kinds: Vec<CommentKind> = state.sorted().iter().map(|c| c.kind).collect();
        assert_eq!(&kinds[..2], &[CommentKind::Question, CommentKind::Question]);
    }

    #[test]
    fn helpful_toggles_by_one() {
        let mut state = State::default();
        update(&mut state, Message::ToggleHelpful(1));
        assert_eq!(state.comments[0].helpful, 244);
        update(&mut state, Message::ToggleHelpful(1));
        assert_eq!(state.comments[0].helpful, 243);

        // Already marked helpful in the sample thread
        update(&mut state, Message::ToggleHelpful(2));
        assert_eq!(state.comments[1].helpful, 88);
    }

    #[test]
    fn empty_draft_is_not_posted() {
        let mut state = State::default();
        update(&mut state, Message::DraftChanged("   ".into()));
        assert_eq!(update(&mut state, Message::Post), Event::None);
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn posted_comment_is_prepended_and_newest() {
        let mut state = State::default();
        update(&mut state, Message::DraftKind(CommentKind::Question));
        update(&mut state, Message::DraftChanged("Why squares?".into()));
        assert_eq!(update(&mut state, Message::Post), Event::Posted);

        assert_eq!(state.comments[0].author, "You");
        assert_eq!(state.comments[0].kind, CommentKind::Question);
        update(&mut state, Message::SortBy(SortOrder::Newest));
        assert_eq!(state.sorted()[0].text, "Why squares?");
        assert!(state.draft.is_empty());
    }

    #[test]
    fn default_kind_is_insight() {
        let mut state = State::default();
        update(&mut state, Message::DraftChanged("Nice".into()));
        update(&mut state, Message::Post);
        assert_eq!(state.comments[0].kind, CommentKind::Insight);
    }
}

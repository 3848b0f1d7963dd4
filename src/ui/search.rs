// SPDX-License-Identifier: MPL-2.0
//! Search overlay.

use crate::catalog::search::{TopicResult, UserResult, VideoResult, RECENT, TOPICS, TRENDING, USERS, VIDEOS};
use crate::i18n::fluent::I18n;
use crate::ui::components::segmented;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, scrollable, text, text_input, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Videos,
    Users,
    Topics,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Videos, Filter::Users, Filter::Topics];

    fn label_key(self) -> &'static str {
        match self {
            Filter::All => "search-filter-all",
            Filter::Videos => "search-filter-videos",
            Filter::Users => "search-filter-users",
            Filter::Topics => "search-filter-topics",
        }
    }

    fn shows(self, kind: Filter) -> bool {
        self == Filter::All || self == kind
    }
}

/// Matches for the current query and filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Results {
    pub videos: Vec<&'static VideoResult>,
    pub users: Vec<&'static UserResult>,
    pub topics: Vec<&'static TopicResult>,
}

impl Results {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.users.is_empty() && self.topics.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
    filter: Filter,
}

impl State {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// An empty query shows suggestions instead of results.
    #[must_use]
    pub fn shows_suggestions(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Case-insensitive substring match over the sample pool.
    #[must_use]
    pub fn results(&self) -> Results {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return Results::default();
        }
        let hit = |haystack: &str| haystack.to_lowercase().contains(&needle);

        Results {
            videos: if self.filter.shows(Filter::Videos) {
                VIDEOS.iter().filter(|v| hit(v.title) || hit(v.creator)).collect()
            } else {
                Vec::new()
            },
            users: if self.filter.shows(Filter::Users) {
                USERS.iter().filter(|u| hit(u.name) || hit(u.handle)).collect()
            } else {
                Vec::new()
            },
            topics: if self.filter.shows(Filter::Topics) {
                TOPICS.iter().filter(|t| hit(t.name)).collect()
            } else {
                Vec::new()
            },
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    QueryChanged(String),
    Clear,
    SetFilter(Filter),
    UseSuggestion(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Close => return Event::Close,
        Message::QueryChanged(query) => state.query = query,
        Message::Clear => state.query.clear(),
        Message::SetFilter(filter) => state.filter = filter,
        Message::UseSuggestion(query) => state.query = query.to_string(),
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

    let mut bar = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::MD])
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .align_y(Vertical::Center)
        .push(
            button(text("←").size(typography::ICON))
                .on_press(Message::Close)
                .style(button_styles::ghost),
        )
        .push(
            text_input(&i18n.tr("search-placeholder"), &state.query)
                .on_input(Message::QueryChanged)
                .padding(spacing::XS)
                .width(Length::Fill),
        );
    if !state.query.is_empty() {
        bar = bar.push(
            button(text("✕"))
                .on_press(Message::Clear)
                .style(button_styles::ghost),
        );
    }

    let content = if state.shows_suggestions() {
        suggestions(i18n)
    } else {
        results(state, i18n)
    };

    container(
        Column::new()
            .push(bar)
            .push(
                container(segmented::view(
                    Filter::ALL.map(|filter| (filter, i18n.tr(filter.label_key()))),
                    state.filter,
                    Message::SetFilter,
                ))
                .padding([0.0, spacing::MD]),
            )
            .push(scrollable(container(content).padding(spacing::MD)).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

fn suggestions(i18n: &I18n) -> Element<'_, Message> {
    let recent = RECENT.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr("search-recent")).size(typography::TITLE_SM)),
        |column, query| {
            column.push(
                button(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(text("🕘").size(typography::BODY_SM))
                        .push(text(*query).size(typography::BODY)),
                )
                .on_press(Message::UseSuggestion(*query))
                .width(Length::Fill)
                .style(button_styles::ghost),
            )
        },
    );

    let trending = TRENDING.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr("search-trending")).size(typography::TITLE_SM)),
        |column, entry| {
            column.push(
                button(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(text("↗").color(palette::BRAND_500))
                        .push(text(entry.query).size(typography::BODY).width(Length::Fill))
                        .push(
                            text(i18n.tr_with_args("search-count", &[("count", entry.searches)]))
                                .size(typography::CAPTION),
                        ),
                )
                .on_press(Message::UseSuggestion(entry.query))
                .width(Length::Fill)
                .style(button_styles::ghost),
            )
        },
    );

    Column::new()
        .spacing(spacing::LG)
        .push(recent)
        .push(trending)
        .into()
}

fn results<'a>(state: &State, i18n: &'a I18n) -> Element<'a, Message> {
    let found = state.results();
    if found.is_empty() {
        return text(i18n.tr_with_args("search-no-results", &[("query", state.query.trim())]))
            .size(typography::BODY)
            .color(palette::GRAY_500)
            .into();
    }

    let mut column = Column::new().spacing(spacing::LG);

    if !found.videos.is_empty() {
        column = column.push(found.videos.iter().fold(
            Column::new()
                .spacing(spacing::XS)
                .push(text(i18n.tr("search-filter-videos")).size(typography::TITLE_SM)),
            |column, video| {
                column.push(
                    container(
                        Column::new()
                            .push(text(video.title).size(typography::BODY))
                            .push(
                                text(format!("{} · ▶ {} · ♥ {}", video.creator, video.views, video.likes))
                                    .size(typography::CAPTION)
                                    .color(palette::GRAY_500),
                            ),
                    )
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(container_styles::card),
                )
            },
        ));
    }

    if !found.users.is_empty() {
        column = column.push(found.users.iter().fold(
            Column::new()
                .spacing(spacing::XS)
                .push(text(i18n.tr("search-filter-users")).size(typography::TITLE_SM)),
            |column, user| {
                column.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .align_y(Vertical::Center)
                        .push(text("👤").size(typography::TITLE_MD))
                        .push(
                            Column::new()
                                .width(Length::Fill)
                                .push(text(user.name).size(typography::BODY))
                                .push(text(user.handle).size(typography::CAPTION)),
                        )
                        .push(
                            text(i18n.tr_with_args("search-followers", &[("count", user.followers)]))
                                .size(typography::CAPTION),
                        ),
                )
            },
        ));
    }

    if !found.topics.is_empty() {
        column = column.push(found.topics.iter().fold(
            Column::new()
                .spacing(spacing::XS)
                .push(text(i18n.tr("search-filter-topics")).size(typography::TITLE_SM)),
            |column, topic| {
                column.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(text(topic.icon).size(typography::TITLE_MD))
                        .push(text(topic.name).size(typography::BODY).width(Length::Fill))
                        .push(
                            text(i18n.tr_with_args("search-videos", &[("count", topic.videos)]))
                                .size(typography::CAPTION),
                        ),
                )
            },
        ));
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searching(query: &str) -> State {
        let mut state = State::default();
        update(&mut state, Message::QueryChanged(query.into()));
        state
    }

    #[test]
    fn empty_query_shows_suggestions() {
        let state = searching("   ");
        assert!(state.shows_suggestions());
        assert!(state.results().is_empty());
    }

    #[test]
    fn match_is_case_insensitive() {
        let state = searching("QUANTUM");
        assert_eq!(state.results().videos.len(), 1);
    }

    #[test]
    fn filter_limits_kinds() {
        let mut state = searching("math");
        assert!(!state.results().videos.is_empty());
        assert!(!state.results().topics.is_empty());

        update(&mut state, Message::SetFilter(Filter::Topics));
        let results = state.results();
        assert!(results.videos.is_empty());
        assert_eq!(results.topics.len(), 1);
    }

    #[test]
    fn users_match_by_handle() {
        let state = searching("@code");
        assert_eq!(state.results().users.len(), 1);
    }

    #[test]
    fn suggestion_fills_query() {
        let mut state = State::default();
        update(&mut state, Message::UseSuggestion("Linear Algebra"));
        assert_eq!(state.query(), "Linear Algebra");
        update(&mut state, Message::Clear);
        assert!(state.shows_suggestions());
    }

    #[test]
    fn back_closes() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::Close), Event::Close);
    }
}

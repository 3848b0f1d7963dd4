// SPDX-License-Identifier: MPL-2.0
//! Discover tab: trending topics, recommendations and browsable categories.

use crate::catalog::discover::{Category, Subject, VideoTile, CATEGORIES, FOR_YOU, TRENDING_TOPICS};
use crate::i18n::fluent::I18n;
use crate::ui::components::{header, segmented};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{Element, Length};
use std::collections::BTreeSet;

/// Time window of the trending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrendingWindow {
    #[default]
    Today,
    Week,
    Month,
}

impl TrendingWindow {
    pub const ALL: [TrendingWindow; 3] = [
        TrendingWindow::Today,
        TrendingWindow::Week,
        TrendingWindow::Month,
    ];

    fn label_key(self) -> &'static str {
        match self {
            TrendingWindow::Today => "discover-window-today",
            TrendingWindow::Week => "discover-window-week",
            TrendingWindow::Month => "discover-window-month",
        }
    }
}

/// A filter chip. `All` cannot be combined with subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip {
    All,
    Subject(Subject),
}

const CHIPS_PER_ROW: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct State {
    window: TrendingWindow,
    /// Empty means "All".
    subjects: BTreeSet<Subject>,
}

impl State {
    #[must_use]
    pub fn window(&self) -> TrendingWindow {
        self.window
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        self.subjects.is_empty()
    }

    #[must_use]
    pub fn is_selected(&self, chip: Chip) -> bool {
        match chip {
            Chip::All => self.is_all(),
            Chip::Subject(subject) => self.subjects.contains(&subject),
        }
    }

    /// Categories matching the current chips.
    #[must_use]
    pub fn visible_categories(&self) -> Vec<&'static Category> {
        CATEGORIES
            .iter()
            .filter(|category| {
                self.is_all() || self.subjects.contains(&category.subject)
            })
            .collect()
    }

    fn toggle(&mut self, chip: Chip) {
        match chip {
            Chip::All => self.subjects.clear(),
            Chip::Subject(subject) => {
                if !self.subjects.remove(&subject) {
                    self.subjects.insert(subject);
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SetWindow(TrendingWindow),
    ToggleChip(Chip),
    OpenSearch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenSearch,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::SetWindow(window) => state.window = window,
        Message::ToggleChip(chip) => state.toggle(chip),
        Message::OpenSearch => return Event::OpenSearch,
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

    let search = button(
        Row::new()
            .spacing(spacing::XS)
            .push(text("🔍"))
            .push(text(i18n.tr("discover-search-placeholder")).color(palette::GRAY_500)),
    )
    .on_press(Message::OpenSearch)
    .width(Length::Fill)
    .padding(spacing::SM)
    .style(button_styles::unselected);

    let all_chips: Vec<Chip> = std::iter::once(Chip::All)
        .chain(Subject::ALL.into_iter().map(Chip::Subject))
        .collect();
    let chips = all_chips
        .chunks(CHIPS_PER_ROW)
        .fold(Column::new().spacing(spacing::XS), |column, row_chips| {
            column.push(row_chips.iter().fold(Row::new().spacing(spacing::XS), |row, &chip| {
                let label = match chip {
                    Chip::All => i18n.tr("discover-chip-all"),
                    Chip::Subject(subject) => i18n.tr(subject.label_key()),
                };
                row.push(
                    button(text(label).size(typography::BODY_SM))
                        .on_press(Message::ToggleChip(chip))
                        .padding([spacing::XXS, spacing::SM])
                        .style(if state.is_selected(chip) {
                            button_styles::selected
                        } else {
                            button_styles::unselected
                        }),
                )
            }))
        });

    let trending = TRENDING_TOPICS
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::XXS), |column, (rank, topic)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(text(format!("{}", rank + 1)).size(typography::TITLE_SM).color(palette::BRAND_500))
                    .push(text(format!("#{}", topic.tag)).size(typography::BODY).width(Length::Fill))
                    .push(text(topic.views).size(typography::CAPTION)),
            )
        });

    let for_you = tiles(FOR_YOU);

    let categories = state.visible_categories();
    let category_section: Element<'_, Message> = if categories.is_empty() {
        text(i18n.tr("discover-no-categories"))
            .size(typography::BODY_SM)
            .color(palette::GRAY_500)
            .into()
    } else {
        categories
            .into_iter()
            .fold(Column::new().spacing(spacing::MD), |column, category| {
                column.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .push(
                            Row::new()
                                .spacing(spacing::XS)
                                .push(text(category.icon).size(typography::TITLE_SM))
                                .push(text(category.name).size(typography::TITLE_SM))
                                .push(
                                    text(i18n.tr_with_args(
                                        "discover-learners",
                                        &[("count", category.learners)],
                                    ))
                                    .size(typography::CAPTION)
                                    .color(palette::GRAY_500),
                                ),
                        )
                        .push(tiles(category.videos)),
                )
            })
            .into()
    };

    let body = Column::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::MD])
        .push(search)
        .push(chips)
        .push(
            section(
                i18n.tr("discover-trending"),
                Column::new()
                    .spacing(spacing::XS)
                    .push(segmented::view(
                        TrendingWindow::ALL.map(|w| (w, i18n.tr(w.label_key()))),
                        state.window,
                        Message::SetWindow,
                    ))
                    .push(trending),
            ),
        )
        .push(section(i18n.tr("discover-for-you"), for_you))
        .push(section(i18n.tr("discover-categories"), category_section));

    container(
        Column::new()
            .push(header::view(i18n.tr("discover-title"), None, None))
            .push(scrollable(body).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

fn section<'a>(
    title: String,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(text(title).size(typography::TITLE_SM))
        .push(content)
        .into()
}

fn tiles(videos: &'static [VideoTile]) -> Element<'static, Message> {
    videos
        .chunks(2)
        .fold(Column::new().spacing(spacing::XS), |column, pair| {
            column.push(pair.iter().fold(Row::new().spacing(spacing::XS), |row, video| {
                row.push(
                    container(
                        Column::new()
                            .spacing(spacing::XXS)
                            .push(text(video.title).size(typography::BODY_SM))
                            .push(text(video.creator).size(typography::CAPTION))
                            .push(
                                text(format!("▶ {}", video.views))
                                    .size(typography::CAPTION)
                                    .color(palette::GRAY_500),
                            ),
                    )
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(container_styles::card),
                )
            }))
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chip(subject: Subject) -> Chip {
        Chip::Subject(subject)
    }

    #[test]
    fn starts_on_all() {
        let state = State::default();
        assert!(state.is_selected(Chip::All));
        assert_eq!(state.visible_categories().len(), CATEGORIES.len());
    }

    #[test]
    fn selecting_a_subject_deselects_all() {
        let mut state = State::default();
        update(&mut state, Message::ToggleChip(chip(Subject::Math)));
        assert!(!state.is_selected(Chip::All));
        assert!(state.is_selected(chip(Subject::Math)));
        let names: Vec<_> = state.visible_categories().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Mathematics"]);
    }

    #[test]
    fn subjects_combine() {
        let mut state = State::default();
        update(&mut state, Message::ToggleChip(chip(Subject::Math)));
        update(&mut state, Message::ToggleChip(chip(Subject::Art)));
        assert_eq!(state.visible_categories().len(), 2);
    }

    #[test]
    fn selecting_all_clears_subjects() {
        let mut state = State::default();
        update(&mut state, Message::ToggleChip(chip(Subject::Math)));
        update(&mut state, Message::ToggleChip(chip(Subject::History)));
        update(&mut state, Message::ToggleChip(Chip::All));
        assert!(state.is_all());
        assert!(!state.is_selected(chip(Subject::Math)));
    }

    #[test]
    fn deselecting_last_subject_reverts_to_all() {
        let mut state = State::default();
        update(&mut state, Message::ToggleChip(chip(Subject::Science)));
        update(&mut state, Message::ToggleChip(chip(Subject::Science)));
        assert!(state.is_selected(Chip::All));
    }

    #[test]
    fn language_has_no_categories() {
        let mut state = State::default();
        update(&mut state, Message::ToggleChip(chip(Subject::Language)));
        assert!(state.visible_categories().is_empty());
    }

    #[test]
    fn search_is_reported() {
        let mut state = State::default();
        assert_eq!(update(&mut state, Message::OpenSearch), Event::OpenSearch);
    }
}

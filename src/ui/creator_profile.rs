// SPDX-License-Identifier: MPL-2.0
//! Another user's profile, shown as an overlay.

use crate::catalog::creators::{profile_for, CreatorProfile};
use crate::i18n::fluent::I18n;
use crate::navigation::CreatorId;
use crate::ui::components::{header, post_grid};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gifting;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, mouse_area, scrollable, text, Column, Row, Stack};
use iced::{Element, Length};
use std::collections::BTreeSet;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct State {
    /// Handles the user follows.
    following: BTreeSet<&'static str>,
    gifting: Option<gifting::State>,
}

impl State {
    #[must_use]
    pub fn is_following(&self, profile: &CreatorProfile) -> bool {
        self.following.contains(profile.handle)
    }

    #[must_use]
    pub fn is_gifting(&self) -> bool {
        self.gifting.is_some()
    }

    /// Whether a gift confirmation is waiting for ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        self.gifting
            .as_ref()
            .is_some_and(gifting::State::is_showing_success)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    ToggleFollow,
    OpenGifts,
    Gifting(gifting::Message),
    Tick(Instant),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    GiftSent { gift: &'static str, creator: &'static str },
}

/// `creator` is the overlay's parameter; unknown or missing ids show the
/// default profile.
pub fn update(state: &mut State, creator: Option<&CreatorId>, message: Message) -> Event {
    let profile = profile_for(creator);
    match message {
        Message::Close => {
            state.gifting = None;
            return Event::Close;
        }
        Message::ToggleFollow => {
            if !state.following.remove(profile.handle) {
                state.following.insert(profile.handle);
            }
        }
        Message::OpenGifts => state.gifting = Some(gifting::State::default()),
        Message::Gifting(message) => return forward_gifting(state, profile, message),
        Message::Tick(now) => {
            if state.needs_tick() {
                return forward_gifting(state, profile, gifting::Message::Tick(now));
            }
        }
    }
    Event::None
}

fn forward_gifting(
    state: &mut State,
    profile: &'static CreatorProfile,
    message: gifting::Message,
) -> Event {
    let Some(flow) = state.gifting.as_mut() else {
        return Event::None;
    };
    match gifting::update(flow, message) {
        gifting::Event::None => Event::None,
        gifting::Event::Close => {
            state.gifting = None;
            Event::None
        }
        gifting::Event::Sent { gift, .. } => Event::GiftSent {
            gift,
            creator: profile.name,
        },
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub creator: Option<CreatorId>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;
    let profile = profile_for(ctx.creator.as_ref());
    let following = state.is_following(profile);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(
                text(if following {
                    i18n.tr("creator-following")
                } else {
                    i18n.tr("creator-follow")
                })
                .align_x(Horizontal::Center)
                .width(Length::Fill),
            )
            .on_press(Message::ToggleFollow)
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(if following {
                button_styles::unselected
            } else {
                button_styles::primary
            }),
        )
        .push(
            button(
                text(format!("🎁 {}", i18n.tr("creator-send-gift")))
                    .align_x(Horizontal::Center)
                    .width(Length::Fill),
            )
            .on_press(Message::OpenGifts)
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(button_styles::unselected),
        );

    let stats = Row::new()
        .spacing(spacing::LG)
        .push(stat(profile.learners.to_string(), i18n.tr("creator-learners")))
        .push(stat(profile.lessons.to_string(), i18n.tr("creator-lessons")));

    let body = Column::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::MD])
        .align_x(Horizontal::Center)
        .push(text(profile.avatar).size(typography::TITLE_LG * 2.0))
        .push(text(profile.name).size(typography::TITLE_MD))
        .push(
            text(format!("@{}", profile.handle))
                .size(typography::BODY_SM)
                .color(palette::GRAY_500),
        )
        .push(text(profile.bio).size(typography::BODY_SM).align_x(Horizontal::Center))
        .push(stats)
        .push(actions)
        .push(post_grid::view(profile.posts));

    let page: Element<'_, Message> = container(
        Column::new()
            .push(header::view(
                profile.name.to_string(),
                Some(Message::Close),
                None,
            ))
            .push(scrollable(body).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into();

    let Some(flow) = state.gifting.as_ref() else {
        return page;
    };

    Stack::new()
        .push(page)
        .push(
            mouse_area(
                container(Column::new())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(container_styles::scrim),
            )
            .on_press(Message::Gifting(gifting::Message::Close)),
        )
        .push(
            container(gifting::view(flow, profile.name, i18n).map(Message::Gifting))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom),
        )
        .into()
}

fn stat<'a>(value: String, label: String) -> Element<'a, Message> {
    Column::new()
        .align_x(Horizontal::Center)
        .push(text(value).size(typography::TITLE_SM))
        .push(text(label).size(typography::CAPTION).color(palette::GRAY_500))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::SuccessTimer;

    #[test]
    fn follow_is_per_creator() {
        let mut state = State::default();
        let sarah = CreatorId::from("1");
        update(&mut state, Some(&sarah), Message::ToggleFollow);
        assert!(state.is_following(profile_for(Some(&sarah))));
        assert!(!state.is_following(profile_for(None)));
    }

    #[test]
    fn close_drops_gifting() {
        let mut state = State::default();
        update(&mut state, None, Message::OpenGifts);
        assert!(state.is_gifting());
        assert_eq!(update(&mut state, None, Message::Close), Event::Close);
        assert!(!state.is_gifting());
    }

    #[test]
    fn gift_flow_reports_and_closes_itself() {
        let mut state = State::default();
        let id = CreatorId::from("2");
        update(&mut state, Some(&id), Message::OpenGifts);
        update(&mut state, Some(&id), Message::Gifting(gifting::Message::Select(1)));
        assert_eq!(
            update(&mut state, Some(&id), Message::Gifting(gifting::Message::Send)),
            Event::GiftSent {
                gift: "Heart",
                creator: "Prof. Michael Torres Guzman Loera"
            }
        );
        assert!(state.needs_tick());

        update(
            &mut state,
            Some(&id),
            Message::Tick(Instant::now() + SuccessTimer::DURATION),
        );
        assert!(!state.is_gifting());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Standalone video editor overlay.

use crate::i18n::fluent::I18n;
use crate::ui::components::{edit_panel, header};
use crate::ui::design_tokens::spacing;
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::{button, container, text, Column};
use iced::{Element, Length};

pub type State = edit_panel::State;

#[derive(Debug, Clone)]
pub enum Message {
    Back,
    Publish,
    Panel(edit_panel::Message),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Close,
    Published,
}

/// Leaving the editor, by either path, discards the session.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Back => {
            *state = State::default();
            Event::Close
        }
        Message::Publish => {
            tracing::info!(position = state.position(), "edited video published");
            *state = State::default();
            Event::Published
        }
        Message::Panel(message) => {
            edit_panel::update(state, message);
            Event::None
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let publish = button(text(ctx.i18n.tr("editor-publish")))
        .on_press(Message::Publish)
        .style(button_styles::primary);

    container(
        Column::new()
            .push(header::view(
                ctx.i18n.tr("editor-title"),
                Some(Message::Back),
                Some(publish.into()),
            ))
            .push(
                container(edit_panel::view(ctx.state, ctx.i18n).map(Message::Panel))
                    .padding(spacing::MD)
                    .height(Length::Fill),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::authoring::TIMELINE_SECONDS;

    #[test]
    fn back_closes_and_resets() {
        let mut state = State::default();
        update(&mut state, Message::Panel(edit_panel::Message::Seek(30)));
        assert_eq!(update(&mut state, Message::Back), Event::Close);
        assert_eq!(state.position(), 0);
    }

    #[test]
    fn publish_is_reported() {
        let mut state = State::default();
        update(&mut state, Message::Panel(edit_panel::Message::Seek(TIMELINE_SECONDS + 5)));
        assert_eq!(state.position(), TIMELINE_SECONDS);
        assert_eq!(update(&mut state, Message::Publish), Event::Published);
    }
}

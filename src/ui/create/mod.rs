// SPDX-License-Identifier: MPL-2.0
//! Create tab: record, edit and publish a lesson.
//!
//! The flow always runs `Camera → Edit → Setup`. Leaving it by any path
//! (close, save draft, discard, publish) resets every step so the next visit
//! starts from a fresh camera.

pub mod camera;
pub mod setup;

use crate::i18n::fluent::I18n;
use crate::ui::components::edit_panel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, scrollable, text, Column, Row, Space, Stack};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Camera,
    Edit,
    Setup,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    step: Step,
    camera: camera::State,
    edit: edit_panel::State,
    setup: setup::State,
    exit_warning: bool,
}

impl State {
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Drives the one-second recording subscription.
    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.step == Step::Camera && self.camera.is_recording()
    }

    #[must_use]
    pub fn is_exit_warning_shown(&self) -> bool {
        self.exit_warning
    }

    #[must_use]
    pub fn camera(&self) -> &camera::State {
        &self.camera
    }

    #[must_use]
    pub fn setup(&self) -> &setup::State {
        &self.setup
    }

    fn reset(&mut self) {
        *self = State::default();
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Camera(camera::Message),
    Edit(edit_panel::Message),
    Setup(setup::Message),
    RecordingTick,
    ToSetup,
    RequestExit,
    SaveDraft,
    Discard,
    ContinueEditing,
    Publish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Exit,
    Published,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Camera(message) => match message {
            camera::Message::Close => {
                state.reset();
                return Event::Exit;
            }
            camera::Message::SetLimit(limit) => state.camera.set_limit(limit),
            camera::Message::ToggleRecording => state.camera.toggle_recording(),
            camera::Message::Retake => state.camera.retake(),
            camera::Message::UseRecording => {
                if state.camera.has_recorded() && !state.camera.is_recording() {
                    state.step = Step::Edit;
                }
            }
        },
        Message::Edit(message) => edit_panel::update(&mut state.edit, message),
        Message::Setup(message) => setup::update(&mut state.setup, message),
        Message::RecordingTick => {
            if state.is_recording() {
                state.camera.tick();
            }
        }
        Message::ToSetup => {
            if state.step == Step::Edit {
                state.step = Step::Setup;
            }
        }
        Message::RequestExit => {
            if state.step != Step::Camera {
                state.exit_warning = true;
            }
        }
        Message::SaveDraft => {
            tracing::info!("lesson saved as draft");
            state.reset();
            return Event::Exit;
        }
        Message::Discard => {
            tracing::info!("lesson discarded");
            state.reset();
            return Event::Exit;
        }
        Message::ContinueEditing => state.exit_warning = false,
        Message::Publish => {
            if state.step == Step::Setup && state.setup.can_publish() {
                tracing::info!(
                    title = state.setup.title(),
                    category = state.setup.category().map(|c| c.name),
                    "lesson published"
                );
                state.reset();
                return Event::Published;
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

    let screen: Element<'_, Message> = match state.step {
        Step::Camera => camera::view(&state.camera, i18n).map(Message::Camera),
        Step::Edit => framed(
            i18n.tr("create-edit-title"),
            button(text(i18n.tr("create-next")))
                .on_press(Message::ToSetup)
                .style(button_styles::primary),
            container(edit_panel::view(&state.edit, i18n).map(Message::Edit))
                .padding(spacing::MD)
                .height(Length::Fill)
                .into(),
        ),
        Step::Setup => framed(
            i18n.tr("create-setup-title"),
            button(text(i18n.tr("create-publish")))
                .on_press_maybe(state.setup.can_publish().then_some(Message::Publish))
                .style(button_styles::primary),
            scrollable(setup::view(&state.setup, i18n).map(Message::Setup))
                .height(Length::Fill)
                .into(),
        ),
    };

    if !state.exit_warning {
        return screen;
    }

    Stack::new()
        .push(screen)
        .push(
            container(exit_dialog(i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(container_styles::scrim),
        )
        .into()
}

fn framed<'a>(
    title: String,
    action: impl Into<Element<'a, Message>>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let header = Row::new()
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .push(
            button(text("✕").size(typography::ICON))
                .on_press(Message::RequestExit)
                .style(button_styles::ghost),
        )
        .push(Space::new().width(Length::Fill))
        .push(text(title).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(action);

    container(Column::new().push(header).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container_styles::screen)
        .into()
}

fn exit_dialog(i18n: &I18n) -> Element<'_, Message> {
    let wide = |label: String, message: Message, style: fn(&iced::Theme, button::Status) -> button::Style| {
        button(text(label).align_x(Horizontal::Center).width(Length::Fill))
            .on_press(message)
            .width(Length::Fill)
            .padding(spacing::SM)
            .style(style)
    };

    container(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("create-exit-title")).size(typography::TITLE_MD))
            .push(text(i18n.tr("create-exit-body")).size(typography::BODY_SM))
            .push(wide(i18n.tr("create-save-draft"), Message::SaveDraft, button_styles::primary))
            .push(wide(i18n.tr("create-discard"), Message::Discard, button_styles::danger))
            .push(wide(
                i18n.tr("create-continue-editing"),
                Message::ContinueEditing,
                button_styles::ghost,
            )),
    )
    .padding(spacing::LG)
    .max_width(sizing::TOAST_WIDTH)
    .style(container_styles::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::authoring::RecordingLimit;

    fn recorded() -> State {
        let mut state = State::default();
        update(&mut state, Message::Camera(camera::Message::ToggleRecording));
        update(&mut state, Message::RecordingTick);
        update(&mut state, Message::Camera(camera::Message::ToggleRecording));
        state
    }

    fn at_setup() -> State {
        let mut state = recorded();
        update(&mut state, Message::Camera(camera::Message::UseRecording));
        update(&mut state, Message::ToSetup);
        state
    }

    #[test]
    fn ticks_stop_recording_at_limit() {
        let mut state = State::default();
        update(&mut state, Message::Camera(camera::Message::SetLimit(RecordingLimit::Medium)));
        update(&mut state, Message::Camera(camera::Message::ToggleRecording));
        assert!(state.is_recording());
        for _ in 0..30 {
            update(&mut state, Message::RecordingTick);
        }
        assert!(!state.is_recording());
        assert_eq!(state.camera().elapsed(), 30);
    }

    #[test]
    fn cannot_edit_before_recording() {
        let mut state = State::default();
        update(&mut state, Message::Camera(camera::Message::UseRecording));
        assert_eq!(state.step(), Step::Camera);
    }

    #[test]
    fn steps_advance_in_order() {
        let state = at_setup();
        assert_eq!(state.step(), Step::Setup);
    }

    #[test]
    fn close_from_camera_resets_and_exits() {
        let mut state = recorded();
        assert_eq!(
            update(&mut state, Message::Camera(camera::Message::Close)),
            Event::Exit
        );
        assert!(!state.camera().has_recorded());
    }

    #[test]
    fn exit_warning_can_be_dismissed() {
        let mut state = at_setup();
        update(&mut state, Message::RequestExit);
        assert!(state.is_exit_warning_shown());
        assert_eq!(update(&mut state, Message::ContinueEditing), Event::None);
        assert!(!state.is_exit_warning_shown());
        assert_eq!(state.step(), Step::Setup);
    }

    #[test]
    fn draft_and_discard_both_exit() {
        for choice in [Message::SaveDraft, Message::Discard] {
            let mut state = at_setup();
            update(&mut state, Message::RequestExit);
            assert_eq!(update(&mut state, choice), Event::Exit);
            assert_eq!(state.step(), Step::Camera);
            assert!(!state.is_exit_warning_shown());
        }
    }

    #[test]
    fn publish_is_gated() {
        let mut state = at_setup();
        assert_eq!(update(&mut state, Message::Publish), Event::None);

        update(&mut state, Message::Setup(setup::Message::SelectCategory(0)));
        update(&mut state, Message::Setup(setup::Message::TitleChanged("Atoms".into())));
        assert_eq!(update(&mut state, Message::Publish), Event::Published);
        assert_eq!(state.step(), Step::Camera);
        assert!(!state.setup().can_publish());
    }
}

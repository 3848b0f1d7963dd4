// SPDX-License-Identifier: MPL-2.0
//! Camera step: pick a length, record, retake.

use crate::catalog::authoring::{format_clock, RecordingLimit};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    limit: RecordingLimit,
    recording: bool,
    elapsed: u32,
    has_recorded: bool,
}

impl State {
    #[must_use]
    pub fn limit(&self) -> RecordingLimit {
        self.limit
    }

    #[must_use]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    #[must_use]
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    #[must_use]
    pub fn has_recorded(&self) -> bool {
        self.has_recorded
    }

    /// Ignored while recording.
    pub fn set_limit(&mut self, limit: RecordingLimit) {
        if !self.recording {
            self.limit = limit;
        }
    }

    /// Starts a fresh take, or stops the running one.
    pub fn toggle_recording(&mut self) {
        if self.recording {
            self.recording = false;
            self.has_recorded = true;
        } else {
            self.elapsed = 0;
            self.recording = true;
        }
    }

    /// One second of recording. Stops at the limit.
    pub fn tick(&mut self) {
        if !self.recording {
            return;
        }
        self.elapsed = (self.elapsed + 1).min(self.limit.seconds());
        if self.elapsed >= self.limit.seconds() {
            tracing::debug!(seconds = self.elapsed, "recording reached its limit");
            self.recording = false;
            self.has_recorded = true;
        }
    }

    pub fn retake(&mut self) {
        self.has_recorded = false;
        self.elapsed = 0;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
    SetLimit(RecordingLimit),
    ToggleRecording,
    Retake,
    UseRecording,
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let top = Row::new()
        .padding(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            button(text("✕").size(typography::ICON))
                .on_press(Message::Close)
                .style(button_styles::on_video(false)),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            container(
                text(format_clock(state.elapsed))
                    .size(typography::BODY)
                    .color(palette::WHITE),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(container_styles::badge(if state.recording {
                palette::ERROR_500
            } else {
                palette::GRAY_700
            })),
        );

    let limits = RecordingLimit::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, limit| {
            row.push(
                button(text(limit.label()).size(typography::BODY_SM))
                    .on_press_maybe((!state.recording).then_some(Message::SetLimit(limit)))
                    .padding([spacing::XXS, spacing::SM])
                    .style(if limit == state.limit {
                        button_styles::selected
                    } else {
                        button_styles::unselected
                    }),
            )
        });

    let record_label = if state.recording { "■" } else { "●" };
    let record = button(
        text(record_label)
            .size(typography::TITLE_LG * 2.0)
            .color(palette::ERROR_500)
            .align_x(Horizontal::Center),
    )
    .on_press(Message::ToggleRecording)
    .padding(spacing::MD)
    .style(button_styles::on_video(state.recording));

    let mut controls = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center);
    if state.has_recorded && !state.recording {
        controls = controls
            .push(
                button(text(i18n.tr("create-retake")))
                    .on_press(Message::Retake)
                    .style(button_styles::on_video(false)),
            )
            .push(record)
            .push(
                button(text(i18n.tr("create-next")))
                    .on_press(Message::UseRecording)
                    .style(button_styles::primary),
            );
    } else {
        controls = controls.push(record);
    }

    let hint = if state.recording {
        i18n.tr("create-recording")
    } else {
        i18n.tr("create-tap-to-record")
    };

    container(
        Column::new()
            .align_x(Horizontal::Center)
            .push(top)
            .push(Space::new().height(Length::Fill))
            .push(text(hint).size(typography::BODY_SM).color(palette::GRAY_300))
            .push(Space::new().height(spacing::SM))
            .push(limits)
            .push(Space::new().height(spacing::MD))
            .push(controls)
            .push(Space::new().height(spacing::XL)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::video_stage)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_stops_at_limit() {
        let mut state = State::default();
        state.toggle_recording();
        for _ in 0..20 {
            state.tick();
        }
        assert_eq!(state.elapsed(), 15);
        assert!(!state.is_recording());
        assert!(state.has_recorded());
    }

    #[test]
    fn limit_is_locked_while_recording() {
        let mut state = State::default();
        state.toggle_recording();
        state.set_limit(RecordingLimit::Long);
        assert_eq!(state.limit(), RecordingLimit::Short);

        state.toggle_recording();
        state.set_limit(RecordingLimit::Long);
        assert_eq!(state.limit(), RecordingLimit::Long);
    }

    #[test]
    fn tick_is_ignored_when_idle() {
        let mut state = State::default();
        state.tick();
        assert_eq!(state.elapsed(), 0);
    }

    #[test]
    fn new_take_restarts_the_counter() {
        let mut state = State::default();
        state.toggle_recording();
        state.tick();
        state.tick();
        state.toggle_recording();
        assert_eq!(state.elapsed(), 2);

        state.toggle_recording();
        assert_eq!(state.elapsed(), 0);
    }

    #[test]
    fn retake_clears_the_take() {
        let mut state = State::default();
        state.toggle_recording();
        state.tick();
        state.toggle_recording();
        state.retake();
        assert!(!state.has_recorded());
        assert_eq!(state.elapsed(), 0);
    }
}

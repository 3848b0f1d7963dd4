// SPDX-License-Identifier: MPL-2.0
//! Clip preview, timeline and tool tabs shared by the create flow's edit step
//! and the video editor overlay.

use crate::catalog::authoring::{format_clock, EditTool, EFFECTS, MUSIC_TRACKS, TEXT_STYLES, TIMELINE_SECONDS};
use crate::i18n::fluent::I18n;
use crate::ui::components::segmented;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles, slider as slider_styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, slider, text, text_input, Column, Row};
use iced::{Element, Length};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    tool: EditTool,
    playing: bool,
    /// Seconds into the clip, `0..=TIMELINE_SECONDS`.
    position: u32,
    effect: usize,
    text_style: usize,
    overlay_text: String,
    track: Option<usize>,
}

impl State {
    #[must_use]
    pub fn tool(&self) -> EditTool {
        self.tool
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectTool(EditTool),
    TogglePlay,
    Seek(u32),
    Effect(usize),
    TextStyle(usize),
    OverlayTextChanged(String),
    Track(usize),
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::SelectTool(tool) => state.tool = tool,
        Message::TogglePlay => state.playing = !state.playing,
        Message::Seek(position) => state.position = position.min(TIMELINE_SECONDS),
        Message::Effect(index) if index < EFFECTS.len() => state.effect = index,
        Message::TextStyle(index) if index < TEXT_STYLES.len() => state.text_style = index,
        Message::OverlayTextChanged(value) => state.overlay_text = value,
        Message::Track(index) if index < MUSIC_TRACKS.len() => {
            state.track = if state.track == Some(index) { None } else { Some(index) };
        }
        Message::Effect(_) | Message::TextStyle(_) | Message::Track(_) => {}
    }
}

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let preview = container(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(
                button(text(if state.playing { "⏸" } else { "▶" }).size(typography::TITLE_LG))
                    .on_press(Message::TogglePlay)
                    .padding(spacing::SM)
                    .style(button_styles::on_video(state.playing)),
            )
            .push(
                text(state.overlay_text.as_str())
                    .size(typography::TITLE_SM)
                    .color(palette::WHITE),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(container_styles::video_stage);

    let timeline = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(text(format_clock(state.position)).size(typography::CAPTION))
        .push(
            slider(0..=TIMELINE_SECONDS, state.position, Message::Seek)
                .style(slider_styles::timeline)
                .width(Length::Fill),
        )
        .push(text(format_clock(TIMELINE_SECONDS)).size(typography::CAPTION));

    let tools = segmented::view(
        EditTool::ALL.map(|tool| (tool, i18n.tr(tool.label_key()))),
        state.tool,
        Message::SelectTool,
    );

    Column::new()
        .spacing(spacing::SM)
        .push(preview)
        .push(timeline)
        .push(tools)
        .push(tool_panel(state, i18n))
        .into()
}

fn tool_panel<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.tool {
        EditTool::Trim => Column::new()
            .spacing(spacing::XXS)
            .push(text(i18n.tr("edit-trim-hint")).size(typography::BODY_SM))
            .push(
                text(i18n.tr_with_args(
                    "edit-trim-range",
                    &[("start", &format_clock(state.position)), ("end", &format_clock(TIMELINE_SECONDS))],
                ))
                .size(typography::CAPTION),
            )
            .into(),
        EditTool::Effects => choices(
            EFFECTS.iter().map(|(name, icon)| format!("{icon} {name}")),
            state.effect,
            Message::Effect,
        ),
        EditTool::Text => Column::new()
            .spacing(spacing::XS)
            .push(
                text_input(&i18n.tr("edit-text-placeholder"), &state.overlay_text)
                    .on_input(Message::OverlayTextChanged)
                    .padding(spacing::XS),
            )
            .push(choices(
                TEXT_STYLES.iter().map(|style| (*style).to_string()),
                state.text_style,
                Message::TextStyle,
            ))
            .into(),
        EditTool::Music => MUSIC_TRACKS
            .iter()
            .enumerate()
            .fold(Column::new().spacing(spacing::XXS), |column, (index, track)| {
                let chosen = state.track == Some(index);
                column.push(
                    button(
                        Row::new()
                            .spacing(spacing::SM)
                            .push(text(if chosen { "♫" } else { "♪" }))
                            .push(
                                Column::new()
                                    .push(text(track.name).size(typography::BODY_SM))
                                    .push(text(track.artist).size(typography::CAPTION))
                                    .width(Length::Fill),
                            )
                            .push(text(track.duration).size(typography::CAPTION)),
                    )
                    .on_press(Message::Track(index))
                    .width(Length::Fill)
                    .style(if chosen { button_styles::selected } else { button_styles::ghost }),
                )
            })
            .into(),
    };

    container(content)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(container_styles::card)
        .into()
}

fn choices<'a>(
    labels: impl Iterator<Item = String>,
    selected: usize,
    on_select: fn(usize) -> Message,
) -> Element<'a, Message> {
    labels
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(3)
        .fold(Column::new().spacing(spacing::XS), |column, chunk| {
            column.push(chunk.iter().fold(Row::new().spacing(spacing::XS), |row, (index, label)| {
                row.push(
                    button(text(label.clone()).size(typography::BODY_SM))
                        .on_press(on_select(*index))
                        .width(Length::Fill)
                        .style(if *index == selected {
                            button_styles::selected
                        } else {
                            button_styles::unselected
                        }),
                )
            }))
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_is_clamped_to_timeline() {
        let mut state = State::default();
        update(&mut state, Message::Seek(500));
        assert_eq!(state.position(), TIMELINE_SECONDS);
        update(&mut state, Message::Seek(12));
        assert_eq!(state.position(), 12);
    }

    #[test]
    fn play_toggles() {
        let mut state = State::default();
        update(&mut state, Message::TogglePlay);
        assert!(state.is_playing());
        update(&mut state, Message::TogglePlay);
        assert!(!state.is_playing());
    }

    #[test]
    fn track_toggles_and_ignores_unknown() {
        let mut state = State::default();
        update(&mut state, Message::Track(1));
        assert_eq!(state.track, Some(1));
        update(&mut state, Message::Track(1));
        assert_eq!(state.track, None);
        update(&mut state, Message::Track(99));
        assert_eq!(state.track, None);
    }

    #[test]
    fn tool_selection_sticks() {
        let mut state = State::default();
        update(&mut state, Message::SelectTool(EditTool::Music));
        assert_eq!(state.tool(), EditTool::Music);
    }
}

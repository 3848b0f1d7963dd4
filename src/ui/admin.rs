// SPDX-License-Identifier: MPL-2.0
//! Admin dashboard. Replaces the whole window while open.

use crate::catalog::analytics::{
    AdminSection, Priority, ReportStatus, ADMIN_STATS, CONTENT_BY_CATEGORY, REPORTS, REVENUE_SHARES,
    TOP_CREATORS, USER_GROWTH,
};
use crate::catalog::monetization::format_dollars;
use crate::i18n::fluent::I18n;
use crate::ui::components::{bar_chart, header, section, segmented, stat_card};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::alignment::Vertical;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    section: AdminSection,
}

impl State {
    #[must_use]
    pub fn section(&self) -> AdminSection {
        self.section
    }

    /// Reports still waiting for a moderator.
    #[must_use]
    pub fn pending_reports(&self) -> usize {
        REPORTS
            .iter()
            .filter(|report| report.status == ReportStatus::Pending)
            .count()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Exit,
    ShowSection(AdminSection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Exit,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Exit => {
            state.section = AdminSection::default();
            Event::Exit
        }
        Message::ShowSection(section) => {
            state.section = section;
            Event::None
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let content: Element<'_, Message> = match state.section {
        AdminSection::Overview => Column::new()
            .spacing(spacing::MD)
            .push(stat_card::grid(ADMIN_STATS, i18n))
            .push(section::view(
                i18n.tr("admin-user-growth"),
                bar_chart::view(USER_GROWTH, palette::BRAND_500),
            ))
            .into(),
        AdminSection::Users => section::view(
            i18n.tr("admin-top-creators"),
            TOP_CREATORS.iter().fold(Column::new().spacing(spacing::SM), |column, creator| {
                column.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .align_y(Vertical::Center)
                        .push(text(format!("#{}", creator.rank)).size(typography::TITLE_SM))
                        .push(
                            Column::new()
                                .width(Length::Fill)
                                .push(text(creator.name).size(typography::BODY))
                                .push(
                                    text(format!(
                                        "{} · {} · {}",
                                        creator.handle,
                                        i18n.tr_with_args("admin-followers", &[("count", creator.followers)]),
                                        i18n.tr_with_args("admin-videos", &[("count", &creator.videos.to_string())]),
                                    ))
                                    .size(typography::CAPTION)
                                    .color(palette::GRAY_500),
                                ),
                        )
                        .push(text(creator.revenue).size(typography::BODY).color(palette::SUCCESS_500)),
                )
            }),
        ),
        AdminSection::Content => section::view(
            i18n.tr("admin-content-by-category"),
            bar_chart::view(CONTENT_BY_CATEGORY, palette::ACCENT_500),
        ),
        AdminSection::Revenue => section::view(
            i18n.tr("admin-revenue-sources"),
            REVENUE_SHARES.iter().fold(Column::new().spacing(spacing::SM), |column, share| {
                column.push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(
                            Row::new()
                                .push(text(share.source).size(typography::BODY).width(Length::Fill))
                                .push(text(format!("{}% · {}", share.percent, format_dollars(share.amount * 100))).size(typography::BODY_SM)),
                        )
                        .push(share_bar(share.percent)),
                )
            }),
        ),
        AdminSection::Reports => section::view(
            i18n.tr_with_args("admin-reports-pending", &[("count", &state.pending_reports().to_string())]),
            REPORTS.iter().fold(Column::new().spacing(spacing::SM), |column, report| {
                let status_color = match report.status {
                    ReportStatus::Pending => palette::WARNING_500,
                    ReportStatus::Investigating => palette::INFO_500,
                    ReportStatus::Resolved => palette::SUCCESS_500,
                };
                let mut title = Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(text(report.kind).size(typography::BODY))
                    .push(
                        container(text(i18n.tr(report.status.label_key())).size(typography::CAPTION))
                            .padding([0.0, spacing::XS])
                            .style(container_styles::badge(status_color)),
                    );
                if report.priority == Priority::High {
                    title = title.push(
                        text(i18n.tr("admin-priority-high"))
                            .size(typography::CAPTION)
                            .color(palette::ERROR_500),
                    );
                }
                column.push(
                    Column::new()
                        .push(title)
                        .push(
                            text(format!("{} · {}", report.user, report.video))
                                .size(typography::CAPTION)
                                .color(palette::GRAY_500),
                        ),
                )
            }),
        ),
    };

    let exit = button(text(i18n.tr("admin-exit")))
        .on_press(Message::Exit)
        .style(button_styles::danger);

    let body = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(segmented::view(
            AdminSection::ALL.map(|section| (section, i18n.tr(section.label_key()))),
            state.section,
            Message::ShowSection,
        ))
        .push(content);

    container(
        Column::new()
            .push(header::view(i18n.tr("admin-title"), None, Some(exit.into())))
            .push(scrollable(body).height(Length::Fill)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(container_styles::screen)
    .into()
}

/// Horizontal bar filled to `percent`.
fn share_bar<'a>(percent: u8) -> Element<'a, Message> {
    let filled = u16::from(percent.min(100));
    Row::new()
        .height(6)
        .push(
            container(Space::new())
                .width(Length::FillPortion(filled.max(1)))
                .height(Length::Fill)
                .style(container_styles::progress(true)),
        )
        .push(
            container(Space::new())
                .width(Length::FillPortion((100 - filled).max(1)))
                .height(Length::Fill)
                .style(container_styles::progress(false)),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_switch_and_exit_resets() {
        let mut state = State::default();
        update(&mut state, Message::ShowSection(AdminSection::Reports));
        assert_eq!(state.section(), AdminSection::Reports);
        assert_eq!(update(&mut state, Message::Exit), Event::Exit);
        assert_eq!(state.section(), AdminSection::Overview);
    }

    #[test]
    fn pending_reports_are_counted() {
        assert_eq!(State::default().pending_reports(), 2);
    }
}

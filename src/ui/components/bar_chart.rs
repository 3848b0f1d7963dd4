// SPDX-License-Identifier: MPL-2.0
//! Bar chart drawn on a canvas, with labels underneath.

use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use iced::widget::{canvas, text, Column, Row};
use iced::{alignment, mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

/// Gap between two bars, as a fraction of a slot's width.
const BAR_GAP_RATIO: f32 = 0.3;

/// Bars scaled against the largest value.
#[derive(Debug, Clone)]
pub struct BarChart {
    values: Vec<u64>,
    color: Color,
}

impl BarChart {
    #[must_use]
    pub fn new(values: Vec<u64>, color: Color) -> Self {
        Self { values, color }
    }

    /// Heights of each bar as a fraction of the tallest one.
    #[must_use]
    pub fn ratios(&self) -> Vec<f32> {
        let max = self.values.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return vec![0.0; self.values.len()];
        }
        self.values
            .iter()
            .map(|value| *value as f32 / max as f32)
            .collect()
    }
}

impl<Message> canvas::Program<Message> for BarChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let ratios = self.ratios();
        if ratios.is_empty() {
            return vec![frame.into_geometry()];
        }

        let slot = bounds.width / ratios.len() as f32;
        let bar_width = slot * (1.0 - BAR_GAP_RATIO);
        for (index, ratio) in ratios.iter().enumerate() {
            let height = (bounds.height * ratio).max(1.0);
            let x = index as f32 * slot + (slot - bar_width) / 2.0;
            let path = canvas::Path::rounded_rectangle(
                Point::new(x, bounds.height - height),
                Size::new(bar_width, height),
                radius::SM.into(),
            );
            frame.fill(&path, self.color);
        }

        vec![frame.into_geometry()]
    }
}

/// Chart of `series` with its labels in a row below.
pub fn view<'a, Message: 'a>(series: &[(&'a str, u64)], color: Color) -> Element<'a, Message> {
    let chart = BarChart::new(series.iter().map(|(_, value)| *value).collect(), color);
    let labels = series.iter().fold(Row::new(), |row, (label, _)| {
        row.push(
            text(*label)
                .size(typography::CAPTION)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
    });

    Column::new()
        .spacing(spacing::XXS)
        .push(
            canvas::Canvas::new(chart)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CHART_HEIGHT)),
        )
        .push(labels)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::palette;

    #[test]
    fn ratios_scale_to_the_tallest_bar() {
        let chart = BarChart::new(vec![50, 100, 25], palette::BRAND_500);
        assert_eq!(chart.ratios(), vec![0.5, 1.0, 0.25]);
    }

    #[test]
    fn all_zero_series_has_flat_bars() {
        let chart = BarChart::new(vec![0, 0], palette::BRAND_500);
        assert_eq!(chart.ratios(), vec![0.0, 0.0]);
    }
}

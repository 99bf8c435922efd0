//! Trend chart widget.
//!
//! Renders an ordered record sequence as a connected-line or grouped-bar
//! visualization over the month axis. One visual series per descriptor,
//! colored from the theme palette cycled by index. Stateless; an empty
//! sequence renders an empty plot area.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Widget,
};

use crate::data::{MonthlyRecord, SeriesSpec};
use crate::theme::Theme;

/// Visualization style for a trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Connected line per series.
    #[default]
    Line,
    /// Grouped bars per month.
    Bar,
}

/// A trend chart over the month axis.
#[derive(Debug, Clone)]
pub struct TrendChart<'a> {
    title: &'a str,
    records: &'a [MonthlyRecord],
    series: &'a [SeriesSpec],
    theme: &'a Theme,
    kind: ChartKind,
    scale: f64,
    color_offset: usize,
}

impl<'a> TrendChart<'a> {
    /// Creates a line chart for the given records and series descriptors.
    #[must_use]
    pub fn new(
        title: &'a str,
        records: &'a [MonthlyRecord],
        series: &'a [SeriesSpec],
        theme: &'a Theme,
    ) -> Self {
        Self {
            title,
            records,
            series,
            theme,
            kind: ChartKind::Line,
            scale: 1.0,
            color_offset: 0,
        }
    }

    /// Sets the visualization style.
    #[must_use]
    pub fn kind(mut self, kind: ChartKind) -> Self {
        self.kind = kind;
        self
    }

    /// Multiplies every plotted value, e.g. 100.0 for fraction-to-percent.
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Starts palette cycling at `offset` instead of the first color.
    #[must_use]
    pub fn color_offset(mut self, offset: usize) -> Self {
        self.color_offset = offset;
        self
    }

    /// Largest scaled value across all series, for the y-axis bound.
    fn max_value(&self) -> f64 {
        let mut max = 0.0_f64;
        for spec in self.series {
            for record in self.records {
                max = max.max(spec.metric.value(record) * self.scale);
            }
        }
        max
    }

    fn render_line(self, area: Rect, buf: &mut Buffer, block: Block<'a>) {
        let n = self.records.len();
        let points: Vec<Vec<(f64, f64)>> = self
            .series
            .iter()
            .map(|spec| {
                self.records
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (i as f64, spec.metric.value(r) * self.scale))
                    .collect()
            })
            .collect();

        let datasets: Vec<Dataset> = self
            .series
            .iter()
            .zip(points.iter())
            .enumerate()
            .map(|(idx, (spec, data))| {
                Dataset::default()
                    .name(spec.name)
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(self.theme.series_color(self.color_offset + idx)))
                    .data(data)
            })
            .collect();

        let x_max = n.saturating_sub(1).max(1) as f64;
        let x_labels: Vec<Line> = self.records.iter().map(|r| Line::from(r.month)).collect();

        let y_max = self.max_value().max(1.0);
        let y_labels: Vec<Line> = vec![
            Line::from("0"),
            Line::from(format!("{:.0}", y_max / 2.0)),
            Line::from(format!("{:.0}", y_max)),
        ];

        let axis_style = Style::default().fg(self.theme.border());
        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }

    fn render_bar(self, area: Rect, buf: &mut Buffer, block: Block<'a>) {
        let mut chart = BarChart::default()
            .block(block)
            .bar_width(3)
            .bar_gap(1)
            .group_gap(2);

        for record in self.records {
            let bars: Vec<Bar> = self
                .series
                .iter()
                .enumerate()
                .map(|(idx, spec)| {
                    let value = spec.metric.value(record) * self.scale;
                    Bar::default()
                        .value(value.round().max(0.0) as u64)
                        .style(Style::default().fg(self.theme.series_color(self.color_offset + idx)))
                })
                .collect();

            chart = chart.data(
                BarGroup::default()
                    .label(Line::from(record.month))
                    .bars(&bars),
            );
        }

        chart.render(area, buf);
    }
}

impl Widget for TrendChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border()));

        if self.records.is_empty() || self.series.is_empty() {
            // Empty plot area: just the framed block.
            block.render(area, buf);
            return;
        }

        match self.kind {
            ChartKind::Line => self.render_line(area, buf, block),
            ChartKind::Bar => self.render_bar(area, buf, block),
        }
    }
}

//! Metric tile widget.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::Theme;

/// Stateless display of a single scalar value with label and subtitle.
#[derive(Debug, Clone)]
pub struct MetricTile<'a> {
    title: &'a str,
    value: String,
    subtitle: &'a str,
    theme: &'a Theme,
}

impl<'a> MetricTile<'a> {
    /// Creates a tile for the given title, formatted value, and subtitle.
    #[must_use]
    pub fn new(title: &'a str, value: String, subtitle: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            value,
            subtitle,
            theme,
        }
    }
}

impl Widget for MetricTile<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Big centered value in the vertical middle.
        let value_row = inner.y + inner.height / 2;
        let value_area = Rect::new(inner.x, value_row, inner.width, 1);
        Paragraph::new(Line::from(self.value))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(self.theme.fg())
                    .add_modifier(Modifier::BOLD),
            )
            .render(value_area, buf);

        // Subtitle on the bottom row, if there is room for both.
        let subtitle_row = inner.y + inner.height.saturating_sub(1);
        if subtitle_row > value_row {
            let subtitle_area = Rect::new(inner.x, subtitle_row, inner.width, 1);
            Paragraph::new(Line::from(self.subtitle))
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.border()))
                .render(subtitle_area, buf);
        }
    }
}

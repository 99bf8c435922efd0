//! Dashboard shell: tabs, sections, and pointer routing.
//!
//! The shell holds the only page-level state: which tab is active, whether
//! the help overlay is shown, and the overview tab's split panels. Switching
//! tabs is a pure transition; entering the overview tab remounts its panels
//! at 50/50, and any in-flight drag dies with the unmounted tab.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::aggregate::{formatted_average, formatted_delivery_percent};
use crate::data::{Metric, MonthlyRecord, SeriesSpec};
use crate::input::{PointerEvent, PointerKind};
use crate::layout::{responsive_grid, split_columns, stacked_rows, SplitAreas};
use crate::split::{PointerCapture, SplitPanel};
use crate::theme::Theme;
use crate::widgets::{ChartKind, MetricTile, TrendChart};
use crate::{debug, debug_log};

/// Number of split sections on the overview tab.
const OVERVIEW_SECTIONS: usize = 4;

/// Page description shown under the tab bar.
const PAGE_DESCRIPTION: &str =
    "A central place to track all engineering metrics and standards, can also be used to \
     define working agreements and track them.";

/// The two dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Split-panel overview: tiles next to trend charts.
    #[default]
    Overview,
    /// Grid of standalone trend charts.
    Detailed,
}

impl Tab {
    /// The other tab.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Tab::Overview => Tab::Detailed,
            Tab::Detailed => Tab::Overview,
        }
    }
}

/// Mounted state of the overview tab.
///
/// Owns the four split panels, the pointer-capture slot, and the divider
/// geometry recorded during the last render. Rebuilt from scratch whenever
/// the overview tab is entered, which is what resets every split to 50/50
/// and guarantees capture release on teardown.
#[derive(Debug, Clone, PartialEq)]
struct OverviewState {
    panels: Vec<SplitPanel>,
    capture: PointerCapture,
    geometry: Vec<SplitAreas>,
}

impl OverviewState {
    fn new() -> Self {
        Self {
            panels: vec![SplitPanel::new(); OVERVIEW_SECTIONS],
            capture: PointerCapture::new(),
            geometry: Vec::new(),
        }
    }
}

/// The dashboard page.
pub struct DashboardShell {
    records: Vec<MonthlyRecord>,
    theme: Theme,
    tab: Tab,
    show_help: bool,
    overview: OverviewState,
}

impl DashboardShell {
    /// Creates the shell over the given record sequence.
    #[must_use]
    pub fn new(records: Vec<MonthlyRecord>, theme: Theme) -> Self {
        Self {
            records,
            theme,
            tab: Tab::Overview,
            show_help: false,
            overview: OverviewState::new(),
        }
    }

    /// The active tab.
    #[must_use]
    pub fn active_tab(&self) -> Tab {
        self.tab
    }

    /// Switches tabs. Re-selecting the active tab is a no-op.
    ///
    /// Leaving the overview tab unmounts it: split panels and any active
    /// pointer capture are discarded, and a fresh 50/50 state is mounted on
    /// the next entry.
    pub fn set_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.tab = tab;
        self.overview = OverviewState::new();
    }

    /// Cycles to the next tab.
    pub fn next_tab(&mut self) {
        self.set_tab(self.tab.next());
    }

    /// Toggles the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Whether the help overlay is visible.
    #[must_use]
    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    /// Left/right shares of overview section `index` (tests and callers).
    #[must_use]
    pub fn section_split(&self, index: usize) -> Option<(f64, f64)> {
        self.overview
            .panels
            .get(index)
            .map(|p| (p.split().left(), p.split().right()))
    }

    /// Whether any overview divider drag is in progress.
    #[must_use]
    pub fn drag_active(&self) -> bool {
        self.overview.capture.owner().is_some()
    }

    /// Routes a pointer event into the overview split panels.
    ///
    /// Pointer-down on a divider acquires the capture; while captured, every
    /// move is routed to that panel regardless of position, so the drag
    /// survives the pointer leaving the divider cell. Pointer-up anywhere
    /// releases. Events on the detailed tab are ignored.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        if self.tab != Tab::Overview {
            return;
        }

        match event.kind {
            PointerKind::Down => {
                let hit = self
                    .overview
                    .geometry
                    .iter()
                    .position(|areas| areas.divider_contains(event.column, event.row));

                if let Some(index) = hit {
                    debug_log!(
                        debug::Level::Debug,
                        "shell",
                        "drag start on section {} at col {}",
                        index,
                        event.column
                    );
                    self.overview.panels[index].begin_drag(event.column);
                    self.overview.capture.acquire(index);
                }
            }
            PointerKind::Move => {
                if let Some(index) = self.overview.capture.owner() {
                    let width = self
                        .overview
                        .geometry
                        .get(index)
                        .map(container_width)
                        .unwrap_or(0);
                    self.overview.panels[index].drag_to(event.column, width);
                }
            }
            PointerKind::Up => {
                if let Some(index) = self.overview.capture.release() {
                    self.overview.panels[index].end_drag();
                    debug_log!(debug::Level::Debug, "shell", "drag end on section {}", index);
                }
            }
        }
    }

    /// Renders the whole page.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Length(1), // tab bar
                Constraint::Length(1), // description
                Constraint::Min(0),    // body
            ])
            .split(area);

        self.render_header(frame, chunks[0], chunks[1], chunks[2]);

        match self.tab {
            Tab::Overview => self.render_overview(frame, chunks[3]),
            Tab::Detailed => self.render_detailed(frame, chunks[3]),
        }

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, title: Rect, tabs: Rect, desc: Rect) {
        let title_line = Line::from(Span::styled(
            " Engineering Overview",
            Style::default()
                .fg(self.theme.fg())
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(title_line), title);

        let active = Style::default()
            .fg(self.theme.accent())
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        let inactive = Style::default().fg(self.theme.border());

        let (overview_style, detailed_style) = match self.tab {
            Tab::Overview => (active, inactive),
            Tab::Detailed => (inactive, active),
        };

        let tab_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("[1] Overview", overview_style),
            Span::raw("   "),
            Span::styled("[2] Detailed Metrics", detailed_style),
        ]);
        frame.render_widget(Paragraph::new(tab_line), tabs);

        let desc_line = Line::from(Span::styled(
            format!(" {}", PAGE_DESCRIPTION),
            Style::default().fg(self.theme.border()),
        ));
        frame.render_widget(Paragraph::new(desc_line), desc);
    }

    fn render_overview(&mut self, frame: &mut Frame, body: Rect) {
        let rows = stacked_rows(body, OVERVIEW_SECTIONS);

        let geometry: Vec<SplitAreas> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| split_columns(*row, self.overview.panels[i].split().left()))
            .collect();

        for (index, areas) in geometry.iter().enumerate() {
            self.render_divider(frame, areas.divider, self.overview.panels[index].is_dragging());
            self.render_overview_section(frame, index, areas);
        }

        // Divider hit testing uses the geometry of the frame on screen.
        self.overview.geometry = geometry;
    }

    fn render_overview_section(&self, frame: &mut Frame, index: usize, areas: &SplitAreas) {
        let records = &self.records;
        let theme = &self.theme;

        match index {
            0 => {
                frame.render_widget(
                    MetricTile::new(
                        "Average PR merged per month",
                        formatted_average(records, Metric::PrsMerged),
                        "Pull Requests merged per month",
                        theme,
                    ),
                    areas.left,
                );
                let series = [
                    SeriesSpec::new(Metric::PrsMerged, "PRs merged"),
                    SeriesSpec::new(Metric::PrsCreated, "PRs created"),
                ];
                frame.render_widget(
                    TrendChart::new("PRs per Month", records, &series, theme),
                    areas.right,
                );
            }
            1 => {
                frame.render_widget(
                    MetricTile::new(
                        "Lead Time for Change (Hours)",
                        formatted_average(records, Metric::LeadTime),
                        "Time from opening a PR to its deployment",
                        theme,
                    ),
                    areas.left,
                );
                let series = [SeriesSpec::new(Metric::LeadTime, "Lead Time (Hours)")];
                frame.render_widget(
                    TrendChart::new("Lead Time for Change", records, &series, theme)
                        .color_offset(2),
                    areas.right,
                );
            }
            2 => {
                frame.render_widget(
                    MetricTile::new(
                        "Average Critical Defects",
                        formatted_average(records, Metric::CriticalDefects),
                        "Bugs reported as critical severity",
                        theme,
                    ),
                    areas.left,
                );
                let series = [SeriesSpec::new(Metric::CriticalDefects, "Critical Defects")];
                frame.render_widget(
                    TrendChart::new("Critical Defects per Month", records, &series, theme)
                        .color_offset(3),
                    areas.right,
                );
            }
            _ => {
                frame.render_widget(
                    MetricTile::new(
                        "Requirement Delivery Rate",
                        formatted_delivery_percent(records),
                        "Delivered vs. total requirements",
                        theme,
                    ),
                    areas.left,
                );
                frame.render_widget(
                    MetricTile::new(
                        "Deploy Frequency per Week",
                        formatted_average(records, Metric::DeployFrequency),
                        "Number of deployments per week",
                        theme,
                    ),
                    areas.right,
                );
            }
        }
    }

    fn render_divider(&self, frame: &mut Frame, divider: Rect, dragging: bool) {
        if divider.width == 0 || divider.height == 0 {
            return;
        }

        let style = if dragging {
            Style::default().fg(self.theme.accent())
        } else {
            Style::default().fg(self.theme.border())
        };

        let handle_start = divider.y + divider.height / 3;
        let handle_end = divider.y + (2 * divider.height) / 3;

        let buf = frame.buffer_mut();
        for y in divider.y..divider.y + divider.height {
            // Thicker accent handle over the middle third, like a grab bar.
            let (symbol, cell_style) = if (handle_start..=handle_end).contains(&y) {
                ("┃", Style::default().fg(self.theme.accent()))
            } else {
                ("│", style)
            };
            buf.set_string(divider.x, y, symbol, cell_style);
        }
    }

    fn render_detailed(&self, frame: &mut Frame, body: Rect) {
        let cells = responsive_grid(body, 5);
        let records = &self.records;
        let theme = &self.theme;

        let pr_series = [
            SeriesSpec::new(Metric::PrsMerged, "PRs merged"),
            SeriesSpec::new(Metric::PrsCreated, "PRs created"),
        ];
        let lead_series = [SeriesSpec::new(Metric::LeadTime, "Lead Time (Hours)")];
        let defect_series = [SeriesSpec::new(Metric::CriticalDefects, "Critical Defects")];
        let deploy_series = [SeriesSpec::new(Metric::DeployFrequency, "Deploys per Week")];
        let delivery_series = [SeriesSpec::new(Metric::DeliveryRate, "Delivery Rate (%)")];

        let charts = [
            TrendChart::new("Pull Request Trends", records, &pr_series, theme),
            TrendChart::new("Lead Time Trend", records, &lead_series, theme).color_offset(2),
            TrendChart::new("Critical Defects", records, &defect_series, theme)
                .kind(ChartKind::Bar)
                .color_offset(3),
            TrendChart::new("Deploy Frequency", records, &deploy_series, theme).color_offset(4),
            // Delivery rate is stored as a fraction; plot it as a percentage.
            TrendChart::new("Delivery Rate", records, &delivery_series, theme)
                .scale(100.0)
                .color_offset(5),
        ];

        for (chart, cell) in charts.into_iter().zip(cells) {
            frame.render_widget(chart, cell);
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let popup_width = 46;
        let popup_height = 12;

        let popup = Rect {
            x: (area.width.saturating_sub(popup_width)) / 2,
            y: (area.height.saturating_sub(popup_height)) / 2,
            width: popup_width.min(area.width),
            height: popup_height.min(area.height),
        };

        frame.render_widget(Clear, popup);

        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  engpulse - engineering metrics",
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("    1/o, h            Overview tab"),
            Line::from("    2/d, l            Detailed Metrics tab"),
            Line::from("    Tab               Next tab"),
            Line::from("    mouse drag        Resize split panels"),
            Line::from("    ?, F1             Toggle help"),
            Line::from("    q, Esc            Quit"),
        ];

        let help = Paragraph::new(help_text).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.accent())),
        );

        frame.render_widget(help, popup);
    }
}

/// Total width of a split container, divider included.
fn container_width(areas: &SplitAreas) -> u16 {
    areas.left.width + areas.divider.width + areas.right.width
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_months;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn shell() -> DashboardShell {
        DashboardShell::new(sample_months(), Theme::default())
    }

    fn draw(shell: &mut DashboardShell, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| shell.render(frame)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn pointer(kind: PointerKind, column: u16, row: u16) -> PointerEvent {
        PointerEvent { kind, column, row }
    }

    #[test]
    fn test_initial_state() {
        let shell = shell();

        assert_eq!(shell.active_tab(), Tab::Overview);
        assert!(!shell.help_visible());
        assert!(!shell.drag_active());
        for i in 0..4 {
            assert_eq!(shell.section_split(i), Some((50.0, 50.0)));
        }
    }

    #[test]
    fn test_overview_renders_tiles_and_charts() {
        let mut shell = shell();
        let out = draw(&mut shell, 120, 44);

        assert!(out.contains("Engineering Overview"));
        assert!(out.contains("Average PR merged per month"));
        assert!(out.contains("66.83"));
        assert!(out.contains("PRs per Month"));
        assert!(out.contains("Lead Time for Change"));
        assert!(out.contains("51.71"));
        assert!(out.contains("Critical Defects per Month"));
        assert!(out.contains("83.0%"));
        assert!(out.contains("Deploy Frequency per Week"));
        assert!(out.contains("4.06"));
    }

    #[test]
    fn test_detailed_renders_five_charts() {
        let mut shell = shell();
        shell.set_tab(Tab::Detailed);
        let out = draw(&mut shell, 140, 48);

        assert!(out.contains("Pull Request Trends"));
        assert!(out.contains("Lead Time Trend"));
        assert!(out.contains("Critical Defects"));
        assert!(out.contains("Deploy Frequency"));
        assert!(out.contains("Delivery Rate"));
    }

    #[test]
    fn test_tab_switching_is_pure() {
        let mut shell = shell();

        shell.set_tab(Tab::Detailed);
        assert_eq!(shell.active_tab(), Tab::Detailed);

        shell.next_tab();
        assert_eq!(shell.active_tab(), Tab::Overview);

        // Re-selecting the active tab changes nothing.
        shell.set_tab(Tab::Overview);
        assert_eq!(shell.active_tab(), Tab::Overview);
    }

    #[test]
    fn test_divider_drag_resizes_section() {
        let mut shell = shell();
        draw(&mut shell, 121, 44);

        // Divider of section 0 sits at the recorded geometry.
        let divider = shell.overview.geometry[0].divider;
        let (col, row) = (divider.x, divider.y);

        shell.on_pointer(pointer(PointerKind::Down, col, row));
        assert!(shell.drag_active());

        shell.on_pointer(pointer(PointerKind::Move, col + 12, row));
        let (left, right) = shell.section_split(0).unwrap();
        assert!(left > 50.0);
        assert!((left + right - 100.0).abs() < 1e-9);

        // Other sections are untouched.
        assert_eq!(shell.section_split(1), Some((50.0, 50.0)));

        shell.on_pointer(pointer(PointerKind::Up, col + 12, row));
        assert!(!shell.drag_active());
    }

    #[test]
    fn test_drag_survives_leaving_divider_row() {
        let mut shell = shell();
        draw(&mut shell, 121, 44);

        let divider = shell.overview.geometry[0].divider;
        shell.on_pointer(pointer(PointerKind::Down, divider.x, divider.y));

        // Move far away from the divider's own cells; capture still routes.
        shell.on_pointer(pointer(PointerKind::Move, divider.x + 20, 0));
        let (left, _) = shell.section_split(0).unwrap();
        assert!(left > 50.0);
    }

    #[test]
    fn test_moves_after_up_do_not_resize() {
        let mut shell = shell();
        draw(&mut shell, 121, 44);

        let divider = shell.overview.geometry[0].divider;
        shell.on_pointer(pointer(PointerKind::Down, divider.x, divider.y));
        shell.on_pointer(pointer(PointerKind::Move, divider.x + 10, divider.y));
        shell.on_pointer(pointer(PointerKind::Up, divider.x + 10, divider.y));

        let settled = shell.section_split(0);
        shell.on_pointer(pointer(PointerKind::Move, divider.x + 40, divider.y));

        assert_eq!(shell.section_split(0), settled);
    }

    #[test]
    fn test_down_outside_divider_does_not_capture() {
        let mut shell = shell();
        draw(&mut shell, 121, 44);

        let divider = shell.overview.geometry[0].divider;
        shell.on_pointer(pointer(PointerKind::Down, divider.x.saturating_sub(5), divider.y));

        assert!(!shell.drag_active());
    }

    #[test]
    fn test_teardown_mid_drag_releases_capture() {
        let mut shell = shell();
        draw(&mut shell, 121, 44);

        let divider = shell.overview.geometry[0].divider;
        shell.on_pointer(pointer(PointerKind::Down, divider.x, divider.y));
        shell.on_pointer(pointer(PointerKind::Move, divider.x + 10, divider.y));
        assert!(shell.drag_active());

        // Switching tabs unmounts the overview mid-drag.
        shell.set_tab(Tab::Detailed);
        assert!(!shell.drag_active());

        // Further pointer traffic is inert.
        shell.on_pointer(pointer(PointerKind::Move, divider.x + 40, divider.y));
        shell.on_pointer(pointer(PointerKind::Up, divider.x + 40, divider.y));
        assert!(!shell.drag_active());

        // Returning to the overview mounts fresh 50/50 panels.
        shell.set_tab(Tab::Overview);
        for i in 0..4 {
            assert_eq!(shell.section_split(i), Some((50.0, 50.0)));
        }
    }

    #[test]
    fn test_full_width_drag_clamps_at_80() {
        let mut shell = shell();
        draw(&mut shell, 121, 44);

        let divider = shell.overview.geometry[0].divider;
        shell.on_pointer(pointer(PointerKind::Down, divider.x, divider.y));
        // Sweep well past the right edge of the terminal.
        shell.on_pointer(pointer(PointerKind::Move, u16::MAX, divider.y));

        assert_eq!(shell.section_split(0), Some((80.0, 20.0)));
    }

    #[test]
    fn test_pointer_ignored_on_detailed_tab() {
        let mut shell = shell();
        draw(&mut shell, 121, 44);
        let divider = shell.overview.geometry[0].divider;

        shell.set_tab(Tab::Detailed);
        shell.on_pointer(pointer(PointerKind::Down, divider.x, divider.y));

        assert!(!shell.drag_active());
    }

    #[test]
    fn test_help_overlay_toggles_and_renders() {
        let mut shell = shell();

        shell.toggle_help();
        assert!(shell.help_visible());

        let out = draw(&mut shell, 120, 44);
        assert!(out.contains("Help"));
        assert!(out.contains("Resize split panels"));

        shell.toggle_help();
        assert!(!shell.help_visible());
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut shell = shell();
        for (w, h) in [(1, 1), (10, 4), (30, 8)] {
            let _ = draw(&mut shell, w, h);
        }
    }
}

//! Layout geometry for the dashboard.
//!
//! Pure `Rect` arithmetic: the split-column geometry that realizes a
//! [`SplitState`](crate::split::SplitState), the stacked overview rows, and
//! the responsive grid used by the detailed tab.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas produced by splitting a container into left pane, divider, right pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitAreas {
    /// Left child area.
    pub left: Rect,
    /// One-column divider strip between the children.
    pub divider: Rect,
    /// Right child area.
    pub right: Rect,
}

impl SplitAreas {
    /// Whether `(col, row)` falls on the divider strip.
    #[must_use]
    pub fn divider_contains(&self, col: u16, row: u16) -> bool {
        col >= self.divider.x
            && col < self.divider.x + self.divider.width
            && row >= self.divider.y
            && row < self.divider.y + self.divider.height
    }
}

/// Splits `area` into left/divider/right columns for the given left share.
///
/// The divider is one column wide; the left pane takes `left_pct` percent of
/// the remaining width (rounded), the right pane the rest.
#[must_use]
pub fn split_columns(area: Rect, left_pct: f64) -> SplitAreas {
    let usable = area.width.saturating_sub(1);
    let left_width = ((f64::from(usable) * left_pct) / 100.0).round() as u16;
    let left_width = left_width.min(usable);

    let left = Rect::new(area.x, area.y, left_width, area.height);
    let divider = Rect::new(
        area.x + left_width,
        area.y,
        if area.width > left_width { 1 } else { 0 },
        area.height,
    );
    let right = Rect::new(
        divider.x + divider.width,
        area.y,
        area.width.saturating_sub(left_width + divider.width),
        area.height,
    );

    SplitAreas { left, divider, right }
}

/// Splits `area` into `count` equal-height stacked rows.
#[must_use]
pub fn stacked_rows(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return vec![];
    }

    let constraints: Vec<Constraint> =
        (0..count).map(|_| Constraint::Ratio(1, count as u32)).collect();

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

/// Terminal width below which the detail grid collapses to one column.
const GRID_BREAKPOINT: u16 = 100;

/// Lays out `count` cells in a responsive grid.
///
/// Two columns when the area is at least [`GRID_BREAKPOINT`] columns wide,
/// one otherwise; rows split the height evenly. Cells are returned in
/// row-major order.
#[must_use]
pub fn responsive_grid(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return vec![];
    }

    let cols: usize = if area.width >= GRID_BREAKPOINT { 2 } else { 1 };
    let rows = count.div_ceil(cols);

    let row_areas = stacked_rows(area, rows);
    let mut cells = Vec::with_capacity(count);

    for (row_idx, row_area) in row_areas.iter().enumerate() {
        let remaining = count - row_idx * cols;
        let in_row = remaining.min(cols);

        let col_constraints: Vec<Constraint> =
            (0..in_row).map(|_| Constraint::Ratio(1, in_row as u32)).collect();

        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);

        cells.extend(col_areas.iter().copied());
    }

    cells
}

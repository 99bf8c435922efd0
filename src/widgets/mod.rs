//! Stateless display widgets for the dashboard.
//!
//! Tiles and charts are pure rendering over immutable inputs; all interactive
//! state lives in the shell and the split panels.

pub mod chart;
pub mod tile;

pub use chart::{ChartKind, TrendChart};
pub use tile::MetricTile;

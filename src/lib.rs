//! # Engpulse
//!
//! Terminal dashboard for engineering delivery metrics.
//!
//! Renders pull-request throughput, lead time for change, critical defects,
//! deploy frequency, and requirement delivery rate from a fixed sample
//! dataset as a two-tab TUI page: an overview of metric tiles next to trend
//! charts in mouse-resizable split panels, and a detailed grid of standalone
//! charts.
//!
//! ## Architecture
//!
//! - **data**: monthly records, metric identifiers, the sample dataset
//! - **aggregate**: metric averaging with the literal anomalous-month rule
//! - **split**: resizable split-panel state machine and pointer capture
//! - **layout**: split-column, stacked-row, and responsive-grid geometry
//! - **widgets**: stateless metric tiles and trend charts
//! - **shell**: tab state, section composition, pointer routing
//! - **app**: terminal lifecycle and the event loop
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use engpulse::{app::App, config::Config};
//!
//! let config = Config::load_or_default("~/.config/engpulse/config.yaml");
//! App::new(config).run()?;
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod aggregate;
pub mod app;
pub mod config;
pub mod data;
pub mod debug;
pub mod error;
pub mod input;
pub mod layout;
pub mod shell;
pub mod split;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use config::Config;
pub use data::{sample_months, Metric, MonthlyRecord, SeriesSpec};
pub use error::{DashboardError, Result};
pub use shell::{DashboardShell, Tab};
pub use split::{SplitPanel, SplitState};
pub use theme::Theme;

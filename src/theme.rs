//! Theme system for the dashboard.
//!
//! Colors are specified as hex strings in configuration and parsed into
//! `Color::Rgb` at render time. Chart series take their colors from the theme
//! palette, cycled by series index when a chart has more series than colors.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name.
    #[serde(default = "default_name")]
    pub name: String,

    /// Background color.
    #[serde(default = "default_background")]
    pub background: String,

    /// Foreground color.
    #[serde(default = "default_foreground")]
    pub foreground: String,

    /// Panel border color.
    #[serde(default = "default_border")]
    pub border: String,

    /// Accent color (active tab, divider handle).
    #[serde(default = "default_accent")]
    pub accent: String,

    /// Chart series palette, cycled by series index.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

fn default_name() -> String {
    "default".to_string()
}
fn default_background() -> String {
    "#111827".to_string()
}
fn default_foreground() -> String {
    "#e5e7eb".to_string()
}
fn default_border() -> String {
    "#374151".to_string()
}
fn default_accent() -> String {
    "#3b82f6".to_string()
}
fn default_palette() -> Vec<String> {
    // Series colors from the reference page, in plot order.
    ["#06b6d4", "#0ea5e9", "#10b981", "#f43f5e", "#8b5cf6", "#f59e0b"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: default_name(),
            background: default_background(),
            foreground: default_foreground(),
            border: default_border(),
            accent: default_accent(),
            palette: default_palette(),
        }
    }
}

impl Theme {
    /// Creates a new default theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the background color.
    #[must_use]
    pub fn bg(&self) -> Color {
        parse_color(&self.background)
    }

    /// Returns the foreground color.
    #[must_use]
    pub fn fg(&self) -> Color {
        parse_color(&self.foreground)
    }

    /// Returns the panel border color.
    #[must_use]
    pub fn border(&self) -> Color {
        parse_color(&self.border)
    }

    /// Returns the accent color.
    #[must_use]
    pub fn accent(&self) -> Color {
        parse_color(&self.accent)
    }

    /// Returns the color for series `idx`, cycling the palette.
    #[must_use]
    pub fn series_color(&self, idx: usize) -> Color {
        if self.palette.is_empty() {
            return Color::White;
        }
        parse_color(&self.palette[idx % self.palette.len()])
    }
}

/// Parses a hex color string to a ratatui Color.
fn parse_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() != 6 {
        return Color::White;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    Color::Rgb(r, g, b)
}

use std::path::Path;
use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Presentation settings of the balance chart. Every field is optional in a
/// style file; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub series_label: String,
    pub line_tension: f64,
    pub background_color: String,
    pub border_color: String,
    pub point_radius: u32,
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_hover_radius: u32,
    pub point_hover_background_color: String,
    pub point_hit_radius: u32,
    pub point_border_width: u32,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub y_grid_color: String,
    pub currency_suffix: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_label: "Cash Flow".to_string(),
            line_tension: 0.3,
            background_color: "rgba(2,117,216,0.2)".to_string(),
            border_color: "rgba(2,117,216,1)".to_string(),
            point_radius: 5,
            point_background_color: "rgba(2,117,216,1)".to_string(),
            point_border_color: "rgba(255,255,255,0.8)".to_string(),
            point_hover_radius: 5,
            point_hover_background_color: "rgba(2,117,216,1)".to_string(),
            point_hit_radius: 50,
            point_border_width: 2,
            x_axis_label: "ID transankce".to_string(),
            y_axis_label: "Stav po transakci".to_string(),
            y_grid_color: "rgba(0, 0, 0, .125)".to_string(),
            currency_suffix: " Kč".to_string(),
        }
    }
}

impl ChartStyle {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid chart style")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read chart style {}", path.display()))?;
        Self::from_json(&raw)
    }
}

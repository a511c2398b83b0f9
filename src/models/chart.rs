use serde::{Deserialize, Serialize};
use crate::models::style::ChartStyle;
use crate::models::transaction::TransactionRecord;

/// Parallel x/y sequences taken from a response, in the order received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_records(records: &[TransactionRecord]) -> Self {
        let labels = records.iter().map(|r| r.id_transaction.to_string()).collect();
        let values = records.iter().map(|r| r.balance_after).collect();
        Self { labels, values }
    }
}

// Chart.js (v2) line chart configuration. Field names follow what the
// widget expects on the wire.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
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
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub scales: Scales,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scales {
    #[serde(rename = "xAxes")]
    pub x_axes: Vec<Axis>,
    #[serde(rename = "yAxes")]
    pub y_axes: Vec<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub grid_lines: GridLines,
    pub scale_label: ScaleLabel,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ticks: Option<Ticks>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    pub display: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLabel {
    pub display: bool,
    #[serde(rename = "labelString")]
    pub label_string: String,
}

/// Tick labels are the raw value followed by `suffix`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticks {
    pub suffix: String,
}

impl Ticks {
    pub fn format(&self, value: f64) -> String {
        format!("{}{}", value, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub display: bool,
}

impl ChartConfig {
    /// Builds the balance line chart: one dataset, hidden legend, no
    /// vertical gridlines, currency-suffixed y ticks.
    pub fn line(series: ChartSeries, style: &ChartStyle) -> Self {
        let dataset = Dataset {
            label: style.series_label.clone(),
            line_tension: style.line_tension,
            background_color: style.background_color.clone(),
            border_color: style.border_color.clone(),
            point_radius: style.point_radius,
            point_background_color: style.point_background_color.clone(),
            point_border_color: style.point_border_color.clone(),
            point_hover_radius: style.point_hover_radius,
            point_hover_background_color: style.point_hover_background_color.clone(),
            point_hit_radius: style.point_hit_radius,
            point_border_width: style.point_border_width,
            data: series.values,
        };

        let x_axis = Axis {
            grid_lines: GridLines { display: false, color: None },
            scale_label: ScaleLabel {
                display: true,
                label_string: style.x_axis_label.clone(),
            },
            ticks: None,
        };
        let y_axis = Axis {
            grid_lines: GridLines {
                display: true,
                color: Some(style.y_grid_color.clone()),
            },
            scale_label: ScaleLabel {
                display: true,
                label_string: style.y_axis_label.clone(),
            },
            ticks: Some(Ticks { suffix: style.currency_suffix.clone() }),
        };

        Self {
            chart_type: "line".to_string(),
            data: ChartData {
                labels: series.labels,
                datasets: vec![dataset],
            },
            options: ChartOptions {
                scales: Scales {
                    x_axes: vec![x_axis],
                    y_axes: vec![y_axis],
                },
                legend: Legend { display: false },
            },
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// Points of the first dataset; empty if there is none.
    pub fn values(&self) -> &[f64] {
        self.data.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }

    pub fn x_axis(&self) -> Option<&Axis> {
        self.options.scales.x_axes.first()
    }

    pub fn y_axis(&self) -> Option<&Axis> {
        self.options.scales.y_axes.first()
    }

    pub fn format_y_tick(&self, value: f64) -> String {
        match self.y_axis().and_then(|axis| axis.ticks.as_ref()) {
            Some(ticks) => ticks.format(value),
            None => value.to_string(),
        }
    }
}

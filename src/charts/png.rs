use std::path::{Path, PathBuf};
use anyhow::anyhow;
use plotters::prelude::*;
use plotters::style::{RGBAColor, TRANSPARENT};
use tracing::{info, warn};
use crate::charts::{parse_css_color, ChartWidget};
use crate::enums::output_format::OutputFormat;
use crate::errors::LoaderError;
use crate::models::chart::ChartConfig;

// Samples per segment when the line is smoothed
const CURVE_STEPS: usize = 16;

/// Renders the chart to `<chart_dir>/<mount_point>.png` with plotters.
pub struct PngChartWidget {
    chart_dir: PathBuf,
    width: u32,
    height: u32,
}

impl PngChartWidget {
    pub fn new(chart_dir: PathBuf, width: u32, height: u32) -> Self {
        Self {
            chart_dir,
            width,
            height,
        }
    }

    fn draw(&self, path: &Path, config: &ChartConfig) -> anyhow::Result<()> {
        let labels = config.labels();
        let values = config.values();
        let dataset = config
            .data
            .datasets
            .first()
            .ok_or_else(|| anyhow!("Chart has no dataset"))?;
        let x_axis = config.x_axis().ok_or_else(|| anyhow!("Chart has no x axis"))?;
        let y_axis = config.y_axis().ok_or_else(|| anyhow!("Chart has no y axis"))?;

        let line_color = color_or(&dataset.border_color, BLACK.to_rgba());
        let fill_color = color_or(&dataset.background_color, TRANSPARENT);
        let point_fill = color_or(&dataset.point_background_color, line_color);
        let point_border = color_or(&dataset.point_border_color, WHITE.to_rgba());
        let grid_color = y_axis
            .grid_lines
            .color
            .as_deref()
            .map(|c| color_or(c, BLACK.mix(0.125)))
            .unwrap_or(BLACK.mix(0.125));

        let (y_min, y_max) = value_range(values);
        let x_max = (values.len() as f64 - 0.5).max(0.5);
        let points: Vec<(f64, f64)> = values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();

        let x_formatter = |x: &f64| {
            let idx = x.round();
            if idx < 0.0 || (x - idx).abs() > 1e-6 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        };
        let y_formatter = |y: &f64| config.format_y_tick(*y);

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| anyhow!("Failed to draw chart: {}", e))?;

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(90)
            .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)
            .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;

        let mut mesh = chart.configure_mesh();
        mesh.x_labels(labels.len().max(1))
            .x_label_formatter(&x_formatter)
            .y_label_formatter(&y_formatter)
            .bold_line_style(grid_color)
            .light_line_style(TRANSPARENT);
        if x_axis.scale_label.display {
            mesh.x_desc(x_axis.scale_label.label_string.as_str());
        }
        if y_axis.scale_label.display {
            mesh.y_desc(y_axis.scale_label.label_string.as_str());
        }
        if !x_axis.grid_lines.display {
            mesh.disable_x_mesh();
        }
        if !y_axis.grid_lines.display {
            mesh.disable_y_mesh();
        }
        mesh.draw().map_err(|e| anyhow!("Failed to draw chart: {}", e))?;

        if points.is_empty() {
            root.present().map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
            return Ok(());
        }

        let curve = smooth_line(&points, dataset.line_tension, CURVE_STEPS);
        chart
            .draw_series(AreaSeries::new(curve.clone(), y_min, fill_color))
            .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
        chart
            .draw_series(LineSeries::new(curve, line_color.stroke_width(3)))
            .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;

        let radius = dataset.point_radius as i32;
        chart
            .draw_series(points.iter().map(|&p| Circle::new(p, radius, point_fill.filled())))
            .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
        if dataset.point_border_width > 0 {
            chart
                .draw_series(points.iter().map(|&p| {
                    Circle::new(p, radius, point_border.stroke_width(dataset.point_border_width))
                }))
                .map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
        }

        root.present().map_err(|e| anyhow!("Failed to draw chart: {}", e))?;
        Ok(())
    }
}

impl ChartWidget for PngChartWidget {
    fn mount(&self, mount_point: &str, config: &ChartConfig) -> Result<(), LoaderError> {
        let path = self.chart_dir.join(format!("{}.{}", mount_point, OutputFormat::Png.extension()));
        self.draw(&path, config)
            .map_err(|e| LoaderError::Render(e.to_string()))?;
        info!("Mounted chart with {} points at {}", config.values().len(), path.display());
        Ok(())
    }
}

fn color_or(css: &str, fallback: RGBAColor) -> RGBAColor {
    parse_css_color(css).unwrap_or_else(|| {
        warn!("Unsupported colour {:?}, using fallback", css);
        fallback
    })
}

/// Y range covering every value with some headroom. Flat or empty data
/// still get a non-empty range.
pub fn value_range(values: &[f64]) -> (f64, f64) {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return (0.0, 1.0);
    }
    let span = max - min;
    let pad = if span > 0.0 { span * 0.1 } else { (max.abs() * 0.1).max(1.0) };
    (min - pad, max + pad)
}

/// Bezier smoothing of a polyline. `tension` 0 keeps straight segments;
/// every input point stays on the curve.
pub fn smooth_line(points: &[(f64, f64)], tension: f64, steps: usize) -> Vec<(f64, f64)> {
    if points.len() < 3 || tension <= 0.0 || steps < 2 {
        return points.to_vec();
    }

    let n = points.len();
    let at = |i: isize| points[i.clamp(0, n as isize - 1) as usize];
    let mut curve = Vec::with_capacity((n - 1) * steps + 1);
    curve.push(points[0]);

    for i in 0..n - 1 {
        let i = i as isize;
        let (p0, p1, p2, p3) = (at(i - 1), at(i), at(i + 1), at(i + 2));
        let c1 = (p1.0 + (p2.0 - p0.0) * tension / 2.0, p1.1 + (p2.1 - p0.1) * tension / 2.0);
        let c2 = (p2.0 - (p3.0 - p1.0) * tension / 2.0, p2.1 - (p3.1 - p1.1) * tension / 2.0);

        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            let u = 1.0 - t;
            let b0 = u * u * u;
            let b1 = 3.0 * u * u * t;
            let b2 = 3.0 * u * t * t;
            let b3 = t * t * t;
            curve.push((
                b0 * p1.0 + b1 * c1.0 + b2 * c2.0 + b3 * p2.0,
                b0 * p1.1 + b1 * c1.1 + b2 * c2.1 + b3 * p2.1,
            ));
        }
    }
    curve
}

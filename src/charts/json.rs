use std::path::PathBuf;
use tracing::info;
use crate::charts::ChartWidget;
use crate::enums::output_format::OutputFormat;
use crate::errors::LoaderError;
use crate::models::chart::ChartConfig;

/// Writes the Chart.js configuration to `<chart_dir>/<mount_point>.json`.
/// Chart.js itself does not read `ticks.suffix`; the page needs a y tick
/// callback that appends it.
pub struct JsonChartWidget {
    chart_dir: PathBuf,
}

impl JsonChartWidget {
    pub fn new(chart_dir: PathBuf) -> Self {
        Self { chart_dir }
    }
}

impl ChartWidget for JsonChartWidget {
    fn mount(&self, mount_point: &str, config: &ChartConfig) -> Result<(), LoaderError> {
        let path = self.chart_dir.join(format!("{}.{}", mount_point, OutputFormat::Json.extension()));
        let body = serde_json::to_string_pretty(config)
            .map_err(|e| LoaderError::Render(e.to_string()))?;
        std::fs::write(&path, body)?;
        info!("Mounted chart config at {}", path.display());
        Ok(())
    }
}

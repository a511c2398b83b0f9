//! Chart widgets - mount a chart configuration at a mount point

mod color;
mod json;
mod png;

pub use color::parse_css_color;
pub use json::JsonChartWidget;
pub use png::PngChartWidget;

use crate::errors::LoaderError;
use crate::models::chart::ChartConfig;

/// Rendering collaborator of the chart loader. `mount_point` names where
/// the chart goes; the widget decides what that means for its output.
pub trait ChartWidget {
    fn mount(&self, mount_point: &str, config: &ChartConfig) -> Result<(), LoaderError>;
}

impl<W: ChartWidget + ?Sized> ChartWidget for Box<W> {
    fn mount(&self, mount_point: &str, config: &ChartConfig) -> Result<(), LoaderError> {
        (**self).mount(mount_point, config)
    }
}

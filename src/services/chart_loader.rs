use tracing::{error, info};
use crate::charts::ChartWidget;
use crate::models::chart::{ChartConfig, ChartSeries};
use crate::models::style::ChartStyle;
use crate::repositories::transaction_repository::TransactionRepository;

pub const DEFAULT_MOUNT_POINT: &str = "AreaChartBalanceBefore";

/// Fetches the last 20 transactions and mounts their balance chart.
pub struct ChartLoader<W: ChartWidget> {
    transaction_repository: TransactionRepository,
    widget: W,
    style: ChartStyle,
    mount_point: String,
}

impl<W: ChartWidget> ChartLoader<W> {
    pub fn new(transaction_repository: TransactionRepository, widget: W) -> Self {
        Self {
            transaction_repository,
            widget,
            style: ChartStyle::default(),
            mount_point: DEFAULT_MOUNT_POINT.to_string(),
        }
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_mount_point(mut self, mount_point: impl Into<String>) -> Self {
        self.mount_point = mount_point.into();
        self
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// One request, one render. A failed request is logged and no chart is
    /// mounted; nothing is returned to the caller either way.
    pub async fn load_data_and_create_chart(&self) {
        let records = match self.transaction_repository.get_last20().await {
            Ok(records) => records,
            Err(e) => {
                error!("Loading chart data failed: {}", e);
                return;
            }
        };

        let series = ChartSeries::from_records(&records);
        let config = ChartConfig::line(series, &self.style);
        match self.widget.mount(&self.mount_point, &config) {
            Ok(()) => info!("Balance chart mounted at {} ({} points)", self.mount_point, records.len()),
            Err(e) => error!("Mounting chart at {} failed: {}", self.mount_point, e),
        }
    }
}

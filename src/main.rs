use std::sync::Arc;
use balance_chart::charts::{ChartWidget, JsonChartWidget, PngChartWidget};
use balance_chart::config::{AppConfig, Command, RenderConfig};
use balance_chart::controllers;
use balance_chart::enums::output_format::OutputFormat;
use balance_chart::models::style::ChartStyle;
use balance_chart::repositories::transaction_repository::TransactionRepository;
use balance_chart::services::chart_loader::ChartLoader;
use balance_chart::services::ledger_service::LedgerService;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize environment
    let app_config = get_app_config();

    match &app_config.command {
        Command::Render(render_config) => render(render_config).await,
        Command::Serve(serve_config) => {
            controllers::server::serve(serve_config.clone(), LedgerService::new()).await
        }
    }
}

async fn render(config: &RenderConfig) -> anyhow::Result<()> {
    let style = match &config.style {
        Some(path) => ChartStyle::load(path)?,
        None => ChartStyle::default(),
    };
    let widget: Box<dyn ChartWidget> = match config.format {
        OutputFormat::Png => Box::new(PngChartWidget::new(config.chart_dir.clone(), config.width, config.height)),
        OutputFormat::Json => Box::new(JsonChartWidget::new(config.chart_dir.clone())),
    };

    let loader = ChartLoader::new(TransactionRepository::new(config.api_url.clone()), widget)
        .with_style(style)
        .with_mount_point(config.mount_point.clone());
    //Failures are logged by the loader itself
    loader.load_data_and_create_chart().await;
    Ok(())
}

pub fn get_app_config() -> Arc<AppConfig> {
    dotenv::dotenv().ok();
    let app_config = Arc::new(AppConfig::parse());
    app_config
}

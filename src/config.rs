use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use crate::enums::output_format::OutputFormat;

#[derive(Parser)]
#[clap(name = "balance-chart", about = "Cash register balance chart")]
pub struct AppConfig {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the last 20 transactions and render the balance chart once.
    Render(RenderConfig),
    /// Serve the transaction ledger API.
    Serve(ServeConfig),
}

#[derive(Args, Clone, Debug)]
pub struct RenderConfig {
    //Backend base url, without the /api/... path
    #[clap(long, env, default_value = "http://localhost:3000")]
    pub api_url: String,

    #[clap(long, env, default_value = ".")]
    pub chart_dir: PathBuf,

    #[clap(long, env, default_value = "AreaChartBalanceBefore")]
    pub mount_point: String,

    #[clap(long = "format", env = "CHART_FORMAT", value_enum, default_value = "png")]
    pub format: OutputFormat,

    //JSON file overriding the default chart style
    #[clap(long = "style", env = "CHART_STYLE")]
    pub style: Option<PathBuf>,

    #[clap(long, env = "CHART_WIDTH", default_value_t = 800)]
    pub width: u32,

    #[clap(long, env = "CHART_HEIGHT", default_value_t = 400)]
    pub height: u32,
}

#[derive(Args, Clone, Debug)]
pub struct ServeConfig {
    #[clap(long, env, default_value_t = 3000)]
    pub port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults() {
        let config = AppConfig::try_parse_from(["balance-chart", "render"]).unwrap();
        let Command::Render(render) = config.command else {
            panic!("expected render command");
        };
        assert_eq!(render.mount_point, "AreaChartBalanceBefore");
        assert_eq!(render.format, OutputFormat::Png);
        assert_eq!((render.width, render.height), (800, 400));
        assert!(render.style.is_none());
    }

    #[test]
    fn render_flags_override_defaults() {
        let config = AppConfig::try_parse_from([
            "balance-chart", "render", "--api-url", "http://backend:8080", "--format", "json",
        ])
        .unwrap();
        let Command::Render(render) = config.command else {
            panic!("expected render command");
        };
        assert_eq!(render.api_url, "http://backend:8080");
        assert_eq!(render.format, OutputFormat::Json);
    }

    #[test]
    fn serve_port_flag() {
        let config = AppConfig::try_parse_from(["balance-chart", "serve", "--port", "8081"]).unwrap();
        let Command::Serve(serve) = config.command else {
            panic!("expected serve command");
        };
        assert_eq!(serve.port, 8081);
    }
}

use clap::ValueEnum;

/// What the `render` command writes at the mount point.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match &self {
            OutputFormat::Png => "png",
            OutputFormat::Json => "json",
        }
    }
}

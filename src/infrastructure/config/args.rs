use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "image-catalog",
    version,
    about = "Browse the Lorem Picsum image listing with page caching",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Listing API base URL.
    #[arg(long, env = "IMAGE_CATALOG_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Records requested per page.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Additional pages to load after the first one.
    #[arg(short, long, default_value_t = 0)]
    pub pages: u32,

    /// Author filter applied over the loaded pages.
    #[arg(short, long)]
    pub search: Option<String>,
}

use clap::Parser;
use dine::core::config::{self, CliOverrides, DineConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "dine", about = "Browse restaurants and their reviews from the terminal")]
struct Args {
    /// Restaurant API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Start with the list filtered to this city
    #[arg(long)]
    city: Option<String>,

    /// Start with this sort order: a-z or z-a
    #[arg(long)]
    sort: Option<String>,

    /// Reviews revealed per "Load More" press
    #[arg(long)]
    page_size: Option<usize>,

    /// Log level written to dine.log (error, warn, info, debug, trace, off)
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to dine.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let log_level = args.log_level.parse().unwrap_or(LevelFilter::Debug);
    if let Ok(log_file) = File::create("dine.log") {
        let _ = WriteLogger::init(log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        DineConfig::default()
    });
    let cli = CliOverrides {
        base_url: args.base_url,
        city: args.city,
        sort: args.sort,
        page_size: args.page_size,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Dine starting up (api={}, page_size={}, city={:?}, sort={:?})",
        resolved.base_url,
        resolved.page_size,
        resolved.initial_selection.city(),
        resolved.initial_selection.sort.to_string()
    );

    dine::tui::run(resolved)
}

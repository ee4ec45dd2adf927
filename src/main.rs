use clap::Parser;
use roster::core::config::{self, CliOverrides, RosterConfig};
use roster::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "roster", about = "Browse Star Wars characters from SWAPI")]
struct Args {
    /// First page of the people listing
    #[arg(long)]
    base_url: Option<String>,

    /// Rows per page (25, 50, 100 or 150)
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Name filter applied once the list has loaded
    #[arg(short, long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roster.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        RosterConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            page_size: args.page_size,
            search: args.search,
        },
    );

    log::info!(
        "Roster starting up: base_url={}, page_size={}",
        resolved.base_url,
        resolved.page_size.get()
    );

    tui::run(resolved)
}

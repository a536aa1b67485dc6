use clap::Parser;
use folio::core::config::{self, CliOverrides, FolioConfig};
use folio::core::content::Portfolio;
use folio::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio slide deck for the terminal")]
struct Args {
    /// Portfolio content file (.toml or .json). Defaults to the bundled portfolio
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// How long each slide transition locks navigation, in milliseconds
    #[arg(short, long)]
    transition_ms: Option<u64>,

    /// Where to write the debug log
    #[arg(long, default_value = "folio.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Using default settings: {}", e);
        FolioConfig::default()
    });
    let cli = CliOverrides {
        transition_ms: args.transition_ms,
        content_file: args.content,
    };
    let resolved = config::resolve(&file_config, &cli);

    let portfolio = Portfolio::load_or_bundled(resolved.content_file.as_deref())
        .map_err(std::io::Error::other)?;

    log::info!(
        "Folio starting up: {} slides for {}",
        portfolio.slide_count(),
        portfolio.owner
    );

    tui::run(resolved, portfolio)
}

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use lingua::content::load_curriculum;
use lingua::core::config;
use lingua::core::state::App;
use lingua::tui;

#[derive(Parser)]
#[command(name = "lingua", about = "Terminal browser for language course content")]
struct Args {
    /// Path or URL of the curriculum JSON (overrides config and LINGUA_DATA)
    #[arg(short, long)]
    data: Option<String>,

    /// Start at a location, e.g. "unit=2&topic=1&part=3"
    #[arg(long)]
    at: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to lingua.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("lingua.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {e}");
            Default::default()
        }
    };
    let resolved = config::resolve(&file_config, args.data.as_deref(), args.at.as_deref());

    log::info!("Lingua starting up, data source: {}", resolved.data_source);

    let tree = match load_curriculum(&resolved.data_source).await {
        Ok(tree) => tree,
        Err(e) => {
            log::error!("Failed to load curriculum from {}: {e}", resolved.data_source);
            eprintln!("Failed to load curriculum from '{}': {e}", resolved.data_source);
            std::process::exit(1);
        }
    };

    let app = App::from_config(tree, &resolved);
    tui::run(app)
}

use cardflip::core::config::{self, CliOverrides};
use cardflip::core::navigator::ExhaustedNext;
use cardflip::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "cardflip", about = "Terminal flashcard viewer")]
struct Args {
    /// Deck to open directly (URL or file path); skips the set picker
    #[arg(short, long)]
    source: Option<String>,

    /// Set id to open on startup
    #[arg(long)]
    set: Option<String>,

    /// What "next" does on the last card
    #[arg(long, value_enum)]
    on_exhausted: Option<ExhaustedNext>,

    /// Base URL or directory that set file names are resolved against
    #[arg(long)]
    base_url: Option<String>,

    /// Log level written to cardflip.log
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to cardflip.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("cardflip.log") {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("{e}; using defaults");
        log::warn!("Falling back to default config: {}", e);
        Default::default()
    });

    let cli = CliOverrides {
        source: args.source,
        set: args.set,
        on_exhausted: args.on_exhausted,
        base_url: args.base_url,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "Cardflip starting up: source={:?}, on_exhausted={:?}",
        resolved.data_source,
        resolved.on_exhausted
    );

    tui::run(resolved)
}

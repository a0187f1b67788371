//! # Tilegrid Demo Entry Point
//!
//! Dumps a tile grid to the log, then runs a cancellable delay and reports
//! how it resolved.

use clap::Parser;
use log::{error, info, LevelFilter};
use std::path::PathBuf;
use std::time::Duration;
use tilegrid::{config, parse_grid, print_grid, sleep, CancellationSignal, DelayState, TileGridResult};

/// Command line arguments for the tilegrid demo.
#[derive(Parser, Debug)]
#[command(name = "tilegrid")]
#[command(about = "Dump a tile grid and run a cancellable delay")]
#[command(version)]
struct Args {
    /// Delay duration in milliseconds
    #[arg(long, default_value_t = config::DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Cancel the delay after this many milliseconds
    #[arg(long)]
    cancel_after_ms: Option<u64>,

    /// Text grid file to dump instead of the built-in sample
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting tilegrid v{}", tilegrid::VERSION);

    if let Err(e) = run(&args).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Initializes env_logger, letting `RUST_LOG` override the CLI level.
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .init();
}

async fn run(args: &Args) -> TileGridResult<()> {
    let text = match &args.grid {
        Some(path) => {
            info!("Loading grid from {}", path.display());
            std::fs::read_to_string(path)?
        }
        None => config::SAMPLE_GRID.to_string(),
    };
    let grid = parse_grid(&text)?;
    print_grid(&grid);

    let signal = CancellationSignal::new();
    if let Some(cancel_after) = args.cancel_after_ms {
        let canceller = signal.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(cancel_after)).await;
            canceller.cancel();
        });
    }

    let duration = Duration::from_millis(args.delay_ms);
    let result = sleep(duration, &signal).await;
    info!("Delay of {:?} {}", duration, DelayState::from(result));

    result?;
    Ok(())
}

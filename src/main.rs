//! CLI entry point for the bikeshare explorer.
//!
//! Wires the console collaborators, the CSV dataset source, and the
//! interactive session loop together, and initializes logging.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use bikeshare_explorer::console::{StdinReader, TerminalSink};
use bikeshare_explorer::dataset::{CityRegistry, CsvTripSource};
use bikeshare_explorer::session;
use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Interactive exploration of bike-share trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV exports
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// JSON file mapping city names to CSV file names, replacing the
    /// built-in city list
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Give up after this many invalid answers per prompt
    #[arg(long)]
    max_attempts: Option<usize>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: stderr + JSON rolling log file. User conversation
    // goes to stdout, so the interactive transcript stays clean.
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let registry = match &cli.cities {
        Some(path) => CityRegistry::load(path)?,
        None => CityRegistry::builtin(),
    };
    let source = CsvTripSource::new(cli.data_dir, registry);

    let mut reader = StdinReader;
    let sink = TerminalSink::new();

    session::run(&mut reader, &sink, &source, cli.max_attempts)
}

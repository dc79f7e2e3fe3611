//! Command implementations for the facility directory CLI
//!
//! Each command loads the directory once (with a spinner unless quiet or
//! emitting JSON) and writes its result to stdout.

use crate::cli::args::{Args, Commands, ListArgs, OutputFormat, ShowArgs};
use crate::cli::render::{self, FacilityDetail, FacilitySummary};
use crate::config::DirectoryConfig;
use crate::constants::LOG_TARGET;
use crate::directory::{Directory, DirectoryLoader};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

/// Run the command selected on the command line
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.build_config()?;
    debug!(
        "Effective configuration: url={:?}, fallback={}, retries={}, initial_delay_ms={}",
        config.source_url,
        config.fallback_text.is_some(),
        config.retries,
        config.initial_delay_ms
    );

    match args.get_command() {
        Commands::List(list) => run_list(&args, &config, &list).await,
        Commands::Show(show) => run_show(&args, &config, &show).await,
        Commands::Config => write_json(&config),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn loading_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("施設情報を読み込み中...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// One fetch-and-parse cycle into a fresh directory
async fn load_directory(args: &Args, config: &DirectoryConfig) -> Result<Directory> {
    let loader = DirectoryLoader::from_config(config)?;
    let spinner = args.show_progress().then(loading_spinner);

    let mut directory = Directory::default();
    let result = directory.reload(&loader).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let count = result?;
    info!("Directory ready with {} facilities", count);
    Ok(directory)
}

async fn run_list(args: &Args, config: &DirectoryConfig, list: &ListArgs) -> Result<()> {
    let directory = load_directory(args, config).await?;
    let term = list.search.as_deref().unwrap_or("");
    let hits = directory.search(term);
    debug!("Search {:?} matched {} of {}", term, hits.len(), directory.len());

    match args.format {
        OutputFormat::Text => write_text(&render::format_list(
            &hits,
            directory.len(),
            list.search.as_deref(),
        )),
        OutputFormat::Json => {
            let summaries: Vec<FacilitySummary<'_>> = hits
                .into_iter()
                .map(|(position, facility)| FacilitySummary::new(position, facility))
                .collect();
            write_json(&summaries)
        }
    }
}

async fn run_show(args: &Args, config: &DirectoryConfig, show: &ShowArgs) -> Result<()> {
    let directory = load_directory(args, config).await?;
    let (position, facility) = directory.find(&show.selector)?;

    match args.format {
        OutputFormat::Text => write_text(&render::format_detail(position, facility)),
        OutputFormat::Json => write_json(&FacilityDetail::new(position, facility)),
    }
}

fn write_text(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", text.trim_end()).context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")
}

fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    write_text(&json)
}

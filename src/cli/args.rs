//! Command-line argument definitions for the facility directory
//!
//! Source and retry options are global so they can be given before or
//! after the subcommand.

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the after-school care facility directory
///
/// Loads the facility list from a published spreadsheet CSV export and
/// lists, searches or shows facilities in the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "afterschool-directory",
    version,
    about = "Browse after-school care facilities from a published spreadsheet",
    long_about = "Fetches the facility sheet from a published spreadsheet CSV export \
                  (retrying transient network failures with exponential backoff), \
                  then lists, searches or shows facilities as text or JSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Published CSV export URL
    ///
    /// Overrides `source_url` from the config file.
    #[arg(long = "url", value_name = "URL", global = true)]
    pub url: Option<String>,

    /// CSV file used when no URL is configured
    #[arg(long = "fallback-file", value_name = "PATH", global = true)]
    pub fallback_file: Option<PathBuf>,

    /// JSON configuration file
    ///
    /// Defaults to `config.json` under the platform config directory when present.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_file: Option<PathBuf>,

    /// Maximum fetch attempts
    #[arg(long = "retries", value_name = "N", global = true)]
    pub retries: Option<u32>,

    /// Delay before the first retry, in milliseconds
    #[arg(long = "initial-delay-ms", value_name = "MS", global = true)]
    pub initial_delay_ms: Option<u64>,

    /// Per-request timeout, in seconds
    #[arg(long = "timeout-secs", value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        global = true
    )]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors and hide the loading spinner
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List facilities, optionally filtered by name or address (default)
    List(ListArgs),
    /// Show the full details of one facility
    Show(ShowArgs),
    /// Print the effective configuration as JSON
    Config,
}

#[derive(Debug, Clone, Default, Parser)]
pub struct ListArgs {
    /// Keep only facilities whose name or address contains this text
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// 1-based position in the full list, or the exact facility name
    #[arg(value_name = "SELECTOR")]
    pub selector: String,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// The requested command; `list` without a filter when none was given
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::List(ListArgs::default()))
    }

    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Spinner only for interactive text output
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }

    /// Layer command-line overrides on top of `base`
    pub fn apply_overrides(&self, base: DirectoryConfig) -> Result<DirectoryConfig> {
        let mut config = base;

        if let Some(url) = &self.url {
            config = config.with_source_url(url.clone());
        }

        if let Some(path) = &self.fallback_file {
            let text = std::fs::read_to_string(path).map_err(|e| {
                DirectoryError::configuration(format!(
                    "Cannot read fallback file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            config = config.with_fallback_text(text);
        }

        if let Some(retries) = self.retries {
            config = config.with_retries(retries);
        }

        if let Some(delay) = self.initial_delay_ms {
            config = config.with_initial_delay_ms(delay);
        }

        if let Some(secs) = self.timeout_secs {
            config = config.with_request_timeout_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Defaults, then the config file, then command-line flags
    pub fn build_config(&self) -> Result<DirectoryConfig> {
        let base = DirectoryConfig::load(self.config_file.as_deref())?;
        self.apply_overrides(base)
    }
}

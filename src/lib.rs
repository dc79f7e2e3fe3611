//! After-school care facility directory
//!
//! Loads the facility list from a published spreadsheet CSV export and
//! exposes it for listing, searching and detail views.
//!
//! This library provides tools for:
//! - Fetching the sheet with bounded exponential-backoff retry
//! - Parsing loosely quoted CSV into header-keyed records
//! - Typed facility views with display defaults
//! - Search and lookup over the current record sequence

pub mod config;
pub mod constants;
pub mod csv_parser;
pub mod directory;
pub mod error;
pub mod fetcher;
pub mod models;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod render;
}

// Re-export commonly used types
pub use config::DirectoryConfig;
pub use csv_parser::parse_records;
pub use directory::{DataSource, Directory, DirectoryLoader};
pub use error::{DirectoryError, FetchCause, Result, TransportError};
pub use fetcher::{Fetcher, HttpResponse, HttpTransport, ReqwestTransport, RetryPolicy};
pub use models::{Facility, Record};

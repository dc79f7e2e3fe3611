//! Facility directory loading and querying.
//!
//! [`DirectoryLoader`] resolves the data source (remote URL or configured
//! fallback text), runs fetch and parse, and hands back a fresh record
//! sequence. [`Directory`] holds the current sequence; every successful
//! reload replaces it wholesale.

use crate::config::DirectoryConfig;
use crate::csv_parser::parse_records;
use crate::error::{DirectoryError, Result};
use crate::fetcher::{Fetcher, HttpTransport, ReqwestTransport};
use crate::models::{Facility, Record};
use tracing::{debug, info};

/// Resolved origin of the CSV text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource<'a> {
    Remote(&'a str),
    Fallback(&'a str),
}

/// Fetches and parses the facility sheet
#[derive(Debug)]
pub struct DirectoryLoader<T: HttpTransport> {
    fetcher: Fetcher<T>,
    source_url: Option<String>,
    fallback_text: Option<String>,
}

impl DirectoryLoader<ReqwestTransport> {
    /// Build a loader that fetches over HTTP
    pub fn from_config(config: &DirectoryConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.request_timeout()).map_err(|e| {
            DirectoryError::configuration(format!("could not build HTTP client: {}", e))
        })?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> DirectoryLoader<T> {
    pub fn new(fetcher: Fetcher<T>, source_url: Option<String>, fallback_text: Option<String>) -> Self {
        Self {
            fetcher,
            source_url,
            fallback_text,
        }
    }

    /// Build a loader over any transport, using the config's source and retry settings
    pub fn with_transport(config: &DirectoryConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            Fetcher::new(transport, config.retry_policy()),
            config.source_url.clone(),
            config.fallback_text.clone(),
        ))
    }

    /// The URL wins when both a URL and fallback text are configured
    pub fn source(&self) -> Result<DataSource<'_>> {
        match (&self.source_url, &self.fallback_text) {
            (Some(url), _) => Ok(DataSource::Remote(url)),
            (None, Some(text)) => Ok(DataSource::Fallback(text)),
            (None, None) => Err(DirectoryError::configuration(
                "no source URL configured and no fallback data available",
            )),
        }
    }

    /// Run one fetch-and-parse cycle
    pub async fn load(&self) -> Result<Vec<Record>> {
        let records = match self.source()? {
            DataSource::Remote(url) => {
                info!("Loading facilities from {}", url);
                let text = self.fetcher.fetch_text(url).await?;
                parse_records(&text)
            }
            DataSource::Fallback(text) => {
                info!("No source URL configured, using fallback data");
                parse_records(text)
            }
        };

        info!("Loaded {} facilities", records.len());
        Ok(records)
    }

    pub fn fetcher(&self) -> &Fetcher<T> {
        &self.fetcher
    }
}

/// The facility records currently on display
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Swap in a new record sequence, returning the old one
    pub fn replace(&mut self, records: Vec<Record>) -> Vec<Record> {
        debug!(
            "Replacing {} records with {}",
            self.records.len(),
            records.len()
        );
        std::mem::replace(&mut self.records, records)
    }

    /// Load a fresh sequence; on failure the current records are kept
    pub async fn reload<T: HttpTransport>(&mut self, loader: &DirectoryLoader<T>) -> Result<usize> {
        let records = loader.load().await?;
        self.replace(records);
        Ok(self.records.len())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Facility at a zero-based position
    pub fn get(&self, index: usize) -> Option<Facility<'_>> {
        self.records.get(index).map(Facility::new)
    }

    pub fn facilities(&self) -> impl Iterator<Item = Facility<'_>> {
        self.records.iter().map(Facility::new)
    }

    /// Facilities whose name or address contains `term`, with their positions
    pub fn search(&self, term: &str) -> Vec<(usize, Facility<'_>)> {
        self.facilities()
            .enumerate()
            .filter(|(_, f)| f.matches(term))
            .collect()
    }

    /// Resolve a 1-based index or an exact facility name
    pub fn find(&self, selector: &str) -> Result<(usize, Facility<'_>)> {
        let selector = selector.trim();

        if let Ok(position) = selector.parse::<usize>() {
            if let Some(facility) = position.checked_sub(1).and_then(|i| self.get(i)) {
                return Ok((position - 1, facility));
            }
        }

        self.facilities()
            .enumerate()
            .find(|(_, f)| f.name() == Some(selector))
            .ok_or_else(|| DirectoryError::FacilityNotFound {
                selector: selector.to_string(),
            })
    }
}

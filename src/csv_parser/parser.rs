//! Line splitting and header-to-value mapping

use tracing::debug;

use super::fields::{clean_header, clean_value};
use super::tokenizer::split_quote_aware;
use crate::models::Record;

/// Parse spreadsheet CSV text into one record per data line
///
/// The first line is the header row. Every following line becomes a record
/// holding every header as a key; cells missing from a short row map to
/// `None`. Text with fewer than two lines yields no records. A leading
/// byte order mark is ignored.
pub fn parse_records(text: &str) -> Vec<Record> {
    let lines: Vec<&str> = text
        .trim()
        .trim_start_matches('\u{feff}')
        .trim_start()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    if lines.len() < 2 {
        debug!("No data lines in CSV text ({} line(s))", lines.len());
        return Vec::new();
    }

    let headers: Vec<String> = split_quote_aware(lines[0])
        .into_iter()
        .map(clean_header)
        .collect();

    let records: Vec<Record> = lines[1..]
        .iter()
        .map(|line| parse_line(line, &headers))
        .collect();

    debug!(
        "Parsed {} records with {} columns",
        records.len(),
        headers.len()
    );

    records
}

fn parse_line(line: &str, headers: &[String]) -> Record {
    let tokens = split_quote_aware(line);

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| (header.clone(), tokens.get(i).map(|t| clean_value(t))))
        .collect()
}

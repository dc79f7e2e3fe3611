//! CSV parser for published spreadsheet exports
//!
//! Turns the raw text of a spreadsheet CSV export into [`Record`]s keyed by
//! the header row. The parser accepts any input: ragged rows, unbalanced
//! quotes and stray markup degrade to missing or partial fields rather than
//! errors.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Quote-aware comma splitting of a single line
//! - [`fields`] - Header and value cleanup (quote stripping, unescaping, tag removal)
//! - [`parser`] - Line splitting and header-to-value zipping
//!
//! ## Usage
//!
//! ```rust
//! use afterschool_directory::csv_parser::parse_records;
//!
//! let records = parse_records("name,addr\n\"Foo, Bar\",<b>1 Main</b>");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].get("name"), Some("Foo, Bar"));
//! assert_eq!(records[0].get("addr"), Some("1 Main"));
//! ```
//!
//! [`Record`]: crate::models::Record

pub mod fields;
pub mod parser;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use fields::{clean_header, clean_value, strip_tags};
pub use parser::parse_records;
pub use tokenizer::split_quote_aware;

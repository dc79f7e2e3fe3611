//! Quote-aware field splitting
//!
//! A comma separates two fields only when an even number of `"` characters
//! follows it on the same line, i.e. when it is not inside a quoted span.
//! Quotes are kept in the returned tokens; [`super::fields`] removes them.

/// Split one line on the commas that lie outside quoted spans
///
/// Always returns at least one token; an empty line yields `[""]`.
pub fn split_quote_aware(line: &str) -> Vec<&str> {
    let mut quotes_after = line.bytes().filter(|&b| b == b'"').count();
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, b) in line.bytes().enumerate() {
        match b {
            b'"' => quotes_after -= 1,
            b',' if quotes_after % 2 == 0 => {
                tokens.push(&line[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    tokens.push(&line[start..]);
    tokens
}

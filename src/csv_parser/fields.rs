//! Header and value cleanup applied to raw tokens

use regex::Regex;
use std::sync::LazyLock;

/// `<` up to the next `>`, or to the end of the value when unclosed
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"));

/// Remove at most one leading and one trailing `"`
fn strip_outer_quotes(token: &str) -> &str {
    let token = token.strip_prefix('"').unwrap_or(token);
    token.strip_suffix('"').unwrap_or(token)
}

/// Normalize a header token into a field name
pub fn clean_header(token: &str) -> String {
    strip_outer_quotes(token.trim()).trim().to_string()
}

/// Decode a value token: outer quotes, `""` escapes, markup, whitespace
pub fn clean_value(token: &str) -> String {
    let unescaped = strip_outer_quotes(token).replace("\"\"", "\"");
    strip_tags(&unescaped).trim().to_string()
}

/// Drop anything that looks like an HTML tag, keeping the text between tags
pub fn strip_tags(value: &str) -> String {
    TAG_PATTERN.replace_all(value, "").into_owned()
}

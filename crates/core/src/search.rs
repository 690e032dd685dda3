//! Teacher search key handling.
//!
//! The repository matches a single bound pattern against several columns
//! with `ILIKE`. This module turns the raw, optional user input into that
//! pattern so the SQL never sees a NULL and the user's text is matched as
//! a literal substring.

use crate::error::CoreError;

/// Escape character used in generated patterns (PostgreSQL's LIKE default).
pub const LIKE_ESCAPE: char = '\\';

/// Longest search key accepted from a request.
pub const MAX_SEARCH_KEY_LEN: usize = 100;

/// Escape LIKE metacharacters so they match themselves.
fn escape_like(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for c in key.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Build the substring pattern for a search key.
///
/// An absent or blank key becomes `%%`, which matches every row. Surrounding
/// whitespace is trimmed.
pub fn like_pattern(key: Option<&str>) -> String {
    let key = key.map(str::trim).unwrap_or_default();
    format!("%{}%", escape_like(key))
}

/// Reject search keys longer than [`MAX_SEARCH_KEY_LEN`] characters.
pub fn validate_search_key(key: Option<&str>) -> Result<(), CoreError> {
    match key {
        Some(k) if k.chars().count() > MAX_SEARCH_KEY_LEN => Err(CoreError::Validation(format!(
            "search key must be at most {MAX_SEARCH_KEY_LEN} characters"
        ))),
        _ => Ok(()),
    }
}

//! SQL Identifier and Literal Screening Utilities
//!
//! Checks identifiers before they are spliced into dynamically-built SQL, and
//! screens backtick quotes inside backtick-quoted text.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CatalogError, Result};

/// A single backtick, the MySQL identifier quote
pub const SINGLE_BACKTICK_QUOTE: &str = "`";

/// Two backticks, the in-quote escape for [`SINGLE_BACKTICK_QUOTE`]
pub const DOUBLE_BACKTICK_QUOTE: &str = "``";

// Latin letters, anything in the Unicode "Number" category, and underscore.
static BAD_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z\p{N}_]").expect("identifier pattern is valid"));

/// Validate a schema, table or column name
///
/// Rules:
/// - Latin letters (`A-Z`, `a-z`) are allowed in either case
/// - Any character of the Unicode "Number" category is allowed
/// - `_` is allowed
/// - Everything else is rejected, including spaces and quote characters
///
/// The empty string passes. On failure the error carries the first offending
/// character, scanning left to right.
///
/// # Example
/// ```
/// use mysql_catalog::sql::check_identifier;
///
/// assert!(check_identifier("xB_9").is_ok());
/// assert!(check_identifier("DROP TABLE xyz;").is_err());
/// ```
pub fn check_identifier(name: &str) -> Result<()> {
    match BAD_SYMBOL.find(name) {
        None => Ok(()),
        Some(found) => {
            // A match of a single negated class is always exactly one char.
            let symbol = found.as_str().chars().next().unwrap_or_default();
            tracing::trace!(identifier = name, %symbol, "identifier rejected");
            Err(CatalogError::invalid_identifier(symbol))
        }
    }
}

/// Validate a table name; same rules as [`check_identifier`]
pub fn check_table_name(table_name: &str) -> Result<()> {
    check_identifier(table_name)
}

/// Boolean form of [`check_identifier`]
pub fn identifier_is_good(name: &str) -> bool {
    check_identifier(name).is_ok()
}

/// Double every backtick so the text stays literal inside backtick quotes
///
/// # Example
/// ```
/// use mysql_catalog::sql::screen_backtick_quotes;
///
/// assert_eq!(screen_backtick_quotes("D`Artagnan"), "D``Artagnan");
/// assert_eq!(screen_backtick_quotes("John"), "John");
/// ```
pub fn screen_backtick_quotes(src: &str) -> String {
    src.replace(SINGLE_BACKTICK_QUOTE, DOUBLE_BACKTICK_QUOTE)
}

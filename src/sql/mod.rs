//! SQL text utilities
//!
//! Identifier validation and quote screening for callers that build SQL
//! strings by hand.

pub mod sanitize;

pub use sanitize::{
    DOUBLE_BACKTICK_QUOTE, SINGLE_BACKTICK_QUOTE, check_identifier, check_table_name,
    identifier_is_good, screen_backtick_quotes,
};

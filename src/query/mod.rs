//! Query string configuration.
//!
//! Parses URL query strings like `?layout=masonry&width=1200&columns=4`
//! into [`QueryParams`], which build a validated [`LayoutConfig`].
//!
//! # Example
//!
//! ```
//! use photolayout::{LayoutKind, query};
//!
//! let result = query::parse("layout=columns&width=1200&columns=4&spacing=10");
//! assert!(result.warnings.is_empty());
//!
//! let config = result.params.to_config().expect("valid config");
//! assert_eq!(config.layout, LayoutKind::Columns);
//! assert_eq!(config.columns, 4);
//! assert_eq!(config.spacing, 10.0);
//! ```
//!
//! Unknown keys, duplicate keys and unparseable values never fail parsing;
//! they are reported as [`ParseWarning`]s. Only [`QueryParams::to_config`]
//! can fail, with the same errors as [`LayoutConfig::validate`].

mod convert;
pub mod params;
mod parse;

pub use params::QueryParams;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(doc)]
use crate::LayoutConfig;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed parameters.
    pub params: QueryParams,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse a query string (with or without leading `?`).
pub fn parse(query: &str) -> ParseResult {
    let (params, warnings) = parse::parse_query(query);
    ParseResult { params, warnings }
}

//! Query string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::params::QueryParams;
use crate::config::{ColumnSizing, LayoutKind};

/// Parse a query string into QueryParams + warnings.
pub(crate) fn parse_query(query: &str) -> (QueryParams, Vec<ParseWarning>) {
    let mut params = QueryParams::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);
        let key_lower = key.to_ascii_lowercase();

        dispatch_key(&key_lower, &value, &mut params, &mut warnings);
    }

    (params, warnings)
}

fn dispatch_key(key: &str, value: &str, params: &mut QueryParams, warnings: &mut Vec<ParseWarning>) {
    match key {
        "layout" => match value.parse::<LayoutKind>() {
            Ok(kind) => set_or_warn(&mut params.layout, Some(kind), key, value, warnings),
            Err(_) => invalid("layout", value, "expected rows|columns|masonry", warnings),
        },
        "width" | "containerwidth" | "w" => {
            number_or_warn(&mut params.width, "width", value, warnings);
        }
        "spacing" => number_or_warn(&mut params.spacing, "spacing", value, warnings),
        "padding" => number_or_warn(&mut params.padding, "padding", value, warnings),
        "targetrowheight" | "rowheight" => {
            number_or_warn(
                &mut params.target_row_height,
                "targetrowheight",
                value,
                warnings,
            );
        }
        "maxheightratio" => {
            number_or_warn(&mut params.max_height_ratio, "maxheightratio", value, warnings);
        }
        "columns" => match parse_u32(value) {
            Some(n) => set_or_warn(&mut params.columns, Some(n), key, value, warnings),
            None => invalid("columns", value, "expected a non-negative integer", warnings),
        },
        "columnsizing" => match parse_column_sizing(value) {
            Some(s) => set_or_warn(&mut params.column_sizing, Some(s), key, value, warnings),
            None => invalid("columnsizing", value, "expected equal|ratio", warnings),
        },
        "lastrow" => match parse_last_row(value) {
            Some(natural) => {
                set_or_warn(&mut params.natural_last_row, Some(natural), key, value, warnings);
            }
            None => invalid("lastrow", value, "expected justify|natural", warnings),
        },
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Set a field, warning on duplicate.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    if let Some(v) = parsed {
        if field.is_some() {
            warnings.push(ParseWarning::DuplicateKey {
                key: String::from(key),
                value: String::from(value),
            });
        }
        *field = Some(v);
    }
}

fn number_or_warn(
    field: &mut Option<f64>,
    key: &'static str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    match parse_f64(value) {
        Some(v) => set_or_warn(field, Some(v), key, value, warnings),
        None => invalid(key, value, "expected a finite number", warnings),
    }
}

fn invalid(key: &'static str, value: &str, reason: &'static str, warnings: &mut Vec<ParseWarning>) {
    warnings.push(ParseWarning::ValueInvalid {
        key,
        value: String::from(value),
        reason,
    });
}

// ---- Value parsers ----

/// Parse a finite number, stripping a trailing "px" suffix.
fn parse_f64(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s
        .strip_suffix("px")
        .or_else(|| s.strip_suffix("PX"))
        .unwrap_or(s);
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_u32(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok()
}

fn parse_column_sizing(s: &str) -> Option<ColumnSizing> {
    match s.trim().to_ascii_lowercase().as_str() {
        "equal" | "uniform" => Some(ColumnSizing::Equal),
        "ratio" | "ratios" => Some(ColumnSizing::Ratio),
        _ => None,
    }
}

/// `true` for a natural (unstretched) last row.
fn parse_last_row(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "natural" => Some(true),
        "justify" | "stretch" => Some(false),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component, treating `+` as space.
///
/// Escapes are decoded to bytes first so multi-byte UTF-8 sequences come
/// out whole; invalid sequences become U+FFFD.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                hex_digit(bytes[i + 1]).zip(hex_digit(bytes[i + 2]))
            }
            _ => None,
        };
        match (bytes[i], escaped) {
            (_, Some((hi, lo))) => {
                decoded.push(hi << 4 | lo);
                i += 3;
            }
            (b'+', None) => {
                decoded.push(b' ');
                i += 1;
            }
            (b, None) => {
                decoded.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

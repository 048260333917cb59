// extract.rs
use crate::errors::{Result, SearchError};
use serde_json::{Map, Value};

/// Opening tag the site wraps each JSON-LD listing in.
pub const LISTING_MARKER: &str = r#"<script data-cmp="lstgSchema" type="application/ld+json">"#;

/// Pulls every embedded listing object out of a search results page.
///
/// Each fragment after a marker is scanned for its first balanced `{...}`.
/// Whatever precedes the first marker (head scripts, inline config) is not
/// listing data and is never scanned. A malformed span fails the whole page.
/// Empty objects are dropped.
pub fn extract_listings(html: &str) -> Result<Vec<Map<String, Value>>> {
    let parsed = html
        .split(LISTING_MARKER)
        .skip(1)
        .filter_map(|fragment| bracket_span(fragment).map(|(start, end)| &fragment[start..end]))
        .map(|json| {
            serde_json::from_str::<Value>(json).map_err(|e| SearchError::Parse(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(parsed
        .into_iter()
        .filter_map(|value| match value {
            Value::Object(map) if !map.is_empty() => Some(map),
            _ => None,
        })
        .collect())
}

/// Byte range `[start, end)` of the first balanced brace region in `s`.
///
/// Closing braces seen before the first `{` are ignored. Returns `None` when
/// no `{` appears or the region never closes.
pub fn bracket_span(s: &str) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut start = None;

    for (i, b) in s.bytes().enumerate() {
        match b {
            b'{' => {
                if start.is_none() {
                    start = Some(i);
                }
                depth += 1;
            }
            b'}' => {
                let Some(begin) = start else { continue };
                depth -= 1;
                if depth == 0 {
                    return Some((begin, i + 1));
                }
            }
            _ => {}
        }
    }

    None
}

//! Corpus file reading with plain-text fallback parsing

use crate::entry::CorpusEntry;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the corpus file and normalize it into document strings.
///
/// An unreadable file is the only error; how it is recovered (the
/// retriever degrades to an empty corpus) is the caller's call.
pub fn load_corpus(path: &Path) -> Result<Vec<String>, CorpusError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse_corpus(&raw))
}

/// Parse raw corpus contents.
///
/// Contents that parse as a JSON array are normalized entry by entry;
/// anything else is treated as newline-delimited plain text with blank
/// lines and surrounding whitespace dropped.
pub fn parse_corpus(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(values) => values
            .iter()
            .map(|v| CorpusEntry::from_value(v).into_text())
            .collect(),
        Err(_) => {
            debug!("corpus is not a JSON array, falling back to plain text lines");
            raw.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect()
        }
    }
}

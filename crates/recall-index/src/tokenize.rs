//! Text normalization shared by documents and queries

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

static NON_TOKEN_RE: OnceLock<Regex> = OnceLock::new();

/// Split text into normalized tokens.
///
/// Lowercases the input, replaces every character outside
/// `[a-z0-9\s\-\+\.#]` with a space, then splits on whitespace runs.
/// Tokens of a single character are dropped, so "c" is gone but "c#"
/// and "c++" survive.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = NON_TOKEN_RE.get_or_init(|| Regex::new(r"[^a-z0-9\s\-\+\.#]").unwrap());
    let lowered = text.to_lowercase();
    let cleaned = re.replace_all(&lowered, " ");
    cleaned
        .split_whitespace()
        .filter(|t| t.len() > 1)
        .map(|t| t.to_string())
        .collect()
}

/// Relative term frequency per token.
///
/// Counts are divided by the total token count; an empty slice divides
/// by 1 and yields an empty map rather than a division fault.
pub fn term_freq(tokens: &[String]) -> HashMap<String, f64> {
    let mut tf: HashMap<String, f64> = HashMap::new();
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    let n = tokens.len().max(1) as f64;
    for value in tf.values_mut() {
        *value /= n;
    }
    tf
}

//! Retriever configuration

use serde::{Deserialize, Serialize};

/// Retrieval tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum vocabulary size. Bounds memory and per-query scoring
    /// cost; larger corpora lose long-tail rare terms past this cap.
    pub top_k_vocab: usize,

    /// Minimum cosine similarity for a document to be returned as the
    /// answer. Below it a fallback phrase is returned instead.
    pub fallback_threshold: f64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            top_k_vocab: 4000,
            fallback_threshold: 0.12,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

//! The retriever: one corpus, one lazily built index, many queries

use crate::config::Config;
use crate::fallback::pick_fallback;
use rand::Rng;
use recall_corpus::load_corpus;
use recall_index::TfIdfIndex;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Response for one query.
///
/// `answer` is `None` only for an empty query, which serializes as
/// `{"answer":null}` with score and index omitted. A fallback phrase
/// still carries the best score and index seen, as near-miss
/// diagnostics; an empty corpus reports score -1 and index -1.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Answer {
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

impl Answer {
    fn empty_query() -> Self {
        Self {
            answer: None,
            score: None,
            index: None,
        }
    }
}

/// Owns the corpus location, the tuning knobs and the index cell.
///
/// The index is built at most once per process and is read-only after
/// that; the retriever is shared by reference (or `Arc`) across request
/// handlers.
pub struct Retriever {
    corpus_path: PathBuf,
    config: Config,
    index: OnceLock<TfIdfIndex>,
}

impl Retriever {
    pub fn new(corpus_path: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            config,
            index: OnceLock::new(),
        }
    }

    /// Return the cached index, building it on first use.
    ///
    /// Concurrent first callers block until the single build finishes
    /// and then observe the same index. An unreadable corpus file
    /// degrades to an empty corpus; it is logged, never surfaced.
    pub fn ensure_index(&self) -> &TfIdfIndex {
        self.index.get_or_init(|| {
            let docs = match load_corpus(&self.corpus_path) {
                Ok(docs) => docs,
                Err(e) => {
                    warn!(
                        "could not load corpus {}: {e}; continuing with empty corpus",
                        self.corpus_path.display()
                    );
                    Vec::new()
                }
            };
            debug!("building index over {} documents", docs.len());
            TfIdfIndex::build(docs, self.config.top_k_vocab)
        })
    }

    /// Answer a query with the process-wide RNG.
    pub fn answer(&self, query: &str) -> Answer {
        self.answer_with_rng(query, &mut rand::thread_rng())
    }

    /// Answer a query, drawing any fallback phrase from `rng`.
    ///
    /// An empty query short-circuits before any scoring happens.
    pub fn answer_with_rng<R: Rng>(&self, query: &str, rng: &mut R) -> Answer {
        if query.is_empty() {
            return Answer::empty_query();
        }

        let index = self.ensure_index();
        let best = index.best_match(query);

        let matched = best.index.and_then(|i| index.doc(i));
        let answer = match matched {
            Some(text) if best.score >= self.config.fallback_threshold => text.to_string(),
            _ => pick_fallback(rng).to_string(),
        };

        Answer {
            answer: Some(answer),
            score: Some(best.score),
            index: Some(best.index.map(|i| i as i64).unwrap_or(-1)),
        }
    }

    /// Index statistics; forces the build if it has not happened yet.
    pub fn stats(&self) -> HashMap<String, serde_json::Value> {
        self.ensure_index().stats()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

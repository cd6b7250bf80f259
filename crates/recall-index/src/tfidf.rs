//! TF-IDF index over a fixed document corpus

use crate::tokenize::{term_freq, tokenize};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Best-scoring document for a query.
///
/// `index` is `None` only when the corpus is empty; the score then stays
/// at the `-1.0` no-match sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub score: f64,
    pub index: Option<usize>,
}

/// Immutable TF-IDF index: documents, vocabulary, IDF weights, document
/// vectors and their norms. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    docs: Vec<String>,
    vocab: Vec<String>,
    vocab_pos: HashMap<String, usize>,
    idf: Vec<f64>,
    doc_vecs: Vec<Vec<f64>>,
    norms: Vec<f64>,
    built_at: DateTime<Utc>,
}

impl TfIdfIndex {
    /// Build the index from raw document strings.
    ///
    /// The vocabulary keeps the `top_k_vocab` tokens of highest document
    /// frequency, ties broken lexicographically. Degenerate input (empty
    /// corpus, empty documents) still yields a well-formed index.
    pub fn build(docs: Vec<String>, top_k_vocab: usize) -> Self {
        let doc_tokens: Vec<Vec<String>> = docs.iter().map(|d| tokenize(d)).collect();

        // Document frequency: each document counts at most once per token
        let mut df: HashMap<String, usize> = HashMap::new();
        for tokens in &doc_tokens {
            let seen: HashSet<&String> = tokens.iter().collect();
            for token in seen {
                *df.entry(token.clone()).or_insert(0) += 1;
            }
        }

        let mut vocab: Vec<String> = df.keys().cloned().collect();
        vocab.sort_by(|a, b| {
            df[b.as_str()]
                .cmp(&df[a.as_str()])
                .then_with(|| a.cmp(b))
        });
        vocab.truncate(top_k_vocab);

        let vocab_pos: HashMap<String, usize> = vocab
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        // idf = ln(N / (1 + df)); negative for terms in most documents
        let n = docs.len().max(1) as f64;
        let idf: Vec<f64> = vocab
            .iter()
            .map(|t| (n / (1.0 + df[t.as_str()] as f64)).ln())
            .collect();

        let doc_vecs: Vec<Vec<f64>> = doc_tokens
            .iter()
            .map(|tokens| {
                let tf = term_freq(tokens);
                let mut vec = vec![0.0; vocab.len()];
                for (term, freq) in tf {
                    if let Some(&i) = vocab_pos.get(&term) {
                        vec[i] = freq * idf[i];
                    }
                }
                vec
            })
            .collect();

        let norms: Vec<f64> = doc_vecs.iter().map(|v| norm(v)).collect();

        Self {
            docs,
            vocab,
            vocab_pos,
            idf,
            doc_vecs,
            norms,
            built_at: Utc::now(),
        }
    }

    /// TF-IDF vector for an arbitrary token sequence, dimensioned against
    /// this index's vocabulary. Frequencies are recomputed on every call.
    pub fn query_vector(&self, tokens: &[String]) -> Vec<f64> {
        let tf = term_freq(tokens);
        let mut vec = vec![0.0; self.vocab.len()];
        for (term, freq) in tf {
            if let Some(&i) = self.vocab_pos.get(&term) {
                vec[i] = freq * self.idf[i];
            }
        }
        vec
    }

    /// Score every document against the query and keep the best.
    ///
    /// Similarity is cosine when both norms are positive, 0 otherwise.
    /// The scan starts from a -1.0 sentinel and replaces only on a
    /// strictly greater score, so ties keep the earlier document.
    pub fn best_match(&self, query: &str) -> Match {
        let tokens = tokenize(query);
        let query_vec = self.query_vector(&tokens);
        let query_norm = norm(&query_vec);

        let mut best = Match {
            score: -1.0,
            index: None,
        };
        for (i, doc_vec) in self.doc_vecs.iter().enumerate() {
            let denom = query_norm * self.norms[i];
            let sim = if denom > 0.0 {
                dot(doc_vec, &query_vec) / denom
            } else {
                0.0
            };
            if sim > best.score {
                best = Match {
                    score: sim,
                    index: Some(i),
                };
            }
        }
        best
    }

    pub fn doc(&self, index: usize) -> Option<&str> {
        self.docs.get(index).map(String::as_str)
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn vocab(&self) -> &[String] {
        &self.vocab
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    pub fn stats(&self) -> HashMap<String, serde_json::Value> {
        let mut stats = HashMap::new();
        stats.insert(
            "total_documents".to_string(),
            serde_json::Value::Number(self.docs.len().into()),
        );
        stats.insert(
            "vocab_size".to_string(),
            serde_json::Value::Number(self.vocab.len().into()),
        );
        stats.insert(
            "built_at".to_string(),
            serde_json::Value::String(self.built_at.to_rfc3339()),
        );
        stats
    }

    #[cfg(test)]
    fn doc_vec(&self, index: usize) -> &[f64] {
        &self.doc_vecs[index]
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

//! TF-IDF vectorization and cosine-similarity scoring

mod tfidf;
mod tokenize;

pub use tfidf::{Match, TfIdfIndex};
pub use tokenize::{term_freq, tokenize};

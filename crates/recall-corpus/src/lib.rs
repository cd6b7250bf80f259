//! Corpus file loading and entry normalization

mod entry;
mod loader;

pub use entry::CorpusEntry;
pub use loader::{load_corpus, parse_corpus, CorpusError};

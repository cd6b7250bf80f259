//! Query answering over a lazily built TF-IDF corpus index

mod config;
mod fallback;
mod retriever;

pub use config::Config;
pub use fallback::{pick_fallback, FALLBACK_PHRASES};
pub use retriever::{Answer, Retriever};

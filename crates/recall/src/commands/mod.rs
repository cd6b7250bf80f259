pub mod ask;
pub mod handle;
pub mod stats;
pub mod version;

use recall_core::{Config, Retriever};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_FILE: &str = "recall.json";

/// Load config overrides from a JSON file, falling back to defaults for
/// anything missing, unreadable or malformed.
pub(crate) fn load_config(explicit: Option<&str>) -> Config {
    let path = Path::new(explicit.unwrap_or(DEFAULT_CONFIG_FILE));
    if !path.exists() {
        return Config::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return Config::new(),
    };

    #[derive(Deserialize)]
    struct ConfigFile {
        top_k_vocab: Option<usize>,
        fallback_threshold: Option<f64>,
    }

    match serde_json::from_str::<ConfigFile>(&content) {
        Ok(cf) => {
            let mut config = Config::new();
            if let Some(k) = cf.top_k_vocab {
                config.top_k_vocab = k;
            }
            if let Some(t) = cf.fallback_threshold {
                config.fallback_threshold = t;
            }
            config
        }
        Err(_) => Config::new(),
    }
}

pub(crate) fn build_retriever(corpus: &str, config_path: Option<&str>) -> Retriever {
    Retriever::new(corpus, load_config(config_path))
}

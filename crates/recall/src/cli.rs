use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "recall")]
#[command(version)]
#[command(about = "TF-IDF retrieval over a static document corpus")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a free-text query from the corpus
    Ask {
        /// Query text
        query: String,

        /// Corpus file (JSON array or plain text lines)
        #[arg(short, long, default_value = "data.json")]
        corpus: String,

        /// JSON config file (defaults to recall.json when present)
        #[arg(long)]
        config: Option<String>,

        /// Print the full JSON response instead of the answer text
        #[arg(long)]
        json: bool,
    },

    /// Answer a JSON request read from stdin (stdin/stdout JSON)
    Handle {
        /// Corpus file (JSON array or plain text lines)
        #[arg(short, long, default_value = "data.json")]
        corpus: String,

        /// JSON config file (defaults to recall.json when present)
        #[arg(long)]
        config: Option<String>,
    },

    /// Print index statistics as JSON
    Stats {
        /// Corpus file (JSON array or plain text lines)
        #[arg(short, long, default_value = "data.json")]
        corpus: String,

        /// JSON config file (defaults to recall.json when present)
        #[arg(long)]
        config: Option<String>,
    },

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_version() {
        let cli = Cli::try_parse_from(["recall", "version"]);
        assert!(cli.is_ok());
        assert!(matches!(cli.unwrap().command, Commands::Version));
    }

    #[test]
    fn test_cli_parse_ask() {
        let cli = Cli::try_parse_from(["recall", "ask", "capital of France"]);
        assert!(cli.is_ok());
        if let Commands::Ask {
            query,
            corpus,
            config,
            json,
        } = cli.unwrap().command
        {
            assert_eq!(query, "capital of France");
            assert_eq!(corpus, "data.json");
            assert_eq!(config, None);
            assert!(!json);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_ask_with_flags() {
        let cli = Cli::try_parse_from([
            "recall", "ask", "hello", "--corpus", "faq.json", "--json",
        ]);
        assert!(cli.is_ok());
        if let Commands::Ask { corpus, json, .. } = cli.unwrap().command {
            assert_eq!(corpus, "faq.json");
            assert!(json);
        } else {
            panic!("Expected Ask command");
        }
    }

    #[test]
    fn test_cli_parse_handle_and_stats() {
        for cmd in ["handle", "stats"] {
            let cli = Cli::try_parse_from(["recall", cmd]);
            assert!(cli.is_ok(), "Failed to parse {}", cmd);
        }
    }
}

use serde::Deserialize;
use serde_json::Value;
use std::io::{self, Read, Write};

#[derive(Debug, Default, Deserialize)]
struct AskRequest {
    #[serde(default)]
    query: Value,
}

/// The `query` field accepts any JSON shape: strings pass through,
/// missing/null become empty, everything else is kept as its JSON text.
fn coerce_query(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn run(corpus: &str, config_path: Option<&str>) -> anyhow::Result<()> {
    // 1. Read the JSON request from stdin; a malformed body is an empty query
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let request: AskRequest = serde_json::from_str(&input).unwrap_or_default();

    // 2. Answer through the retriever
    let retriever = super::build_retriever(corpus, config_path);
    let answer = retriever.answer(&coerce_query(&request.query));

    // 3. Write the JSON response to stdout
    let json = serde_json::to_string(&answer)?;
    io::stdout().write_all(json.as_bytes())?;
    io::stdout().flush()?;

    Ok(())
}

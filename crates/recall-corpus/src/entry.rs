//! Normalization of raw corpus entries into indexable text

use serde_json::Value;

/// Separator between question and answer when both are present.
const QA_SEPARATOR: &str = "\n---\n";

/// One entry of the corpus file, normalized at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum CorpusEntry {
    /// Used verbatim as a document.
    PlainText(String),
    /// Question/answer pair from an object entry.
    Qa {
        question: Option<String>,
        answer: Option<String>,
    },
}

impl CorpusEntry {
    /// Classify a JSON value.
    ///
    /// Strings pass through. Objects are read via the recognized keys
    /// `q`/`question` and `a`/`answer` (short key wins, empty strings
    /// count as absent). Every other shape is kept as its JSON text.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => CorpusEntry::PlainText(s.clone()),
            Value::Object(map) => {
                let question = string_field(map.get("q")).or_else(|| string_field(map.get("question")));
                let answer = string_field(map.get("a")).or_else(|| string_field(map.get("answer")));
                CorpusEntry::Qa { question, answer }
            }
            other => CorpusEntry::PlainText(other.to_string()),
        }
    }

    /// Flatten to the document text that gets indexed.
    pub fn into_text(self) -> String {
        match self {
            CorpusEntry::PlainText(text) => text,
            CorpusEntry::Qa { question, answer } => match (question, answer) {
                (Some(q), Some(a)) => format!("{}{}{}", q, QA_SEPARATOR, a),
                (None, Some(a)) => a,
                (Some(q), None) => q,
                (None, None) => String::new(),
            },
        }
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

use std::path::PathBuf;
use tempfile::TempDir;

pub const SAMPLE_CORPUS: &str = r#"["Paris is the capital of France", "The sun is a star", "Rust is a systems programming language"]"#;

pub fn write_corpus(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("data.json");
    std::fs::write(&path, contents).unwrap();
    path
}

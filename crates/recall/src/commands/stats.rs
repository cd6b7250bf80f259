pub fn run(corpus: &str, config_path: Option<&str>) -> anyhow::Result<()> {
    let retriever = super::build_retriever(corpus, config_path);
    let stats = retriever.stats();
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_runs_against_corpus_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("data.json");
        std::fs::write(&path, r#"["one doc", "another doc"]"#).unwrap();

        let result = run(path.to_str().unwrap(), None);
        assert!(result.is_ok());
    }
}

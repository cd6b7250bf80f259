pub fn run(query: &str, corpus: &str, config_path: Option<&str>, json: bool) -> anyhow::Result<()> {
    let retriever = super::build_retriever(corpus, config_path);
    let answer = retriever.answer(query);

    if json {
        println!("{}", serde_json::to_string(&answer)?);
    } else if let Some(text) = &answer.answer {
        println!("{}", text);
    }

    Ok(())
}

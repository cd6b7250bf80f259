pub fn run() -> anyhow::Result<()> {
    println!("recall {}", env!("CARGO_PKG_VERSION"));
    println!("TF-IDF retrieval over a static document corpus");
    Ok(())
}

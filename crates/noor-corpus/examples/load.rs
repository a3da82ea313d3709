use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use noor_core::config::Config;
use noor_corpus::samples::fallback_sample;
use noor_corpus::{Catalog, CorpusLoader, LoadStatus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let base = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("public"));

    let loader = CorpusLoader::from_settings(&settings.corpus, &base, fallback_sample());
    let outcome = loader.load().await;
    match outcome.status {
        LoadStatus::Ready => println!(
            "Loaded {} records from {}",
            outcome.records.len(),
            outcome.source.as_deref().unwrap_or("?")
        ),
        _ => println!("{}", outcome.warning.as_deref().unwrap_or("corpus not ready")),
    }

    let mut catalog = Catalog::builtin();
    catalog.replace_records(&settings.corpus.collection, outcome.records)?;
    for c in catalog.iter() {
        let state = if c.is_partial() {
            format!("partial, {} missing", c.missing())
        } else {
            "complete".to_string()
        };
        println!(
            "{:<20} {:>5} records of ~{:<5} ({})",
            c.key,
            c.records.len(),
            c.expected_count,
            state
        );
    }
    Ok(())
}

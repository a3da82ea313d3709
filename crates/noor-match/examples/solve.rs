use tracing_subscriber::EnvFilter;

use noor_core::config::Config;
use noor_core::Query;
use noor_corpus::samples::guidance_sample;
use noor_match::{MatchOptions, MatchOutcome, RelevanceMatcher};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::load()?;
    let matcher = RelevanceMatcher::new(MatchOptions::from(&config.settings()?.matcher));
    let corpus = guidance_sample();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = Query::new(args.join(" "));
    match MatchOutcome::search(&matcher, &query, &corpus) {
        MatchOutcome::Found(results) => {
            for hit in results {
                println!(
                    "{} #{}  relevance {}%",
                    hit.record.collection(),
                    hit.record.number(),
                    hit.percent()
                );
                println!("  {}", hit.record.fields().english.as_deref().unwrap_or(""));
                if let Some(note) = hit.record.note() { println!("  Why this matches: {}", note); }
            }
        }
        _ => println!(
            "No direct match found. Try different wording like patience, anger, honesty, \
             business, or intention."
        ),
    }
    Ok(())
}

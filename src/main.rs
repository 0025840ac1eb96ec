//! `daily-verse` - print random scripture verses as HTML.
//!
//! Usage: daily-verse [--count N] [--json]

use anyhow::Context;
use daily_verse::config::Config;
use daily_verse::constants::api::MAX_CONCURRENT_REQUESTS;
use daily_verse::VerseProvider;
use tracing_subscriber::EnvFilter;

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    count: usize,
    json: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Args {
    let args: Vec<String> = args.into_iter().collect();

    let count = args
        .iter()
        .position(|a| a == "--count")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(1)
        .max(1);
    let json = args.iter().any(|a| a == "--json");

    Args { count, json }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only verse output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1));

    let config = Config::load().context("Failed to load configuration")?;
    tracing::info!(
        "{} {} using {}",
        config.app_name(),
        config.app_version(),
        config.api_url
    );

    let provider = VerseProvider::from_config(&config).context("Failed to build verse provider")?;

    let verses = provider.resolve_many(args.count, MAX_CONCURRENT_REQUESTS).await;

    for verse in &verses {
        if args.json {
            println!("{}", serde_json::to_string(verse)?);
        } else {
            println!("{}", verse.html);
        }
    }

    Ok(())
}

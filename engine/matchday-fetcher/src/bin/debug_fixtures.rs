use chrono::NaiveDate;
use matchday_fetcher::{FetcherConfig, FetcherError, MatchdayFetcher};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    // Optional YYYY-MM-DD argument, defaults to today
    let date = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")
            .map_err(|e| FetcherError::InvalidDate(format!("{arg}: {e}")))?,
        None => MatchdayFetcher::today(),
    };

    info!("Debugging API-Football fixtures payload for {}", date);

    let fetcher = MatchdayFetcher::new(FetcherConfig::from_env())?;
    let raw = fetcher.fetch_raw_fixtures(date).await?;

    let count = raw["response"].as_array().map_or(0, Vec::len);
    info!("Upstream returned {} fixture entries", count);
    if let Some(errors) = raw.get("errors") {
        info!("Upstream errors field: {}", errors);
    }

    println!("{}", serde_json::to_string_pretty(&raw)?);

    info!("Debug completed!");
    Ok(())
}

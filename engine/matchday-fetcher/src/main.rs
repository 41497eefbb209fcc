use matchday_fetcher::{print_results, FetcherConfig, MatchdayFetcher};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // .env is optional
    dotenv::dotenv().ok();

    info!("Starting match results fetch");

    let config = FetcherConfig::from_env();
    info!("Loaded configuration: {:?}", config);

    let fetcher = MatchdayFetcher::new(config)?;
    let results = fetcher.fetch_today_results().await;

    print_results(&results);

    info!("Printed {} match results", results.len());
    Ok(())
}

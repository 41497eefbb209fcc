use chrono::{Local, NaiveDate, Utc};
use reqwest::{Client, Response};
use tracing::{debug, error, info};

use crate::config::FetcherConfig;
use crate::error::{FetcherError, Result};
use crate::models::*;
use crate::FIXTURES_TIMEZONE;

/// Fetches one day of fixtures from API-Football
pub struct MatchdayFetcher {
    config: FetcherConfig,
    client: Client,
}

impl MatchdayFetcher {
    /// Create a new fetcher instance
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { config, client })
    }

    /// Today's local calendar date
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Send the fixtures request for `date` and check the status
    async fn request_fixtures(&self, date: NaiveDate) -> Result<Response> {
        let api_key = self.config.api_key().ok_or(FetcherError::MissingApiKey)?;
        let url = self.config.fixtures_url();
        let date = date.format("%Y-%m-%d").to_string();

        info!("Fetching fixtures for {} from: {}", date, url);

        let response = self
            .client
            .get(&url)
            .query(&[("date", date.as_str()), ("timezone", FIXTURES_TIMEZONE)])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.config.api_football.api_host)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetcherError::Status { status, body });
        }

        Ok(response)
    }

    /// Fetch and decode the fixtures payload for `date`
    pub async fn fetch_fixtures(&self, date: NaiveDate) -> Result<FixturesResponse> {
        let body = self.request_fixtures(date).await?.text().await?;
        let payload: FixturesResponse = serde_json::from_str(&body)?;

        if let Some(errors) = payload.upstream_errors() {
            return Err(FetcherError::Upstream(errors));
        }

        debug!("Upstream reported {:?} results", payload.results);
        Ok(payload)
    }

    /// Fetch the undecoded payload for `date`
    pub async fn fetch_raw_fixtures(&self, date: NaiveDate) -> Result<serde_json::Value> {
        let body = self.request_fixtures(date).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the results for `date`, in upstream order
    pub async fn fetch_results_for(&self, date: NaiveDate) -> Result<Vec<MatchResult>> {
        let payload = self.fetch_fixtures(date).await?;

        let results: Vec<MatchResult> = payload
            .response
            .iter()
            .map(|entry| entry.to_match_result(&Local))
            .collect();

        info!("Successfully fetched {} fixtures for {}", results.len(), date);
        Ok(results)
    }

    /// Run a complete fetch cycle for today
    pub async fn run_today_fetch(&self) -> FetchOutcome {
        let date = Self::today();

        match self.fetch_results_for(date).await {
            Ok(results) => FetchOutcome::Fetched {
                date,
                results,
                timestamp: Utc::now(),
            },
            Err(e) => {
                error!("Error fetching match results: {}", e);
                FetchOutcome::FetchFailed {
                    endpoint: self.config.fixtures_url(),
                    error: e.to_string(),
                    timestamp: Utc::now(),
                }
            }
        }
    }

    /// Today's results; empty when the fetch fails
    pub async fn fetch_today_results(&self) -> Vec<MatchResult> {
        self.run_today_fetch().await.into_results()
    }
}

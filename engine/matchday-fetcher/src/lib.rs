//! Matchday Fetcher
//!
//! Fetches a single day's football fixtures from API-Football (via RapidAPI),
//! flattens each fixture into a `MatchResult` and prints the list to the console.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod presenter;

#[cfg(test)]
mod test_support;

pub use config::FetcherConfig;
pub use error::{FetcherError, Result};
pub use fetcher::MatchdayFetcher;
pub use models::*;
pub use presenter::{print_results, render_match, write_results};

/// API-Football v3 base URL on RapidAPI
pub const API_FOOTBALL_BASE_URL: &str = "https://api-football-v1.p.rapidapi.com/v3";

/// Value of the `X-RapidAPI-Host` header
pub const API_FOOTBALL_HOST: &str = "api-football-v1.p.rapidapi.com";

/// Timezone the fixtures endpoint is queried in
pub const FIXTURES_TIMEZONE: &str = "Europe/London";

/// Environment variable holding the RapidAPI key
pub const API_KEY_ENV: &str = "RAPID_API_KEY";

/// Display format for `MatchResult::match_date` (day/month/year, 24h clock)
pub const MATCH_DATE_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

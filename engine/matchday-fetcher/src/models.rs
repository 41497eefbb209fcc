use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::MATCH_DATE_FORMAT;

/// API-Football `/fixtures` response envelope
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixturesResponse {
    pub response: Vec<FixtureEntry>,

    /// Empty array on success, an object keyed by problem otherwise
    #[serde(default)]
    pub errors: serde_json::Value,

    #[serde(default)]
    pub results: Option<u32>,
}

/// One fixture as returned by API-Football
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureEntry {
    pub fixture: FixtureInfo,
    pub league: League,
    pub teams: Teams,
    pub goals: Goals,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureInfo {
    pub id: Option<i64>,

    /// Kick-off timestamp, RFC 3339
    pub date: String,

    pub status: FixtureStatus,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FixtureStatus {
    /// e.g. "Match Finished"
    pub long: String,

    /// e.g. "FT"
    pub short: Option<String>,

    /// Minutes played
    pub elapsed: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct League {
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Teams {
    pub home: Team,
    pub away: Team,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Team {
    pub name: String,
}

/// Goal counts; null before kick-off
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Goals {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// Flattened view of one fixture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub home_team: String,
    pub away_team: String,
    pub score: String,
    pub status: String,
    pub league: String,
    pub match_date: String,
}

/// Outcome of a single fetch cycle
#[derive(Debug, Clone, Serialize)]
pub enum FetchOutcome {
    /// Fixtures fetched and mapped
    Fetched {
        date: NaiveDate,
        results: Vec<MatchResult>,
        timestamp: DateTime<Utc>,
    },

    /// Data fetch failed
    FetchFailed {
        endpoint: String,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

impl FetchOutcome {
    /// Results of the cycle; a failed fetch yields none
    pub fn into_results(self) -> Vec<MatchResult> {
        match self {
            FetchOutcome::Fetched { results, .. } => results,
            FetchOutcome::FetchFailed { .. } => Vec::new(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, FetchOutcome::FetchFailed { .. })
    }
}

impl FixturesResponse {
    /// Describe the `errors` payload if the API reported any
    pub fn upstream_errors(&self) -> Option<String> {
        let reported = match &self.errors {
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::Object(map) => !map.is_empty(),
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => !s.is_empty(),
            _ => true,
        };

        reported.then(|| self.errors.to_string())
    }
}

impl Goals {
    /// "<home> - <away>", with `-` standing in for a missing count
    pub fn score_line(&self) -> String {
        fn side(goals: Option<u32>) -> String {
            goals.map_or_else(|| "-".to_string(), |g| g.to_string())
        }

        format!("{} - {}", side(self.home), side(self.away))
    }
}

impl FixtureEntry {
    /// Convert to a `MatchResult`, rendering the kick-off time in `tz`
    pub fn to_match_result<Tz>(&self, tz: &Tz) -> MatchResult
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        MatchResult {
            home_team: self.teams.home.name.clone(),
            away_team: self.teams.away.name.clone(),
            score: self.goals.score_line(),
            status: self.fixture.status.long.clone(),
            league: self.league.name.clone(),
            match_date: format_match_date(&self.fixture.date, tz),
        }
    }
}

/// Render an RFC 3339 timestamp in `tz` using `MATCH_DATE_FORMAT`.
///
/// Unparseable input is returned unchanged.
pub fn format_match_date<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts.with_timezone(tz).format(MATCH_DATE_FORMAT).to_string(),
        Err(e) => {
            warn!("Unparseable fixture date {:?}: {}", raw, e);
            raw.to_string()
        }
    }
}

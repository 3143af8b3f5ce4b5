//! HTTP client for the public MLB Stats API.

use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};
use serde_json::Value;
use std::time::Duration;

use crate::{
    cli::types::{PlayerId, Season, SportId},
    error::{CompareError, Result},
    mlb::types::{PlayerCandidate, SearchEnvelope, SearchOutcome},
    stats::{normalize, CanonicalPlayerStats},
};



/// Base path for the MLB Stats API v1.
pub const MLB_BASE_URL: &str = "https://statsapi.mlb.com/api/v1";

const HEADSHOT_BASE_URL: &str = "https://img.mlbstatic.com/mlb-photos/image/upload/w_213,d_people:generic:headshot:silo:current.png,q_auto:best,f_auto/v1/people";

pub const DEFAULT_SEARCH_LIMIT: u32 = 25;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!("mlb-compare/", env!("CARGO_PKG_VERSION"));

/// Headshot image for a player. The image is not checked for existence;
/// MLB serves a generic silhouette for unknown IDs.
pub fn headshot_url(id: PlayerId) -> String {
    format!("{HEADSHOT_BASE_URL}/{id}/headshot/67/current")
}

/// Connection and query settings for [`MlbClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub sport_id: SportId,
    pub season: Season,
    pub search_limit: u32,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: MLB_BASE_URL.to_string(),
            sport_id: SportId::MLB,
            season: Season::default(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MlbClient {
    http: Client,
    config: ClientConfig,
}

impl MlbClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(get_common_headers())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Search active players by name.
    ///
    /// A blank query returns [`SearchOutcome::EmptyQuery`] without touching
    /// the network.
    pub async fn search_players(&self, query: &str) -> Result<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::EmptyQuery);
        }

        let params = [
            ("names", query.to_string()),
            ("sportIds", self.config.sport_id.to_string()),
            ("active", "true".to_string()),
            ("limit", self.config.search_limit.to_string()),
            (
                "fields",
                "people,id,fullName,currentTeam,primaryPosition".to_string(),
            ),
        ];
        let body = self.get_json("/people/search", &params).await?;
        let envelope: SearchEnvelope = serde_json::from_value(body).map_err(|e| {
            CompareError::invalid_source(format!("unexpected search response: {e}"))
        })?;

        let candidates: Vec<PlayerCandidate> =
            envelope.people.into_iter().map(PlayerCandidate::from).collect();
        debug!("search {query:?} returned {} candidate(s)", candidates.len());

        if candidates.is_empty() {
            Ok(SearchOutcome::NoResults)
        } else {
            Ok(SearchOutcome::Found(candidates))
        }
    }

    /// Biographical record: `/people/{id}`.
    pub async fn get_person(&self, id: PlayerId) -> Result<Value> {
        let params = [(
            "fields",
            "people,id,fullName,primaryPosition,currentTeam".to_string(),
        )];
        self.get_json(&format!("/people/{id}"), &params).await
    }

    /// Regular-season hitting split for the configured season.
    pub async fn get_season_hitting(&self, id: PlayerId) -> Result<Value> {
        let params = [
            ("stats", "season".to_string()),
            ("group", "hitting".to_string()),
            ("season", self.config.season.to_string()),
            ("gameType", "R".to_string()),
            ("sportId", self.config.sport_id.to_string()),
        ];
        self.get_json(&format!("/people/{id}/stats"), &params).await
    }

    /// Fetch info and season stats concurrently and normalize them.
    ///
    /// Fails if either request fails; nothing partial is returned.
    pub async fn load_player(
        &self,
        id: PlayerId,
        fallback_name: &str,
    ) -> Result<CanonicalPlayerStats> {
        let (person, stats) =
            tokio::try_join!(self.get_person(id), self.get_season_hitting(id))?;
        let player = normalize(&person, &stats, fallback_name)?;
        Ok(player.with_player_id(id))
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!("GET {url} {params:?}");

        let res = self.http.get(&url).query(params).send().await?;
        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            debug!("GET {url} failed with {status}: {body}");
            return Err(CompareError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = res.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Headers sent with every request.
pub fn get_common_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

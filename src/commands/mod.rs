//! Command implementations for the MLB comparison CLI

pub mod common;
pub mod compare;
pub mod interactive;
pub mod render;
pub mod search;

use std::time::Duration;

use crate::{
    cli::SourceArgs,
    mlb::http::{ClientConfig, MLB_BASE_URL},
    BASE_URL_ENV_VAR, SEASON_ENV_VAR,
};

/// Build the client configuration from CLI flags, falling back to the
/// `MLB_COMPARE_SEASON` / `MLB_STATS_BASE_URL` environment variables.
pub fn resolve_client_config(source: &SourceArgs) -> ClientConfig {
    resolve_client_config_with(source, |name| std::env::var(name).ok())
}

/// Same as [`resolve_client_config`] with an explicit environment lookup.
pub fn resolve_client_config_with<F>(source: &SourceArgs, env: F) -> ClientConfig
where
    F: Fn(&str) -> Option<String>,
{
    let season = source
        .season
        .or_else(|| env(SEASON_ENV_VAR).and_then(|s| s.parse().ok()))
        .unwrap_or_default();

    let base_url = source
        .base_url
        .clone()
        .or_else(|| env(BASE_URL_ENV_VAR))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| MLB_BASE_URL.to_string());

    ClientConfig {
        base_url,
        season,
        search_limit: source.limit,
        timeout: Duration::from_secs(source.timeout_secs),
        ..ClientConfig::default()
    }
}

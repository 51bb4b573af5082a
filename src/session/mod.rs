//! Navigation session module
//!
//! Ties the cursor, the aggregator and the displayed collection together.
//!
//! # Overview
//!
//! The session module provides:
//! - `FetchState` - Displayed collection with replace-on-completion semantics
//! - `NavigationTicket` - Generation handle that lets newer navigations win
//! - `Pokedex` - Drives navigations and single lookups against a fetcher

mod types;

pub use types::{Completion, FetchState, NavigationTicket};

use crate::aggregator::{PokemonAggregator, ResourceFetcher};
use crate::config::PokedexConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::pokemon::PokemonDetail;
use crate::types::NavAction;
use tracing::{info, warn};

/// Entry point for navigating the listing
#[derive(Debug, Clone)]
pub struct Pokedex<F = HttpClient> {
    aggregator: PokemonAggregator<F>,
    base_url: String,
}

impl Pokedex<HttpClient> {
    /// Create a Pokédex backed by an HTTP client built from `config`
    pub fn from_config(config: &PokedexConfig) -> Result<Self> {
        config.validate()?;
        let client = HttpClient::with_config(config.http_client_config())?;
        Ok(Self::with_fetcher(client, config.base_url.clone()))
    }
}

impl<F: ResourceFetcher> Pokedex<F> {
    /// Create a Pokédex over any fetcher
    pub fn with_fetcher(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            aggregator: PokemonAggregator::new(fetcher),
            base_url: base_url.into(),
        }
    }

    pub fn aggregator(&self) -> &PokemonAggregator<F> {
        &self.aggregator
    }

    /// Root of the listing
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fresh, empty state rooted at this Pokédex's listing
    pub fn new_state(&self) -> FetchState {
        FetchState::new(self.base_url.clone())
    }

    /// Run one navigation to completion against `state`.
    ///
    /// On failure the previously displayed collection stays in place and
    /// the error is returned.
    pub async fn navigate(&self, state: &mut FetchState, action: NavAction) -> Result<Completion> {
        let ticket = state.begin(action)?;
        let result = self.aggregator.fetch_page(&ticket.reference).await;

        if let Err(e) = &result {
            warn!("Navigation {} to {} failed: {}", action, ticket.reference, e);
        }

        let completion = state.complete(&ticket, result)?;
        if let Completion::Replaced { count } = completion {
            info!(
                "Showing {} pokemon (next: {}, previous: {})",
                count,
                state.has_next(),
                state.has_previous()
            );
        }
        Ok(completion)
    }

    /// Fetch one Pokémon by name or national dex number
    pub async fn lookup(&self, name_or_id: &str) -> Result<PokemonDetail> {
        let base = self.base_url.split('?').next().unwrap_or(&self.base_url);
        let reference = format!(
            "{}/{}",
            base.trim_end_matches('/'),
            name_or_id.trim().to_lowercase()
        );
        self.aggregator.fetch_detail(&reference).await
    }
}

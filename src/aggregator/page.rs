//! Page aggregator implementation

use super::fetcher::ResourceFetcher;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::pagination::PageCursor;
use crate::pokemon::{decode_detail, decode_page, PokemonDetail};
use crate::types::PageReference;
use futures::future::try_join_all;
use std::time::Instant;
use tracing::{debug, info};

/// One fully resolved listing page
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    /// Reference the page was fetched from
    pub reference: PageReference,
    /// The page's `next` reference
    pub next: Option<PageReference>,
    /// The page's `previous` reference
    pub previous: Option<PageReference>,
    /// Total entries across the listing, when reported
    pub count: Option<u64>,
    /// Detail records in listing order
    pub pokemon: Vec<PokemonDetail>,
}

impl FetchedPage {
    /// Report this page's next/previous references to a cursor
    pub fn apply_to(&self, cursor: &mut PageCursor) {
        cursor.update(self.next.clone(), self.previous.clone());
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

/// Resolves listing pages into ordered detail records
#[derive(Debug, Clone)]
pub struct PokemonAggregator<F = HttpClient> {
    fetcher: F,
}

impl<F: ResourceFetcher> PokemonAggregator<F> {
    /// Create an aggregator over the given fetcher
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Get the underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch a listing page and every detail record on it.
    ///
    /// Detail retrievals run concurrently. The first failure fails the whole
    /// page and drops the remaining in-flight retrievals. On success the
    /// records are in the same order as the page's `results`.
    pub async fn fetch_page(&self, reference: &str) -> Result<FetchedPage> {
        let start = Instant::now();

        let body = self
            .fetcher
            .fetch_json(reference)
            .await
            .map_err(|e| Error::fetch(reference, e))?;
        let page = decode_page(reference, body).map_err(|e| Error::fetch(reference, e))?;

        debug!(
            "Page {} lists {} entries (next: {:?}, previous: {:?})",
            reference,
            page.results.len(),
            page.next,
            page.previous
        );

        let pokemon = try_join_all(
            page.results
                .iter()
                .map(|summary| self.fetch_detail(&summary.detail_ref)),
        )
        .await?;

        info!(
            "Fetched {} pokemon from {} in {}ms",
            pokemon.len(),
            reference,
            start.elapsed().as_millis()
        );

        Ok(FetchedPage {
            reference: reference.to_string(),
            next: page.next,
            previous: page.previous,
            count: page.count,
            pokemon,
        })
    }

    /// Fetch a single detail record
    pub async fn fetch_detail(&self, reference: &str) -> Result<PokemonDetail> {
        let body = self
            .fetcher
            .fetch_json(reference)
            .await
            .map_err(|e| Error::fetch(reference, e))?;
        decode_detail(reference, body).map_err(|e| Error::fetch(reference, e))
    }
}

//! Page aggregation module
//!
//! Resolves one listing page into the full detail records of every entry on
//! it.
//!
//! # Overview
//!
//! 1. Fetch the page document and read `results`, `next` and `previous`
//! 2. Fetch every entry's detail concurrently
//! 3. Fail the whole page on the first detail failure
//! 4. Return the details in listing order, whatever order they completed in

mod fetcher;
mod page;

pub use fetcher::ResourceFetcher;
pub use page::{FetchedPage, PokemonAggregator};

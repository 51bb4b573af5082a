//! # Pokédex Client
//!
//! Browse the paginated PokeAPI listing as ready-to-render cards.
//!
//! ## Features
//!
//! - **Page Cursor**: Initial/next/previous navigation over API-supplied links
//! - **Ordered Fan-out**: Every entry's detail fetched concurrently, reassembled in listing order
//! - **All-or-nothing Pages**: One failed detail fails the page; the last good page stays displayed
//! - **Superseding Navigations**: Late results of older navigations never overwrite newer state
//! - **View Models**: Cards, detail panels, type colors and stat bars
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pokedex_client::{NavAction, PokedexConfig, Result};
//! use pokedex_client::present::PageView;
//! use pokedex_client::session::Pokedex;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let pokedex = Pokedex::from_config(&PokedexConfig::default())?;
//!     let mut state = pokedex.new_state();
//!
//!     pokedex.navigate(&mut state, NavAction::Initial).await?;
//!     print!("{}", PageView::from_state(&state));
//!
//!     if state.has_next() {
//!         pokedex.navigate(&mut state, NavAction::Next).await?;
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐ resolve ┌────────────────────┐ fetch_page ┌──────────────┐
//! │  PageCursor  │────────▶│  PokemonAggregator │───────────▶│  FetchState  │
//! └──────────────┘         │  page + N details  │            │  (replaced)  │
//!        ▲                 └────────────────────┘            └──────┬───────┘
//!        └──────────── next / previous ─────────────────────────────┤
//!                                                                   ▼
//!                                   ┌─────────────┐        ┌────────────────┐
//!                                   │ DetailView  │───────▶│    present     │
//!                                   └─────────────┘        │ cards / panels │
//!                                                          └────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP client
pub mod http;

/// Page cursor
pub mod pagination;

/// Listing and detail records
pub mod pokemon;

/// Concurrent page aggregation
pub mod aggregator;

/// Displayed collection and navigation
pub mod session;

/// Detail dialog state machine
pub mod detail;

/// Derived display fields and view models
pub mod present;

/// Configuration
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod fixtures;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PokedexConfig;
pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

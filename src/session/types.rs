//! Fetch state types
//!
//! `FetchState` is the single displayed collection plus its cursor. It is
//! replaced wholesale when a navigation completes and is never patched with
//! partial results.

use crate::aggregator::FetchedPage;
use crate::error::Result;
use crate::pagination::PageCursor;
use crate::pokemon::PokemonDetail;
use crate::types::{NavAction, PageReference};
use tracing::{debug, warn};

/// Handle for one in-flight navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTicket {
    /// Generation the navigation was started in
    pub generation: u64,
    /// Requested action
    pub action: NavAction,
    /// Reference to fetch
    pub reference: PageReference,
}

/// Outcome of completing a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The displayed collection was replaced
    Replaced {
        /// Number of Pokémon now displayed
        count: usize,
    },
    /// A newer navigation was started; this result was discarded
    Superseded {
        /// Generation of the discarded navigation
        generation: u64,
    },
}

impl Completion {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Displayed collection and cursor position
#[derive(Debug, Clone)]
pub struct FetchState {
    pokemon: Vec<PokemonDetail>,
    cursor: PageCursor,
    /// Reference of the displayed page
    page: Option<PageReference>,
    /// Total entries reported by the displayed page
    total: Option<u64>,
    /// Incremented by every `begin`
    generation: u64,
}

impl FetchState {
    /// Empty state rooted at the given listing reference
    pub fn new(initial: impl Into<PageReference>) -> Self {
        Self {
            pokemon: Vec::new(),
            cursor: PageCursor::new(initial),
            page: None,
            total: None,
            generation: 0,
        }
    }

    /// Start a navigation.
    ///
    /// Any navigation begun earlier is superseded: its result will be
    /// discarded by [`FetchState::complete`].
    pub fn begin(&mut self, action: NavAction) -> Result<NavigationTicket> {
        let reference = self.cursor.resolve(action)?;
        self.generation += 1;

        debug!(
            "Navigation {} started: {} -> {}",
            self.generation, action, reference
        );

        Ok(NavigationTicket {
            generation: self.generation,
            action,
            reference,
        })
    }

    /// Finish a navigation with the aggregator's result.
    ///
    /// A stale ticket leaves the state untouched whatever the result. A
    /// failed current navigation also leaves it untouched and hands the
    /// error back so it can be surfaced.
    pub fn complete(
        &mut self,
        ticket: &NavigationTicket,
        result: Result<FetchedPage>,
    ) -> Result<Completion> {
        if ticket.generation != self.generation {
            match &result {
                Ok(_) => debug!(
                    "Discarding superseded navigation {} (current {})",
                    ticket.generation, self.generation
                ),
                Err(e) => warn!(
                    "Superseded navigation {} failed: {}",
                    ticket.generation, e
                ),
            }
            return Ok(Completion::Superseded {
                generation: ticket.generation,
            });
        }

        let page = result?;
        page.apply_to(&mut self.cursor);
        self.cursor.activate(ticket.action);
        self.page = Some(page.reference);
        self.total = page.count;
        self.pokemon = page.pokemon;

        Ok(Completion::Replaced {
            count: self.pokemon.len(),
        })
    }

    /// Displayed Pokémon in listing order
    pub fn pokemon(&self) -> &[PokemonDetail] {
        &self.pokemon
    }

    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Reference of the displayed page, if any page has loaded
    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_next(&self) -> bool {
        self.cursor.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor.has_previous()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}

//! Detail view state machine
//!
//! ```text
//!            toggle(p)                 select_tab(t)
//!   Closed ─────────────▶ Open(p, tab) ──────────────▶ Open(p, t)
//!     ▲                       │
//!     └── toggle(_) / close() ┘
//! ```

use crate::pokemon::PokemonDetail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Tabs of the detail dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailTab {
    #[default]
    Stats,
    Abilities,
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailTab::Stats => f.write_str("Stats"),
            DetailTab::Abilities => f.write_str("Abilities"),
        }
    }
}

impl FromStr for DetailTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stats" => Ok(DetailTab::Stats),
            "abilities" => Ok(DetailTab::Abilities),
            other => Err(format!("unknown tab: {other}")),
        }
    }
}

/// Detail dialog state
///
/// Closed when no Pokémon is selected. The active tab survives closing, so
/// reopening shows the tab that was last picked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailView {
    selected: Option<PokemonDetail>,
    tab: DetailTab,
}

impl DetailView {
    /// Create a closed view on the Stats tab
    pub fn new() -> Self {
        Self::default()
    }

    /// Card info affordance: opens on `pokemon` when closed, closes when open.
    ///
    /// Closing from any card, including a different one, clears the
    /// selection instead of recording the clicked Pokémon. A closed view
    /// never holds a selection, so nothing rendered depends on it.
    pub fn toggle(&mut self, pokemon: &PokemonDetail) {
        if self.is_open() {
            self.close();
        } else {
            debug!("Opening detail view for {}", pokemon.name);
            self.selected = Some(pokemon.clone());
        }
    }

    /// Switch tabs. Ignored while closed.
    pub fn select_tab(&mut self, tab: DetailTab) {
        if self.is_open() {
            self.tab = tab;
        }
    }

    /// Close the dialog and clear the selection
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Selected Pokémon, when open
    pub fn selected(&self) -> Option<&PokemonDetail> {
        self.selected.as_ref()
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }
}

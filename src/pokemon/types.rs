//! Domain records
//!
//! Flat, presentation-friendly records decoded from PokeAPI responses.

use crate::types::PageReference;
use serde::{Deserialize, Serialize};

/// Lightweight listing entry (résumé record) before its detail is fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
    /// Pokémon name as listed
    pub name: String,
    /// Reference to the full detail resource
    #[serde(rename = "url")]
    pub detail_ref: PageReference,
}

/// One paginated listing document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDocument {
    /// Total number of entries across all pages, when reported
    #[serde(default)]
    pub count: Option<u64>,
    /// Reference to the following page
    #[serde(default)]
    pub next: Option<PageReference>,
    /// Reference to the preceding page
    #[serde(default)]
    pub previous: Option<PageReference>,
    /// Entries on this page, in canonical listing order
    pub results: Vec<PokemonSummary>,
}

/// A single named base stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

impl BaseStat {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Full detail record for one Pokémon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    /// National dex number, always >= 1
    pub id: u32,
    pub name: String,
    /// Height as reported by the API
    pub height: f64,
    /// Weight as reported by the API
    pub weight: f64,
    /// Type names in slot order
    pub types: Vec<String>,
    /// Ability names in slot order
    pub abilities: Vec<String>,
    /// Base stats in API order (hp first)
    pub base_stats: Vec<BaseStat>,
    /// Dream World artwork, absent for many later generations
    pub image_ref: Option<String>,
}

impl PokemonDetail {
    /// Look up a base stat by name
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.base_stats
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value)
    }

    /// Check if the Pokémon has the given type
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t == type_name)
    }
}

//! View models consumed by the rendering layer

use super::format::{background_color, display_id, display_name, stat_percent, types_label};
use crate::detail::{DetailTab, DetailView};
use crate::pokemon::PokemonDetail;
use crate::session::FetchState;
use serde::Serialize;
use std::fmt;

/// One card in the grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonCard {
    /// Label of the info button, e.g. `#025`
    pub id_label: String,
    pub name: String,
    /// e.g. `Type: grass,poison`
    pub types_label: String,
    pub background: &'static str,
    pub image: Option<String>,
}

impl PokemonCard {
    pub fn from_detail(pokemon: &PokemonDetail) -> Self {
        Self {
            id_label: display_id(pokemon.id),
            name: display_name(&pokemon.name),
            types_label: types_label(&pokemon.types),
            background: background_color(&pokemon.types),
            image: pokemon.image_ref.clone(),
        }
    }
}

impl fmt::Display for PokemonCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<6} {:<14} {:<28} {}",
            self.id_label, self.name, self.types_label, self.background
        )
    }
}

/// The card grid plus the state of the navigation affordances
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    /// Reference of the displayed page
    pub page: Option<String>,
    /// Total entries in the listing, when known
    pub total: Option<u64>,
    /// Whether the "Next" affordance is enabled
    pub has_next: bool,
    /// Whether the "Prev" affordance is enabled
    pub has_previous: bool,
    pub cards: Vec<PokemonCard>,
}

impl PageView {
    pub fn from_state(state: &FetchState) -> Self {
        Self {
            page: state.page().map(String::from),
            total: state.total(),
            has_next: state.has_next(),
            has_previous: state.has_previous(),
            cards: state.pokemon().iter().map(PokemonCard::from_detail).collect(),
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.page, self.total) {
            (Some(page), Some(total)) => writeln!(f, "{page} ({total} total)")?,
            (Some(page), None) => writeln!(f, "{page}")?,
            (None, _) => writeln!(f, "Loading")?,
        }

        for (i, card) in self.cards.iter().enumerate() {
            writeln!(f, "{:>3}. {card}", i + 1)?;
        }

        let prev = if self.has_previous { "[Prev]" } else { " Prev " };
        let next = if self.has_next { "[Next]" } else { " Next " };
        writeln!(f, "{prev} {next}")
    }
}

/// One bar on the Stats tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBar {
    pub name: String,
    pub value: u32,
    /// Bar width, 0 to 100
    pub percent: f64,
}

/// Body of the active tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "items", rename_all = "snake_case")]
pub enum TabContent {
    Stats(Vec<StatBar>),
    Abilities(Vec<String>),
}

/// Contents of the open detail dialog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailPanel {
    pub name: String,
    /// e.g. `Height: 7 m`
    pub height_label: String,
    /// e.g. `Weight: 69 kg`
    pub weight_label: String,
    pub background: &'static str,
    pub image: Option<String>,
    pub tab: DetailTab,
    pub content: TabContent,
}

impl DetailPanel {
    /// Build the panel for an open view; `None` while closed
    pub fn from_view(view: &DetailView) -> Option<Self> {
        view.selected()
            .map(|pokemon| Self::for_pokemon(pokemon, view.tab()))
    }

    /// Build the panel for a Pokémon on the given tab
    pub fn for_pokemon(pokemon: &PokemonDetail, tab: DetailTab) -> Self {
        let content = match tab {
            DetailTab::Stats => TabContent::Stats(
                pokemon
                    .base_stats
                    .iter()
                    .map(|s| StatBar {
                        name: s.name.clone(),
                        value: s.value,
                        percent: stat_percent(s.value),
                    })
                    .collect(),
            ),
            DetailTab::Abilities => TabContent::Abilities(pokemon.abilities.clone()),
        };

        Self {
            name: display_name(&pokemon.name),
            height_label: format!("Height: {} m", pokemon.height),
            weight_label: format!("Weight: {} kg", pokemon.weight),
            background: background_color(&pokemon.types),
            image: pokemon.image_ref.clone(),
            tab,
            content,
        }
    }
}

impl fmt::Display for DetailPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}]", self.name, self.background)?;
        if let Some(image) = &self.image {
            writeln!(f, "{image}")?;
        }
        writeln!(f, "{}", self.height_label)?;
        writeln!(f, "{}", self.weight_label)?;
        writeln!(f, "-- {} --", self.tab)?;

        match &self.content {
            TabContent::Stats(bars) => {
                for bar in bars {
                    let filled = (bar.percent / 5.0).round() as usize;
                    writeln!(
                        f,
                        "{:<16} {:>3} {}",
                        bar.name,
                        bar.value,
                        "#".repeat(filled)
                    )?;
                }
            }
            TabContent::Abilities(abilities) => {
                for ability in abilities {
                    writeln!(f, "{ability}")?;
                }
            }
        }

        Ok(())
    }
}

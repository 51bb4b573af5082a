//! PokeAPI detail response shape
//!
//! Mirrors only the nested fields that are read:
//! `types[].type.name`, `abilities[].ability.name`, `stats[].{stat.name, base_stat}`
//! and `sprites.other.dream_world.front_default`.

use super::types::{BaseStat, PokemonDetail};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ApiPokemon {
    id: u32,
    name: String,
    #[serde(default)]
    height: f64,
    #[serde(default)]
    weight: f64,
    #[serde(default)]
    types: Vec<ApiTypeSlot>,
    #[serde(default)]
    abilities: Vec<ApiAbilitySlot>,
    #[serde(default)]
    stats: Vec<ApiStat>,
    #[serde(default)]
    sprites: Option<ApiSprites>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiAbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiStat {
    base_stat: u32,
    #[serde(default)]
    stat: Option<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct ApiSprites {
    #[serde(default)]
    other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
struct ApiOtherSprites {
    #[serde(default)]
    dream_world: Option<ApiDreamWorld>,
}

#[derive(Debug, Deserialize)]
struct ApiDreamWorld {
    #[serde(default)]
    front_default: Option<String>,
}

impl From<ApiPokemon> for PokemonDetail {
    fn from(api: ApiPokemon) -> Self {
        let image_ref = api
            .sprites
            .and_then(|s| s.other)
            .and_then(|o| o.dream_world)
            .and_then(|d| d.front_default);

        Self {
            id: api.id,
            name: api.name,
            height: api.height,
            weight: api.weight,
            types: api.types.into_iter().map(|t| t.kind.name).collect(),
            abilities: api.abilities.into_iter().map(|a| a.ability.name).collect(),
            base_stats: api
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.map(|n| n.name).unwrap_or_default(),
                    value: s.base_stat,
                })
                .collect(),
            image_ref,
        }
    }
}

//! Pokémon records module
//!
//! Listing pages, résumé entries and full detail records, plus decoding
//! from the PokeAPI JSON shapes.

mod decode;
mod types;
mod wire;

pub use decode::{decode_detail, decode_page};
pub use types::{BaseStat, PageDocument, PokemonDetail, PokemonSummary};

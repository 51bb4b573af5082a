//! Decoding of raw JSON documents into domain records

use super::types::{PageDocument, PokemonDetail};
use super::wire::ApiPokemon;
use crate::error::{Error, Result};
use crate::types::JsonValue;

/// Decode a listing page document.
///
/// A body without a `results` array is malformed.
pub fn decode_page(reference: &str, body: JsonValue) -> Result<PageDocument> {
    match body.get("results") {
        Some(JsonValue::Array(_)) => {}
        Some(_) => return Err(Error::malformed(reference, "`results` is not an array")),
        None => return Err(Error::malformed(reference, "missing `results` field")),
    }

    serde_json::from_value(body).map_err(|e| Error::malformed(reference, e.to_string()))
}

/// Decode a single Pokémon detail document
pub fn decode_detail(reference: &str, body: JsonValue) -> Result<PokemonDetail> {
    let api: ApiPokemon =
        serde_json::from_value(body).map_err(|e| Error::malformed(reference, e.to_string()))?;
    let detail = PokemonDetail::from(api);

    if detail.id == 0 {
        return Err(Error::malformed(reference, "pokemon id must be >= 1"));
    }

    Ok(detail)
}

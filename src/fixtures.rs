//! Shared fixtures for unit tests

use crate::aggregator::ResourceFetcher;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Detail document in the PokeAPI shape
pub fn pokemon_json(id: u32, name: &str, types: &[&str]) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({"slot": i + 1, "type": {"name": t, "url": format!("https://pokeapi.co/api/v2/type/{t}/")}}))
        .collect();

    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "types": types,
        "abilities": [
            {"ability": {"name": "overgrow", "url": "https://pokeapi.co/api/v2/ability/65/"}, "is_hidden": false, "slot": 1},
            {"ability": {"name": "chlorophyll", "url": "https://pokeapi.co/api/v2/ability/34/"}, "is_hidden": true, "slot": 3}
        ],
        "stats": [
            {"base_stat": 45, "effort": 0, "stat": {"name": "hp"}},
            {"base_stat": 49, "effort": 0, "stat": {"name": "attack"}},
            {"base_stat": 65, "effort": 1, "stat": {"name": "special-attack"}}
        ],
        "sprites": {
            "front_default": format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png"),
            "other": {
                "dream_world": {
                    "front_default": format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/dream-world/{id}.svg")
                }
            }
        }
    })
}

/// Listing page document with entries pointing at `{base}/{name}`
pub fn page_json(base: &str, names: &[&str], next: Option<&str>, previous: Option<&str>) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|n| json!({"name": n, "url": format!("{base}/{n}")}))
        .collect();

    json!({
        "count": 1302,
        "next": next,
        "previous": previous,
        "results": results
    })
}

/// In-memory fetcher with per-reference latency
#[derive(Default)]
pub struct FakeFetcher {
    docs: HashMap<String, (Duration, Option<Value>)>,
    completed: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with(mut self, reference: &str, delay_ms: u64, body: Option<Value>) -> Self {
        self.docs.insert(
            reference.to_string(),
            (Duration::from_millis(delay_ms), body),
        );
        self
    }

    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResourceFetcher for FakeFetcher {
    async fn fetch_json(&self, reference: &str) -> Result<Value> {
        let (delay, body) = self
            .docs
            .get(reference)
            .cloned()
            .unwrap_or((Duration::ZERO, None));
        tokio::time::sleep(delay).await;
        self.completed.lock().unwrap().push(reference.to_string());
        body.ok_or_else(|| Error::http_status(500, "unavailable"))
    }
}

//! Common types used throughout the Pokédex client
//!
//! This module contains shared type definitions and type aliases
//! used across multiple modules.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

/// Opaque reference (URL) to a listing page or a detail resource.
///
/// Absence of a page is expressed as `Option<PageReference>`.
pub type PageReference = String;

/// Default root of the paginated listing
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon";

// ============================================================================
// Navigation
// ============================================================================

/// A navigation request emitted by the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    /// Jump back to the configured root page
    #[default]
    Initial,
    /// Follow the page's `next` reference
    Next,
    /// Follow the page's `previous` reference
    Previous,
}

impl NavAction {
    /// Lowercase name used in logs and messages
    pub fn as_str(&self) -> &'static str {
        match self {
            NavAction::Initial => "initial",
            NavAction::Next => "next",
            NavAction::Previous => "previous",
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "initial" | "first" => Ok(NavAction::Initial),
            "next" => Ok(NavAction::Next),
            "previous" | "prev" => Ok(NavAction::Previous),
            other => Err(format!("unknown navigation action: {other}")),
        }
    }
}
